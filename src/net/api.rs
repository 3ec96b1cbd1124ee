//! HTTP call to the chat endpoint.
//!
//! Browser (`csr`): real HTTP call via `gloo-net`.
//! Native builds: stub returning `ChatError::Unavailable` since the
//! endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is not inspected; the body decides the outcome. Anything
//! that prevents a usable body (network failure, non-JSON payload, a body
//! with neither `response` nor `error`) collapses into `ChatOutcome::Failed`
//! so the panel can show one generic notice and stay usable.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, ChatRequest};

/// Failure to obtain a usable reply from the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("reply carried neither response nor error")]
    MissingReply,
    #[error("not available on server")]
    Unavailable,
}

/// Classified result of one chat request, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The model answered.
    Reply(String),
    /// The endpoint answered with an application-level error message.
    Rejected(String),
    /// No usable body arrived.
    Failed(ChatError),
}

impl ChatOutcome {
    /// Classify a raw request result. An `error` field wins over `response`.
    pub fn from_result(result: Result<ChatReply, ChatError>) -> Self {
        match result {
            Ok(reply) => match (reply.error.and_then(error_text), reply.response) {
                (Some(error), _) => Self::Rejected(error),
                (None, Some(response)) => Self::Reply(response),
                (None, None) => Self::Failed(ChatError::MissingReply),
            },
            Err(e) => Self::Failed(e),
        }
    }
}

/// Render an `error` field for display. Empty strings, `null` and `false`
/// count as absent; non-string values are shown as compact JSON.
fn error_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Send one chat request to `endpoint` with `POST`.
///
/// # Errors
///
/// Returns `ChatError::Transport` if the request cannot be sent and
/// `ChatError::Decode` if the body is not a JSON reply object.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn send_chat(endpoint: &str, request: &ChatRequest) -> Result<ChatReply, ChatError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(request)
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        resp.json::<ChatReply>()
            .await
            .map_err(|e| ChatError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ChatError::Unavailable)
    }
}
