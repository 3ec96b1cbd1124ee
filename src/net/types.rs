//! Wire schema for the chat endpoint.
//!
//! DESIGN
//! ======
//! Field names and sender tags match the JSON the endpoint already speaks:
//! `{ message, history: [{ sender, text }] }` out, `{ response }` or
//! `{ error }` back.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Author of a conversation turn as seen by the endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Model,
}

/// One exchanged message retained as context for later requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub sender: Sender,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { sender: Sender::Model, text: text.into() }
    }
}

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ConversationTurn>,
}

/// Raw response body. Exactly one field is expected to be set.
///
/// `error` is kept as raw JSON since some backends send a structured error
/// object instead of a string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}
