//! Conversation history and transcript state for the chat panel.
//!
//! DESIGN
//! ======
//! Two sequences are kept apart. `turns` is the durable record sent back to
//! the endpoint as context; `messages` is what the transcript shows,
//! including loading and error notices that never become turns.
//!
//! The submission pipeline is split into `begin_submit` and `resolve` so
//! the component only has to await the request between them. Each
//! submission owns its loading row by id, so overlapping submissions each
//! clear exactly their own indicator.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::config::ChatPanelConfig;
use crate::net::api::ChatOutcome;
use crate::net::types::{ChatRequest, ConversationTurn};

/// Visual role of a transcript row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl MessageRole {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
        }
    }
}

/// A rendered transcript row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayedMessage {
    pub id: String,
    pub text: String,
    pub role: MessageRole,
    pub loading: bool,
}

impl DisplayedMessage {
    /// Class list in the `message <role> [loading]` form the page CSS expects.
    pub fn class_name(&self) -> String {
        if self.loading {
            format!("message {} loading", self.role.css_class())
        } else {
            format!("message {}", self.role.css_class())
        }
    }
}

/// Work handed to the network layer after a successful `begin_submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    /// Id of the loading row this submission must remove when it resolves.
    pub loading_id: String,
    pub request: ChatRequest,
}

/// Chat panel conversation state.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub turns: Vec<ConversationTurn>,
    pub messages: Vec<DisplayedMessage>,
}

impl ChatState {
    /// Append a row to the end of the transcript and return its id.
    pub fn append_display(&mut self, text: impl Into<String>, role: MessageRole) -> String {
        self.push_row(text.into(), role, false)
    }

    /// Append a transient "thinking" row and return its id.
    pub fn append_loading(&mut self, text: impl Into<String>) -> String {
        self.push_row(text.into(), MessageRole::Assistant, true)
    }

    /// Remove the row with `id`. Returns `false` if no such row exists.
    pub fn remove_display(&mut self, id: &str) -> bool {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != id);
        self.messages.len() != before
    }

    /// The most recent `limit` turns in chronological order.
    pub fn context_window(&self, limit: usize) -> Vec<ConversationTurn> {
        let start = self.turns.len().saturating_sub(limit);
        self.turns[start..].to_vec()
    }

    /// Number of loading rows currently on screen.
    pub fn loading_count(&self) -> usize {
        self.messages.iter().filter(|m| m.loading).count()
    }

    /// Start a submission for `raw` input.
    ///
    /// Returns `None` without touching state when the trimmed input is empty.
    /// Otherwise records the user row and turn, shows a loading row, and
    /// returns the request to send.
    pub fn begin_submit(&mut self, raw: &str, config: &ChatPanelConfig) -> Option<PendingSubmission> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        self.append_display(text, MessageRole::User);
        self.turns.push(ConversationTurn::user(text));
        let loading_id = self.append_loading(config.loading_text.as_str());

        Some(PendingSubmission {
            loading_id,
            request: ChatRequest {
                message: text.to_owned(),
                history: self.context_window(config.context_turns),
            },
        })
    }

    /// Finish the submission that owns `loading_id`.
    pub fn resolve(&mut self, loading_id: &str, outcome: &ChatOutcome, config: &ChatPanelConfig) {
        self.remove_display(loading_id);
        match outcome {
            ChatOutcome::Reply(text) => {
                self.append_display(text.as_str(), MessageRole::Assistant);
                self.turns.push(ConversationTurn::model(text.as_str()));
            }
            ChatOutcome::Rejected(error) => {
                self.append_display(format!("Error: {error}"), MessageRole::System);
            }
            ChatOutcome::Failed(_) => {
                self.append_display(config.connection_error_text.as_str(), MessageRole::System);
            }
        }
    }

    fn push_row(&mut self, text: String, role: MessageRole, loading: bool) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.messages.push(DisplayedMessage {
            id: id.clone(),
            text,
            role,
            loading,
        });
        id
    }
}
