//! Widget configuration.
//!
//! DESIGN
//! ======
//! All tunables live in one plain struct handed to `ChatPanel` as a prop.
//! Defaults reproduce the page the widget was built for; hosts override
//! individual fields with struct update syntax.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Number of trailing conversation turns sent as context with each message.
pub const DEFAULT_CONTEXT_TURNS: usize = 10;

/// Panel width at or below which a collapse forgets any remembered size.
pub const DEFAULT_WIDTH_THRESHOLD: f64 = 300.0;

/// Panel height at or below which a collapse forgets any remembered size.
pub const DEFAULT_HEIGHT_THRESHOLD: f64 = 200.0;

/// Edge length of the square footprint used while collapsed.
pub const COLLAPSED_FOOTPRINT: f64 = 48.0;

/// Tunables for a `ChatPanel` instance.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatPanelConfig {
    /// Endpoint receiving `POST` chat requests.
    pub endpoint: String,
    pub context_turns: usize,
    pub width_threshold: f64,
    pub height_threshold: f64,
    pub collapsed_footprint: f64,
    /// Text shown in the transient row while a reply is outstanding.
    pub loading_text: String,
    /// Text shown when the request fails before a usable reply arrives.
    pub connection_error_text: String,
    pub placeholder: String,
}

impl Default for ChatPanelConfig {
    fn default() -> Self {
        Self {
            endpoint: "/api/chat".to_owned(),
            context_turns: DEFAULT_CONTEXT_TURNS,
            width_threshold: DEFAULT_WIDTH_THRESHOLD,
            height_threshold: DEFAULT_HEIGHT_THRESHOLD,
            collapsed_footprint: COLLAPSED_FOOTPRINT,
            loading_text: "Thinking...".to_owned(),
            connection_error_text: "Error connecting to assistant.".to_owned(),
            placeholder: "Ask something...".to_owned(),
        }
    }
}
