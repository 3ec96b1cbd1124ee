//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components bind the pure state in `state` to the DOM and own the signals
//! that hold it.

pub mod chat_panel;
