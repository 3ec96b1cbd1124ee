//! Chat panel state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat` transcript, `panel` chrome,
//! `milestone` activation) so the component can hold each in its own
//! signal and the transitions stay testable without a browser.

pub mod chat;
pub mod milestone;
pub mod panel;
