//! Browser helpers.

pub mod dom_events;
