//! Networking for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and classifies its result, and `types`
//! defines the wire schema.

pub mod api;
pub mod types;
