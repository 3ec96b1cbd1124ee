//! # chat-panel
//!
//! Leptos + WASM chat widget: a collapsible panel that appears when the page
//! reaches a milestone, sends typed messages with recent context to a chat
//! endpoint, and renders the replies.
//!
//! This crate contains the component, its state transitions, configuration,
//! the wire types and HTTP call for the endpoint, and a client-rendered demo root.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and mounts `App` into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
