//! Demo root mounting the chat panel.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::state::milestone::MilestoneBus;
use crate::util::dom_events::{TREE_GROWN_EVENT, listen_window_event};

/// Root component.
///
/// Owns the page's `MilestoneBus`, provides it as context for other widgets,
/// and forwards the page's `treeGrown` DOM event into it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bus = MilestoneBus::new();
    provide_context(bus);

    // Effects run once after mount, so the listener is attached a single time.
    Effect::new(move || {
        listen_window_event(TREE_GROWN_EVENT, bus);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-panel.css"/>
        <Title text="Chat"/>

        <ChatPanel bus=bus/>
    }
}
