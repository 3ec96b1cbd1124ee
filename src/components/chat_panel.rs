//! Collapsible assistant chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stays hidden until the injected `MilestoneBus` fires, then forwards typed
//! messages plus recent context to the chat endpoint and renders replies.
//! Conversation and chrome transitions live in `state::chat` and
//! `state::panel`; this component only binds them to the DOM and the
//! network.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::config::ChatPanelConfig;
use crate::net::api::ChatOutcome;
use crate::state::chat::{ChatState, PendingSubmission};
use crate::state::milestone::MilestoneBus;
use crate::state::panel::{PanelSize, PanelState};

/// Chat panel with transcript, input row, and collapse toggle.
///
/// Concurrent submissions are not serialized: each one shows and later
/// clears its own loading row.
#[component]
pub fn ChatPanel(
    /// Notification that reveals the panel the first time it fires.
    bus: MilestoneBus,
    #[prop(optional)] config: ChatPanelConfig,
) -> impl IntoView {
    let config = StoredValue::new(config);
    let chat = RwSignal::new(ChatState::default());
    let panel = RwSignal::new(PanelState::default());
    let input = RwSignal::new(String::new());

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        if reveal_on_milestone(bus, panel) {
            leptos::logging::log!("chat panel revealed");
        }
    });

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if let Some(pending) = submit_input(input, chat, config) {
            dispatch(chat, config, pending);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            ev.prevent_default();
            do_send();
        }
    };

    let on_toggle = move |_| {
        let measured = measure(panel_ref);
        config.with_value(|c| panel.update(|p| p.toggle_collapse(measured, c)));
    };

    let style = move || config.with_value(|c| panel.get().style(c));
    let affordance = move || panel.get().affordance();
    let placeholder = config.with_value(|c| c.placeholder.clone());

    view! {
        <div
            id="chatPanel"
            class="chat-panel"
            class:collapsed=move || panel.get().collapsed
            style:display=move || if panel.get().visible { "flex" } else { "none" }
            style:width=move || style().width.unwrap_or_default()
            style:height=move || style().height.unwrap_or_default()
            style:resize=move || style().resize
            node_ref=panel_ref
        >
            <div class="chat-panel__header">
                <span class="chat-panel__title">"Assistant"</span>
                <button
                    id="toggleChatBtn"
                    class="chat-panel__toggle"
                    title=move || affordance().label
                    aria-label=move || affordance().label
                    on:click=on_toggle
                >
                    <i class=move || affordance().icon_class></i>
                </button>
            </div>

            <div
                id="chatMessages"
                class="chat-panel__messages"
                aria-live="polite"
                aria-busy=move || (chat.with(ChatState::loading_count) > 0).to_string()
                node_ref=messages_ref
            >
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let id = msg.id.clone();
                            let class = msg.class_name();
                            let text = msg.text.clone();
                            view! { <div data-id=id class=class>{text}</div> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-panel__input-row">
                <input
                    id="chatInput"
                    class="chat-panel__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="sendMessageBtn" class="btn btn--primary chat-panel__send" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Reveal `panel` once `bus` has fired. Returns `true` on the transition.
fn reveal_on_milestone(bus: MilestoneBus, panel: RwSignal<PanelState>) -> bool {
    if !bus.reached() || panel.with_untracked(|p| p.visible) {
        return false;
    }
    panel.try_update(PanelState::reveal).unwrap_or(false)
}

/// Keys in the input that submit the message.
fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Start a submission from the current input.
///
/// Whitespace-only input is left in place and nothing is recorded.
/// Otherwise the input is cleared and the pending request returned.
fn submit_input(
    input: RwSignal<String>,
    chat: RwSignal<ChatState>,
    config: StoredValue<ChatPanelConfig>,
) -> Option<PendingSubmission> {
    let raw = input.get_untracked();
    if raw.trim().is_empty() {
        return None;
    }

    let pending = config.with_value(|c| chat.try_update(|s| s.begin_submit(&raw, c)).flatten())?;
    input.set(String::new());
    Some(pending)
}

/// Send `pending` and fold the classified result back into `chat`.
fn dispatch(chat: RwSignal<ChatState>, config: StoredValue<ChatPanelConfig>, pending: PendingSubmission) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let endpoint = config.with_value(|c| c.endpoint.clone());
        let result = crate::net::api::send_chat(&endpoint, &pending.request).await;
        if let Err(e) = &result {
            leptos::logging::warn!("chat request failed: {e}");
        }
        let outcome = ChatOutcome::from_result(result);
        config.with_value(|c| chat.update(|s| s.resolve(&pending.loading_id, &outcome, c)));
    });

    #[cfg(not(feature = "csr"))]
    {
        let outcome = ChatOutcome::Failed(crate::net::api::ChatError::Unavailable);
        config.with_value(|c| chat.update(|s| s.resolve(&pending.loading_id, &outcome, c)));
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn measure(panel_ref: NodeRef<leptos::html::Div>) -> PanelSize {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = panel_ref.get_untracked() {
            let rect = el.get_bounding_client_rect();
            return PanelSize {
                width: rect.width(),
                height: rect.height(),
            };
        }
    }
    PanelSize::default()
}
