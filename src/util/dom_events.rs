//! Bridge from window DOM events into a `MilestoneBus`.
//!
//! Pages that announce milestones by dispatching a `CustomEvent` on
//! `window` can forward them here instead of touching widget state.
//! Requires a browser environment.

use crate::state::milestone::MilestoneBus;

/// Event the host page dispatches when its content is unlocked.
pub const TREE_GROWN_EVENT: &str = "treeGrown";

/// Forward every `name` event fired on `window` to `bus`.
///
/// Returns `false` when no window is available or registration fails. The
/// listener stays attached for the lifetime of the page.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn listen_window_event(name: &str, bus: MilestoneBus) -> bool {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return false;
        };
        let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| bus.notify());
        if window
            .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("failed to listen for {name}");
            return false;
        }
        cb.forget();
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}
