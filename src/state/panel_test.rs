use super::*;

fn config() -> ChatPanelConfig {
    ChatPanelConfig::default()
}

fn size(width: f64, height: f64) -> PanelSize {
    PanelSize { width, height }
}

// =============================================================
// PanelState defaults / reveal
// =============================================================

#[test]
fn panel_state_default_hidden_and_expanded() {
    let state = PanelState::default();
    assert!(!state.visible);
    assert!(!state.collapsed);
    assert!(state.saved_size.is_none());
}

#[test]
fn reveal_is_idempotent() {
    let mut state = PanelState::default();
    assert!(state.reveal());
    assert!(!state.reveal());
    assert!(state.visible);
}

// =============================================================
// toggle_collapse
// =============================================================

#[test]
fn collapse_forces_square_footprint_and_disables_resize() {
    let mut state = PanelState::default();
    state.toggle_collapse(size(300.0, 200.0), &config());
    assert!(state.collapsed);
    let style = state.style(&config());
    assert_eq!(style.width.as_deref(), Some("48px"));
    assert_eq!(style.height.as_deref(), Some("48px"));
    assert_eq!(style.resize, "none");
}

#[test]
fn collapse_at_default_size_clears_remembered_size() {
    let mut state = PanelState {
        saved_size: Some(size(500.0, 400.0)),
        ..PanelState::default()
    };
    state.toggle_collapse(size(300.0, 200.0), &config());
    assert!(state.saved_size.is_none());

    state.toggle_collapse(PanelSize::default(), &config());
    let style = state.style(&config());
    assert!(style.width.is_none());
    assert!(style.height.is_none());
    assert_eq!(style.resize, "both");
}

#[test]
fn collapse_after_resize_remembers_exact_size() {
    let mut state = PanelState::default();
    state.toggle_collapse(size(412.5, 180.0), &config());
    assert_eq!(state.saved_size, Some(size(412.5, 180.0)));

    state.toggle_collapse(size(48.0, 48.0), &config());
    let style = state.style(&config());
    assert_eq!(style.width.as_deref(), Some("412.5px"));
    assert_eq!(style.height.as_deref(), Some("180px"));
}

#[test]
fn height_alone_over_threshold_is_remembered() {
    let mut state = PanelState::default();
    state.toggle_collapse(size(280.0, 350.0), &config());
    assert_eq!(state.saved_size, Some(size(280.0, 350.0)));
}

#[test]
fn expand_does_not_overwrite_remembered_size() {
    let mut state = PanelState::default();
    state.toggle_collapse(size(600.0, 400.0), &config());
    state.toggle_collapse(size(48.0, 48.0), &config());
    assert!(!state.collapsed);
    assert_eq!(state.saved_size, Some(size(600.0, 400.0)));
}

#[test]
fn custom_thresholds_apply() {
    let config = ChatPanelConfig {
        width_threshold: 500.0,
        height_threshold: 500.0,
        collapsed_footprint: 32.0,
        ..ChatPanelConfig::default()
    };
    let mut state = PanelState::default();
    state.toggle_collapse(size(450.0, 450.0), &config);
    assert!(state.saved_size.is_none());
    assert_eq!(state.style(&config).width.as_deref(), Some("32px"));
}

// =============================================================
// Affordance
// =============================================================

#[test]
fn affordance_tracks_collapse() {
    let mut state = PanelState::default();
    assert_eq!(state.affordance().label, "Close Chat");
    assert_eq!(state.affordance().icon_class, "fas fa-chevron-left");
    state.toggle_collapse(PanelSize::default(), &config());
    assert_eq!(state.affordance().label, "Open Chat");
    assert_eq!(state.affordance().icon_class, "fas fa-comment-dots");
}
