//! Visibility and collapse state for the chat panel chrome.
//!
//! DESIGN
//! ======
//! The panel is hidden until revealed, then toggles between an expanded
//! window the user may resize and a fixed square launcher. A manual resize
//! survives a collapse/expand cycle only if it grew the panel beyond the
//! default footprint; otherwise expanding hands sizing back to the page CSS.

#[cfg(test)]
#[path = "panel_test.rs"]
mod panel_test;

use crate::config::ChatPanelConfig;

/// Rendered panel dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

/// Inline style overrides derived from `PanelState`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelStyle {
    /// `None` leaves width to the stylesheet.
    pub width: Option<String>,
    pub height: Option<String>,
    pub resize: &'static str,
}

/// Icon and label of the collapse/expand control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleAffordance {
    pub icon_class: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PanelState {
    pub visible: bool,
    pub collapsed: bool,
    /// Size to restore on the next expand.
    pub saved_size: Option<PanelSize>,
}

fn px(value: f64) -> String {
    format!("{value}px")
}

impl PanelState {
    /// Make the panel visible. Returns `true` if it was hidden before.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Flip between collapsed and expanded.
    ///
    /// `measured` is the panel's rendered size right before the toggle; it
    /// only matters when collapsing.
    pub fn toggle_collapse(&mut self, measured: PanelSize, config: &ChatPanelConfig) {
        self.collapsed = !self.collapsed;
        if self.collapsed {
            let grown = measured.width > config.width_threshold
                || measured.height > config.height_threshold;
            self.saved_size = grown.then_some(measured);
        }
    }

    pub fn style(&self, config: &ChatPanelConfig) -> PanelStyle {
        if self.collapsed {
            let edge = px(config.collapsed_footprint);
            return PanelStyle {
                width: Some(edge.clone()),
                height: Some(edge),
                resize: "none",
            };
        }
        PanelStyle {
            width: self.saved_size.map(|s| px(s.width)),
            height: self.saved_size.map(|s| px(s.height)),
            resize: "both",
        }
    }

    pub fn affordance(&self) -> ToggleAffordance {
        if self.collapsed {
            ToggleAffordance {
                icon_class: "fas fa-comment-dots",
                label: "Open Chat",
            }
        } else {
            ToggleAffordance {
                icon_class: "fas fa-chevron-left",
                label: "Close Chat",
            }
        }
    }
}
