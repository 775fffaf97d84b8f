use dioxus::prelude::*;

use crate::shared::logging::log_panel_transition;

/// UI triggers that move the mobile navigation panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    OpenButton,
    OverlayClick,
    CloseButton,
    LinkClick,
}

impl PanelEvent {
    /// Panel state after the trigger fires, whatever it was before
    pub fn leaves_open(&self) -> bool {
        match self {
            PanelEvent::OpenButton => true,
            PanelEvent::OverlayClick | PanelEvent::CloseButton | PanelEvent::LinkClick => false,
        }
    }
}

/// Mobile panel flag, local to one sidebar instance
#[derive(Clone, Copy)]
pub struct UseSidebarPanel {
    pub open: Signal<bool>,
}

impl UseSidebarPanel {
    pub fn is_open(&self) -> bool {
        *self.open.read()
    }

    pub fn dispatch(&mut self, event: PanelEvent, route: &str) {
        let current = *self.open.read();
        let next = event.leaves_open();
        if next != current {
            log_panel_transition(route, next);
            self.open.set(next);
        }
    }
}

/// Starts closed on every mount
pub fn use_sidebar_panel() -> UseSidebarPanel {
    let open = use_signal(|| false);
    UseSidebarPanel { open }
}
