use dioxus::prelude::*;

use crate::app::routes::Route;
use crate::domain::models::{NavItem, NAVIGATION};
use crate::shared::hooks::{use_sidebar_panel, PanelEvent};

/// Navigation sidebar: a fixed pane on desktop, an overlay panel on mobile.
/// Both panels render the same entries and highlight the same active route.
#[component]
pub fn Sidebar() -> Element {
    let route = use_route::<Route>();
    let current_route = route.to_string();
    let mut panel = use_sidebar_panel();

    let open_route = current_route.clone();
    let overlay_route = current_route.clone();
    let close_route = current_route.clone();
    let link_route = current_route.clone();

    rsx! {
        // Mobile top bar
        header { class: "c-mobile-bar",
            button {
                class: "c-mobile-bar__toggle",
                aria_label: "Open navigation",
                onclick: move |_| panel.dispatch(PanelEvent::OpenButton, &open_route),
                "☰"
            }
            span { class: "c-mobile-bar__title", "🌾 Farm Hub" }
        }

        // Mobile overlay panel
        if panel.is_open() {
            div { class: "c-sidebar-overlay",
                div {
                    class: "c-sidebar-overlay__backdrop",
                    onclick: move |_| panel.dispatch(PanelEvent::OverlayClick, &overlay_route),
                }
                aside { class: "c-sidebar c-sidebar--mobile",
                    div { class: "c-sidebar__header",
                        SidebarBrand {}
                        button {
                            class: "c-sidebar__close",
                            aria_label: "Close navigation",
                            onclick: move |_| panel.dispatch(PanelEvent::CloseButton, &close_route),
                            "✕"
                        }
                    }
                    SidebarNav {
                        current_route: current_route.clone(),
                        on_navigate: move |_| panel.dispatch(PanelEvent::LinkClick, &link_route),
                    }
                }
            }
        }

        // Desktop fixed pane
        aside { class: "c-sidebar c-sidebar--desktop",
            div { class: "c-sidebar__header",
                SidebarBrand {}
            }
            SidebarNav { current_route: current_route.clone() }
        }
    }
}

#[component]
fn SidebarBrand() -> Element {
    rsx! {
        Link {
            to: Route::Dashboard {},
            class: "c-sidebar__brand",
            span { class: "c-sidebar__brand-icon", "🌾" }
            span { class: "c-sidebar__brand-text", "Farm Hub" }
        }
    }
}

#[component]
fn SidebarNav(current_route: String, on_navigate: Option<EventHandler<()>>) -> Element {
    rsx! {
        nav { class: "c-sidebar__nav",
            ul { class: "c-sidebar__list",
                for item in NAVIGATION.iter() {
                    SidebarLink {
                        key: "{item.href}",
                        item: *item,
                        active: item.is_active(&current_route),
                        on_navigate,
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarLink(item: NavItem, active: bool, on_navigate: Option<EventHandler<()>>) -> Element {
    let item_class = if active {
        "c-sidebar__item c-sidebar__item--active"
    } else {
        "c-sidebar__item"
    };

    rsx! {
        li {
            Link {
                to: item.href,
                class: "{item_class}",
                onclick: move |_| {
                    if let Some(handler) = on_navigate {
                        handler.call(());
                    }
                },
                span { class: "c-sidebar__icon", "{item.icon}" }
                span { class: "c-sidebar__label", "{item.name}" }
            }
        }
    }
}
