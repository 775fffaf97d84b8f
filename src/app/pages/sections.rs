//! Section pages behind the sidebar entries.
//!
//! Each section's data lives behind its own service; these pages only
//! provide the shell the sidebar navigates to.

use dioxus::prelude::*;

use crate::app::components::{Card, EmptyState, PageHeader};
use crate::app::routes::Route;
use crate::config::PREDICTIONS_ENDPOINT;
use crate::domain::models::navigation::find_by_href;
use crate::domain::models::NAVIGATION;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crops offered as shortcuts on the planning page
pub const FEATURED_CROPS: [(&str, &str); 6] = [
    ("wheat", "🌾"),
    ("maize", "🌽"),
    ("rice", "🍚"),
    ("soybeans", "🫘"),
    ("potatoes", "🥔"),
    ("tomatoes", "🍅"),
];

/// Header built from the navigation entry for `href`
#[component]
fn SectionHeader(href: &'static str, subtitle: &'static str) -> Element {
    let (icon, title) = find_by_href(href)
        .map(|item| (item.icon, item.name))
        .unwrap_or(("📄", "Farm Hub"));

    rsx! {
        PageHeader {
            icon: icon.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        }
    }
}

/// Placeholder body for sections without content yet
#[component]
fn SectionPlaceholder(href: &'static str, subtitle: &'static str, empty: &'static str) -> Element {
    rsx! {
        section { class: "c-page",
            SectionHeader { href, subtitle }
            EmptyState {
                icon: "🌱".to_string(),
                title: "Nothing here yet".to_string(),
                description: empty.to_string(),
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        section { class: "c-page",
            SectionHeader { href: "/dashboard", subtitle: "Overview of your farm operations" }
            div { class: "c-grid",
                for item in NAVIGATION.iter().filter(|i| i.href != "/dashboard") {
                    Link { key: "{item.href}", to: item.href, class: "c-grid__link",
                        Card {
                            title: item.name.to_string(),
                            icon: item.icon.to_string(),
                            p { class: "c-card__hint", "Open {item.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Farms() -> Element {
    rsx! {
        SectionPlaceholder {
            href: "/farms",
            subtitle: "Fields, plots and farm details",
            empty: "Add your first farm to start tracking fields and plots.",
        }
    }
}

#[component]
pub fn CropPlanning() -> Element {
    rsx! {
        section { class: "c-page",
            SectionHeader { href: "/crops", subtitle: "Plan plantings and rotations" }
            div { class: "c-grid",
                for (crop, icon) in FEATURED_CROPS {
                    Link {
                        key: "{crop}",
                        to: Route::CropDetail { crop: crop.to_string() },
                        class: "c-grid__link",
                        Card { title: crop_label(crop), icon: icon.to_string(),
                            p { class: "c-card__hint", "Planting calendar and notes" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn CropDetail(crop: String) -> Element {
    let label = crop_label(&crop);

    rsx! {
        section { class: "c-page",
            PageHeader {
                icon: "🌱".to_string(),
                title: label.clone(),
                subtitle: "Crop plan".to_string(),
            }
            p { class: "c-page__text",
                "Need a forecast for {label}? "
                Link { to: Route::Predictions {}, "Ask the AI predictions assistant." }
            }
            Link { to: Route::CropPlanning {}, class: "c-page__back", "← All crops" }
        }
    }
}

#[component]
pub fn Livestock() -> Element {
    rsx! {
        SectionPlaceholder {
            href: "/livestock",
            subtitle: "Herds, health records and breeding",
            empty: "No animals recorded yet.",
        }
    }
}

#[component]
pub fn Inventory() -> Element {
    rsx! {
        SectionPlaceholder {
            href: "/inventory",
            subtitle: "Seed, feed, fertilizer and equipment",
            empty: "No inventory items recorded yet.",
        }
    }
}

#[component]
pub fn Finances() -> Element {
    rsx! {
        SectionPlaceholder {
            href: "/finances",
            subtitle: "Income, expenses and budgets",
            empty: "No transactions recorded yet.",
        }
    }
}

#[component]
pub fn Weather() -> Element {
    rsx! {
        SectionPlaceholder {
            href: "/weather",
            subtitle: "Local conditions and forecasts",
            empty: "Set a farm location to see local weather.",
        }
    }
}

#[component]
pub fn Tasks() -> Element {
    rsx! {
        SectionPlaceholder {
            href: "/tasks",
            subtitle: "Field work and reminders",
            empty: "No tasks scheduled.",
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        section { class: "c-page",
            SectionHeader { href: "/settings", subtitle: "Application preferences" }
            dl { class: "c-settings-list",
                dt { "Prediction endpoint" }
                dd { code { "{PREDICTIONS_ENDPOINT}" } }
                dt { "Version" }
                dd { "{VERSION}" }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        section { class: "c-page",
            EmptyState {
                icon: "🧭".to_string(),
                title: "Page not found".to_string(),
                description: format!("Nothing lives at {path}."),
            }
            Link { to: Route::Dashboard {}, class: "c-page__back", "← Back to dashboard" }
        }
    }
}

/// Display label for a crop slug: decoded, dashes to spaces, capitalised
pub fn crop_label(slug: &str) -> String {
    let decoded = urlencoding::decode(slug)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| slug.to_string());
    let spaced = decoded.replace('-', " ");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
