use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Reusable Empty State Component (BEM: c-empty-state)
#[component]
pub fn EmptyState(icon: String, title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            h3 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
        }
    }
}

// Page header shared by every section page
#[component]
pub fn PageHeader(icon: String, title: String, subtitle: Option<String>) -> Element {
    rsx! {
        header { class: "c-page-header",
            h1 { class: "c-page-header__title",
                span { class: "c-page-header__icon", "{icon}" }
                "{title}"
            }
            if let Some(subtitle) = subtitle {
                p { class: "c-page-header__subtitle", "{subtitle}" }
            }
        }
    }
}
