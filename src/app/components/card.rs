use dioxus::prelude::*;

#[component]
pub fn Card(title: Option<String>, icon: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "c-card",
            if let Some(title) = title {
                div {
                    class: "c-card__header",
                    if let Some(icon) = icon {
                        span { class: "c-card__icon", "{icon}" }
                    }
                    h3 {
                        class: "c-card__title",
                        "{title}"
                    }
                }
            }
            div {
                class: "c-card__body",
                {children}
            }
        }
    }
}
