use dioxus::prelude::*;

use crate::shared::hooks::{use_toast, Toast};

/// Renders the toasts held by the layout's toast queue
#[component]
pub fn ToastViewport() -> Element {
    let toaster = use_toast();
    let toasts: Vec<Toast> = toaster.queue.read().iter().cloned().collect();

    rsx! {
        ol {
            class: "c-toast-viewport",
            aria_label: "Notifications",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toaster = use_toast();
    let id = toast.id;
    let options = toast.options;

    rsx! {
        li {
            class: "{options.class_name}",
            role: "status",
            "data-variant": options.variant.as_str(),
            div { class: "c-toast__content",
                p { class: "c-toast__title", "{options.title}" }
                p { class: "c-toast__description", "{options.description}" }
            }
            button {
                class: "c-toast__close",
                aria_label: "Dismiss notification",
                onclick: move |_| toaster.dismiss(id),
                "✕"
            }
        }
    }
}
