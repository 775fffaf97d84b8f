use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    /// Shows a spinner and blocks clicks while true
    loading: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let loading = loading.unwrap_or(false);

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Secondary => "c-button--secondary",
    };

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: "button",
            disabled: loading,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            if loading {
                span { class: "c-button__spinner" }
            }
            {children}
        }
    }
}
