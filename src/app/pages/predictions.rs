use dioxus::prelude::*;

use crate::app::components::{
    render_markdown, Button, ButtonVariant, EmptyState, ErrorMessage, LoadingText, PageHeader, PredictionCard,
};
use crate::domain::models::{PredictionCategory, PredictionRequest, PredictionResponse};
use crate::shared::hooks::{use_predictions, use_toast};

/// Key of the picker entry without a dedicated template
pub const GENERAL_CATEGORY_KEY: &str = "general";

/// Build a request from raw form values. `None` when the location is blank.
pub fn request_from_form(
    location: &str,
    farm_type: &str,
    crop_type: &str,
    prediction_type: &str,
    custom_query: &str,
) -> Option<PredictionRequest> {
    let location = location.trim();
    if location.is_empty() {
        return None;
    }

    let mut request = PredictionRequest::new(location, prediction_type);
    if !farm_type.trim().is_empty() {
        request = request.with_farm_type(farm_type.trim());
    }
    if !crop_type.trim().is_empty() {
        request = request.with_crop_type(crop_type.trim());
    }
    if !custom_query.trim().is_empty() {
        request = request.with_custom_query(custom_query.trim());
    }
    Some(request)
}

#[component]
pub fn Predictions() -> Element {
    let mut location = use_signal(String::new);
    let mut farm_type = use_signal(String::new);
    let mut crop_type = use_signal(String::new);
    let mut category = use_signal(|| PredictionCategory::default().key().to_string());
    let mut custom_query = use_signal(String::new);

    let state = use_predictions();
    let toaster = use_toast();

    let preview = request_from_form(
        &location.read(),
        &farm_type.read(),
        &crop_type.read(),
        &category.read(),
        &custom_query.read(),
    )
    .map(|request| request.prompt());

    let on_submit = move |_| {
        let request = request_from_form(
            &location.read(),
            &farm_type.read(),
            &crop_type.read(),
            &category.read(),
            &custom_query.read(),
        );

        match request {
            Some(request) => state.submit(request, toaster),
            None => {
                let mut toaster = toaster;
                toaster.warning("Please enter a location before requesting predictions.");
            }
        }
    };

    let on_reset = move |_| {
        location.set(String::new());
        farm_type.set(String::new());
        crop_type.set(String::new());
        category.set(PredictionCategory::default().key().to_string());
        custom_query.set(String::new());
    };

    let is_loading = *state.is_loading.read();

    rsx! {
        section { class: "c-page c-predictions",
            PageHeader {
                icon: "🤖".to_string(),
                title: "AI Predictions".to_string(),
                subtitle: "Yield, weather, market and disease forecasts for your farm".to_string(),
            }

            div { class: "c-predictions__form",
                label { class: "c-field",
                    span { class: "c-field__label", "Location" }
                    input {
                        class: "c-field__input",
                        r#type: "text",
                        placeholder: "e.g. Nakuru, Kenya",
                        value: "{location}",
                        oninput: move |evt| location.set(evt.value()),
                    }
                }
                label { class: "c-field",
                    span { class: "c-field__label", "Farm type" }
                    input {
                        class: "c-field__input",
                        r#type: "text",
                        placeholder: "e.g. smallholder, dairy, orchard",
                        value: "{farm_type}",
                        oninput: move |evt| farm_type.set(evt.value()),
                    }
                }
                label { class: "c-field",
                    span { class: "c-field__label", "Crop" }
                    input {
                        class: "c-field__input",
                        r#type: "text",
                        placeholder: "e.g. maize",
                        value: "{crop_type}",
                        oninput: move |evt| crop_type.set(evt.value()),
                    }
                }
                label { class: "c-field",
                    span { class: "c-field__label", "Prediction" }
                    select {
                        class: "c-field__input",
                        value: "{category}",
                        onchange: move |evt| category.set(evt.value()),
                        for choice in PredictionCategory::ALL {
                            option { key: "{choice.key()}", value: choice.key(), "{choice.label()}" }
                        }
                        option { value: GENERAL_CATEGORY_KEY, "General insights" }
                    }
                }
                label { class: "c-field c-field--wide",
                    span { class: "c-field__label", "Question (optional)" }
                    textarea {
                        class: "c-field__input",
                        rows: "3",
                        placeholder: "Anything specific you want to know?",
                        value: "{custom_query}",
                        oninput: move |evt| custom_query.set(evt.value()),
                    }
                }

                if let Some(prompt) = preview {
                    details { class: "c-predictions__preview",
                        summary { "Prompt preview" }
                        pre { "{prompt}" }
                    }
                }

                div { class: "c-predictions__actions",
                    Button {
                        loading: is_loading,
                        onclick: on_submit,
                        if is_loading { "Generating..." } else { "Generate predictions" }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: on_reset,
                        "Reset"
                    }
                }
            }

            if is_loading {
                LoadingText { message: "Asking the prediction service...".to_string() }
            } else {
                PredictionResults { response: state.response.read().clone() }
            }
        }
    }
}

#[component]
fn PredictionResults(#[props(!optional)] response: Option<PredictionResponse>) -> Element {
    let Some(response) = response else {
        return rsx! {
            EmptyState {
                icon: "🌦️".to_string(),
                title: "No predictions yet".to_string(),
                description: "Fill in your farm details and generate a forecast.".to_string(),
            }
        };
    };

    if !response.success {
        let message = response
            .error
            .unwrap_or_else(|| "Failed to generate predictions".to_string());
        return rsx! {
            ErrorMessage { message }
        };
    }

    let raw_html = response.raw_response.as_deref().map(render_markdown);

    rsx! {
        div { class: "c-predictions__results",
            for (index, record) in response.predictions.into_iter().enumerate() {
                PredictionCard { key: "{index}", record, index }
            }
            if let Some(html) = raw_html {
                details { class: "c-predictions__raw",
                    summary { "Full response" }
                    div { class: "c-markdown", dangerous_inner_html: "{html}" }
                }
            }
        }
    }
}
