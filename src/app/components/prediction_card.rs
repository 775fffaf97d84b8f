use dioxus::prelude::*;

use crate::app::components::render_markdown;
use crate::domain::models::PredictionRecord;

/// One prediction record. Records without the usual keys are shown as JSON.
#[component]
pub fn PredictionCard(record: PredictionRecord, index: usize) -> Element {
    let title = record
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Prediction {}", index + 1));
    let description = record.description().map(render_markdown);
    let confidence = record.confidence_percent().map(|c| format!("{:.0}%", c.clamp(0.0, 100.0)));
    let timeframe = record.timeframe().map(str::to_string);
    let recommendations: Vec<String> = record.recommendations().into_iter().map(str::to_string).collect();

    let fallback = if description.is_none() && recommendations.is_empty() {
        match record.0.as_str() {
            Some(text) => Some(text.to_string()),
            None => serde_json::to_string_pretty(&record.0).ok(),
        }
    } else {
        None
    };

    rsx! {
        article { class: "c-prediction-card",
            header { class: "c-prediction-card__header",
                h3 { class: "c-prediction-card__title", "{title}" }
                if let Some(confidence) = confidence {
                    span { class: "c-prediction-card__badge", "Confidence {confidence}" }
                }
            }
            if let Some(timeframe) = timeframe {
                p { class: "c-prediction-card__timeframe", "🗓️ {timeframe}" }
            }
            if let Some(html) = description {
                div { class: "c-prediction-card__body c-markdown", dangerous_inner_html: "{html}" }
            }
            if !recommendations.is_empty() {
                ul { class: "c-prediction-card__recommendations",
                    for (i, recommendation) in recommendations.into_iter().enumerate() {
                        li { key: "{i}", "{recommendation}" }
                    }
                }
            }
            if let Some(text) = fallback {
                pre { class: "c-prediction-card__raw", "{text}" }
            }
        }
    }
}
