//! Prompt construction for the AI prediction endpoint
//!
//! One template per known category; unknown categories get a generic
//! sentence with no substitutions.

use crate::domain::models::PredictionCategory;

/// Prompt used for any category outside the template table
pub const FALLBACK_PROMPT: &str =
    "Provide general agricultural insights and recommendations for this farm.";

const DEFAULT_FARM_TYPE: &str = "mixed";
const DEFAULT_CROP_TYPE: &str = "general crops";

fn template(category: PredictionCategory, location: &str, farm: &str, crop: &str) -> String {
    match category {
        PredictionCategory::Yield => format!(
            "Predict the expected harvest yield for {crop} grown on a {farm} farm in {location}. \
             Include an estimated range per hectare and the main factors driving it."
        ),
        PredictionCategory::Weather => format!(
            "Forecast how upcoming weather in {location} is likely to affect a {farm} farm growing {crop}. \
             Highlight risks and suggested protective actions."
        ),
        PredictionCategory::Market => format!(
            "Predict near-term market prices for {crop} relevant to a {farm} farm selling in {location}. \
             Suggest the best time to sell."
        ),
        PredictionCategory::Disease => format!(
            "Assess the pest and disease risk for {crop} on a {farm} farm in {location}. \
             List the most likely threats and preventive measures."
        ),
    }
}

/// Build the prompt for a category key.
///
/// Missing farm or crop types fall back to generic wording; supplied values
/// are inserted verbatim.
pub fn build_prompt(
    location: &str,
    farm_type: Option<&str>,
    crop_type: Option<&str>,
    prediction_type: &str,
) -> String {
    match PredictionCategory::from_key(prediction_type) {
        Some(category) => template(
            category,
            location,
            farm_type.unwrap_or(DEFAULT_FARM_TYPE),
            crop_type.unwrap_or(DEFAULT_CROP_TYPE),
        ),
        None => FALLBACK_PROMPT.to_string(),
    }
}

/// Same as [`build_prompt`], with a free-text question appended when present
pub fn build_prompt_with_query(
    location: &str,
    farm_type: Option<&str>,
    crop_type: Option<&str>,
    prediction_type: &str,
    custom_query: Option<&str>,
) -> String {
    let prompt = build_prompt(location, farm_type, crop_type, prediction_type);

    match custom_query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(query) => format!("{prompt}\n\nAdditional question: {query}"),
        None => prompt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories_substitute_inputs_verbatim() {
        for category in PredictionCategory::ALL {
            let prompt = build_prompt("Rift Valley", Some("smallholder"), Some("Sweet Corn"), category.key());

            assert!(prompt.contains("Rift Valley"), "{category}: {prompt}");
            assert!(prompt.contains("smallholder"), "{category}: {prompt}");
            assert!(prompt.contains("Sweet Corn"), "{category}: {prompt}");
            assert_ne!(prompt, FALLBACK_PROMPT);
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        let prompts: Vec<String> = PredictionCategory::ALL
            .iter()
            .map(|c| build_prompt("Kano", None, None, c.key()))
            .collect();

        for (i, prompt) in prompts.iter().enumerate() {
            assert!(prompts[i + 1..].iter().all(|other| other != prompt));
        }
    }

    #[test]
    fn test_missing_types_use_generic_wording() {
        let prompt = build_prompt("Punjab", None, None, "yield");
        assert!(prompt.contains("general crops"));
        assert!(prompt.contains("mixed farm"));
    }

    #[test]
    fn test_unknown_category_returns_fallback() {
        for key in ["soil", "", "YIELD", "weather "] {
            assert_eq!(
                build_prompt("Punjab", Some("rice"), Some("paddy"), key),
                FALLBACK_PROMPT
            );
        }
    }

    #[test]
    fn test_custom_query_is_appended() {
        let prompt = build_prompt_with_query("Bavaria", None, Some("barley"), "market", Some(" Export options? "));
        assert!(prompt.ends_with("\n\nAdditional question: Export options?"));

        let fallback = build_prompt_with_query("Bavaria", None, None, "other", Some("Anything else?"));
        assert!(fallback.starts_with(FALLBACK_PROMPT));
        assert!(fallback.ends_with("Anything else?"));
    }

    #[test]
    fn test_blank_custom_query_is_ignored() {
        assert_eq!(
            build_prompt_with_query("Bavaria", None, None, "weather", Some("   ")),
            build_prompt("Bavaria", None, None, "weather")
        );
    }
}
