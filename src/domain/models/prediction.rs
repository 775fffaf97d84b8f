use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prediction categories with a dedicated prompt template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionCategory {
    #[default]
    Yield,
    Weather,
    Market,
    Disease,
}

impl PredictionCategory {
    pub const ALL: [PredictionCategory; 4] = [
        PredictionCategory::Yield,
        PredictionCategory::Weather,
        PredictionCategory::Market,
        PredictionCategory::Disease,
    ];

    /// Wire key sent as `predictionType`
    pub fn key(&self) -> &'static str {
        match self {
            PredictionCategory::Yield => "yield",
            PredictionCategory::Weather => "weather",
            PredictionCategory::Market => "market",
            PredictionCategory::Disease => "disease",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PredictionCategory::Yield => "Yield forecast",
            PredictionCategory::Weather => "Weather impact",
            PredictionCategory::Market => "Market prices",
            PredictionCategory::Disease => "Pest & disease risk",
        }
    }

    /// Exact match on the wire key. Anything else has no template.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for PredictionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Body of `POST /api/gemini-predictions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farm_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    /// Kept as a string: the endpoint accepts keys outside the template table
    pub prediction_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_query: Option<String>,
}

impl PredictionRequest {
    pub fn new(location: impl Into<String>, prediction_type: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            farm_type: None,
            crop_type: None,
            prediction_type: prediction_type.into(),
            custom_query: None,
        }
    }

    pub fn with_farm_type(mut self, farm_type: impl Into<String>) -> Self {
        self.farm_type = Some(farm_type.into());
        self
    }

    pub fn with_crop_type(mut self, crop_type: impl Into<String>) -> Self {
        self.crop_type = Some(crop_type.into());
        self
    }

    pub fn with_custom_query(mut self, query: impl Into<String>) -> Self {
        self.custom_query = Some(query.into());
        self
    }

    /// Prompt the endpoint will be asked, for previewing in the UI
    pub fn prompt(&self) -> String {
        crate::domain::services::prompt::build_prompt_with_query(
            &self.location,
            self.farm_type.as_deref(),
            self.crop_type.as_deref(),
            &self.prediction_type,
            self.custom_query.as_deref(),
        )
    }
}

/// One prediction as returned by the endpoint.
///
/// The record is kept verbatim; accessors only read conventional keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictionRecord(pub Value);

impl PredictionRecord {
    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.str_field("title")
    }

    pub fn description(&self) -> Option<&str> {
        self.str_field("description")
            .or_else(|| self.str_field("prediction"))
    }

    pub fn timeframe(&self) -> Option<&str> {
        self.str_field("timeframe")
    }

    /// Confidence as a 0-100 percentage. Accepts 0-1 fractions and numeric strings.
    pub fn confidence_percent(&self) -> Option<f64> {
        let raw = match self.0.get("confidence")? {
            Value::Number(n) => n.as_f64()?,
            Value::String(s) => s.trim().trim_end_matches('%').parse().ok()?,
            _ => return None,
        };
        if (0.0..=1.0).contains(&raw) {
            Some(raw * 100.0)
        } else {
            Some(raw)
        }
    }

    pub fn recommendations(&self) -> Vec<&str> {
        self.0
            .get("recommendations")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

impl From<Value> for PredictionRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Response of `POST /api/gemini-predictions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default)]
    pub predictions: Vec<PredictionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    /// Uniform failure shape returned instead of an error
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "An error occurred while generating predictions".to_string()
        } else {
            message
        };

        Self {
            success: false,
            predictions: Vec::new(),
            raw_response: None,
            error: Some(message),
        }
    }
}
