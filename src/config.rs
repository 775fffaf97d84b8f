//! Application configuration
//!
//! Read once from the environment on native targets. The browser build uses
//! the compiled defaults: its prediction calls are relative to the page origin.

use once_cell::sync::Lazy;

use crate::shared::errors::{AppError, Result};

/// Path of the prediction endpoint, relative to the API base URL
pub const PREDICTIONS_ENDPOINT: &str = "/api/gemini-predictions";

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_PORT: u16 = 3001;

pub const ENV_API_BASE_URL: &str = "FARM_HUB_API_BASE_URL";
pub const ENV_PREDICTIONS_UPSTREAM: &str = "PREDICTIONS_UPSTREAM_URL";
pub const ENV_PORT: &str = "PORT";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL for prediction calls made outside the browser
    pub api_base_url: String,
    /// Service the prediction proxy forwards to; proxy disabled when unset
    pub predictions_upstream: Option<String>,
    /// Port of the standalone API server
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            predictions_upstream: None,
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; blank values count as unset.
    /// Fails on the first invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let (config, mut errors) = Self::from_lookup_lenient(lookup);
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors.remove(0))
        }
    }

    /// Load keeping every valid value. Invalid ones fall back to their
    /// default and are returned alongside.
    pub fn from_lookup_lenient(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<AppError>) {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut errors = Vec::new();
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_BASE_URL) {
            match validate_url(ENV_API_BASE_URL, &url) {
                Ok(url) => config.api_base_url = url,
                Err(e) => errors.push(e),
            }
        }

        if let Some(url) = get(ENV_PREDICTIONS_UPSTREAM) {
            match validate_url(ENV_PREDICTIONS_UPSTREAM, &url) {
                Ok(url) => config.predictions_upstream = Some(url),
                Err(e) => errors.push(e),
            }
        }

        if let Some(raw) = get(ENV_PORT) {
            match raw.parse::<u16>() {
                Ok(port) => config.port = port,
                Err(e) => errors.push(AppError::ConfigError(format!("{ENV_PORT}={raw}: {e}"))),
            }
        }

        (config, errors)
    }

    /// Absolute URL of the prediction endpoint for native callers
    pub fn predictions_url(&self) -> String {
        format!("{}{}", self.api_base_url, PREDICTIONS_ENDPOINT)
    }
}

/// Accept http(s) URLs only, without a trailing slash
pub fn validate_url(key: &str, url: &str) -> Result<String> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::ConfigError(format!(
            "{key} must be an http(s) URL, got '{url}'"
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> AppConfig {
    let (config, errors) = AppConfig::from_lookup_lenient(|key| std::env::var(key).ok());
    for e in errors {
        tracing::error!("{}; using the default for this setting", e);
    }
    config
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> AppConfig {
    AppConfig::default()
}

static CONFIG: Lazy<AppConfig> = Lazy::new(load_config);

/// Process-wide configuration
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.predictions_url(), "http://127.0.0.1:8080/api/gemini-predictions");
    }

    #[test]
    fn test_reads_all_values() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_BASE_URL, "https://farm.example.com/"),
            (ENV_PREDICTIONS_UPSTREAM, "http://10.0.0.5:9000"),
            (ENV_PORT, "4100"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://farm.example.com");
        assert_eq!(config.predictions_upstream.as_deref(), Some("http://10.0.0.5:9000"));
        assert_eq!(config.port, 4100);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_PREDICTIONS_UPSTREAM, "  ")])).unwrap();
        assert_eq!(config.predictions_upstream, None);
    }

    #[test]
    fn test_lenient_keeps_valid_values() {
        let (config, errors) = AppConfig::from_lookup_lenient(lookup(&[
            (ENV_API_BASE_URL, "https://farm.example.com"),
            (ENV_PREDICTIONS_UPSTREAM, "localhost:9000"),
            (ENV_PORT, "eighty"),
        ]));

        assert_eq!(config.api_base_url, "https://farm.example.com");
        assert_eq!(config.predictions_upstream, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].to_string().contains(ENV_PREDICTIONS_UPSTREAM));
        assert!(errors[1].to_string().contains(ENV_PORT));
    }

    #[test]
    fn test_invalid_upstream_is_an_error() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_PREDICTIONS_UPSTREAM, "localhost:9000")]))
            .unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains(ENV_PREDICTIONS_UPSTREAM));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(AppConfig::from_lookup(lookup(&[(ENV_API_BASE_URL, "localhost:8080")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(ENV_PORT, "eighty")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[(ENV_PORT, "70000")])).is_err());
    }
}
