//! Structured logging module for Farm Hub
//!
//! Provides consistent, contextual logging across the application.
//! Log calls work on every target; only the subscriber setup is server-only.

/// Operation tag attached to every structured log line
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    PredictionRequest,
    Navigation,
    Toast,
    Proxy,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::PredictionRequest => "prediction_request",
            LogOperation::Navigation => "navigation",
            LogOperation::Toast => "toast",
            LogOperation::Proxy => "proxy",
        }
    }
}

/// Install the fmt subscriber, honouring `RUST_LOG` and defaulting to info
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Log prediction request start
pub fn log_prediction_start(prediction_type: &str, location: &str) {
    tracing::info!(
        operation = LogOperation::PredictionRequest.as_str(),
        prediction_type = prediction_type,
        location = location,
        "Requesting predictions"
    );
}

/// Log prediction request result
pub fn log_prediction_result(prediction_type: &str, success: bool, count: usize) {
    tracing::info!(
        operation = LogOperation::PredictionRequest.as_str(),
        prediction_type = prediction_type,
        success = success,
        prediction_count = count,
        "Predictions received"
    );
}

/// Log prediction failure (the single diagnostic for a failed call)
pub fn log_prediction_error(prediction_type: &str, kind: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::PredictionRequest.as_str(),
        prediction_type = prediction_type,
        error_kind = kind,
        error = error,
        "Error generating predictions"
    );
}

/// Log mobile navigation panel transitions
pub fn log_panel_transition(route: &str, open: bool) {
    tracing::debug!(
        operation = LogOperation::Navigation.as_str(),
        route = route,
        panel_open = open,
        "Sidebar panel toggled"
    );
}

/// Log toast creation
pub fn log_toast(title: &str, variant: &str) {
    tracing::debug!(
        operation = LogOperation::Toast.as_str(),
        title = title,
        variant = variant,
        "Toast shown"
    );
}

/// Log proxy forwarding failures
pub fn log_proxy_error(upstream: &str, error: &str) {
    tracing::error!(
        operation = LogOperation::Proxy.as_str(),
        upstream = upstream,
        error = error,
        "Failed to forward prediction request"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! log_context {
    ($prediction_type:expr) => {
        tracing::info_span!("farm_hub", prediction_type = $prediction_type)
    };
    ($prediction_type:expr, $location:expr) => {
        tracing::info_span!(
            "farm_hub",
            prediction_type = $prediction_type,
            location = $location
        )
    };
}
