//! Farm Hub - Main Entry Point
//!
//! Serves the Dioxus application, plus the prediction proxy when an
//! upstream prediction service is configured.
//! Uses dioxus::serve() pattern for dx serve compatibility.

use farm_hub::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::{routing::post, Extension};
    use farm_hub::config::{config, AppConfig, PREDICTIONS_ENDPOINT};
    use farm_hub::handlers::{prediction_proxy_handler, PredictionProxy};

    // Initialize tracing BEFORE dioxus::serve
    farm_hub::shared::logging::init_tracing();

    // Refuse to start on invalid settings instead of running with defaults
    if let Err(e) = AppConfig::from_env() {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    tracing::info!("Starting Farm Hub...");

    dioxus::serve(|| async move {
        let mut router = dioxus::server::router(App);

        match &config().predictions_upstream {
            Some(upstream) => {
                tracing::info!("Forwarding {} to {}", PREDICTIONS_ENDPOINT, upstream);
                router = router
                    .route(PREDICTIONS_ENDPOINT, post(prediction_proxy_handler))
                    .layer(Extension(PredictionProxy::new(upstream.as_str())));
            }
            None => {
                tracing::warn!(
                    "PREDICTIONS_UPSTREAM_URL not set - {} must be served by another process",
                    PREDICTIONS_ENDPOINT
                );
            }
        }

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Farm Hub - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
