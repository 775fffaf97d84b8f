//! Standalone API server (without Dioxus frontend)
//! Serves only the prediction proxy. Use this for API-only testing or when
//! the front-end is hosted as static files elsewhere.
//!
//! Run with: cargo run --bin server --features server -- --upstream http://localhost:9000

use anyhow::Context;
use axum::{routing::post, Extension, Router};
use clap::Parser;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use farm_hub::config::{
    validate_url, AppConfig, ENV_PORT, ENV_PREDICTIONS_UPSTREAM, PREDICTIONS_ENDPOINT,
};
use farm_hub::handlers::{prediction_proxy_handler, PredictionProxy};

#[derive(Parser)]
#[command(name = "farm-hub-server")]
#[command(about = "Farm Hub prediction proxy (API only)")]
struct Args {
    /// Port to listen on
    #[arg(long, env = ENV_PORT)]
    port: Option<u16>,

    /// Prediction service to forward to
    #[arg(long, env = ENV_PREDICTIONS_UPSTREAM)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    farm_hub::shared::logging::init_tracing();

    let args = Args::parse();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let port = args.port.unwrap_or(config.port);
    let upstream = match args.upstream {
        Some(url) => validate_url("--upstream", url.trim())?,
        None => config
            .predictions_upstream
            .context("No prediction upstream configured (use --upstream or PREDICTIONS_UPSTREAM_URL)")?,
    };

    tracing::info!("Starting Farm Hub API server, forwarding to {}", upstream);

    let app = Router::new()
        .route(PREDICTIONS_ENDPOINT, post(prediction_proxy_handler))
        .layer(Extension(PredictionProxy::new(upstream)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
