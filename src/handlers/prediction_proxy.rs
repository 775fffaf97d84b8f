use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use reqwest::Client;

use crate::config::PREDICTIONS_ENDPOINT;
use crate::domain::models::PredictionResponse;
use crate::shared::logging::log_proxy_error;

/// Proxy configuration
#[derive(Clone)]
pub struct PredictionProxy {
    pub upstream_url: String,
    pub client: Client,
}

impl PredictionProxy {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn target_url(&self) -> String {
        format!("{}{}", self.upstream_url, PREDICTIONS_ENDPOINT)
    }
}

/// POST /api/gemini-predictions
/// Forward prediction requests to the upstream prediction service
pub async fn prediction_proxy_handler(
    Extension(proxy): Extension<PredictionProxy>,
    body: String,
) -> Response {
    let url = proxy.target_url();

    let upstream = match proxy
        .client
        .post(&url)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            log_proxy_error(&proxy.upstream_url, &e.to_string());
            return bad_gateway(format!("Prediction service unreachable: {}", e));
        }
    };

    // Relay upstream status; reqwest and axum share the same http types
    let status = upstream.status();
    match upstream.text().await {
        Ok(text) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            text,
        )
            .into_response(),
        Err(e) => {
            log_proxy_error(&proxy.upstream_url, &e.to_string());
            bad_gateway(format!("Failed to read prediction service response: {}", e))
        }
    }
}

fn bad_gateway(message: String) -> Response {
    (StatusCode::BAD_GATEWAY, Json(PredictionResponse::failure(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{routing::post, Router};
    use serde_json::{json, Value};

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn proxy_router(upstream: &str) -> Router {
        Router::new()
            .route(PREDICTIONS_ENDPOINT, post(prediction_proxy_handler))
            .layer(Extension(PredictionProxy::new(upstream)))
    }

    #[test]
    fn test_target_url_strips_trailing_slash() {
        let proxy = PredictionProxy::new("http://upstream:9000/");
        assert_eq!(proxy.target_url(), "http://upstream:9000/api/gemini-predictions");
    }

    #[tokio::test]
    async fn test_forwards_body_and_relays_status() {
        let upstream = Router::new().route(
            PREDICTIONS_ENDPOINT,
            post(|Json(req): Json<Value>| async move {
                let status = if req["location"] == "Nakuru" {
                    StatusCode::OK
                } else {
                    StatusCode::UNPROCESSABLE_ENTITY
                };
                (status, Json(json!({ "success": true, "predictions": [req["predictionType"]] })))
            }),
        );
        let upstream_url = spawn_server(upstream).await;
        let proxy_url = spawn_server(proxy_router(&upstream_url)).await;

        let client = Client::new();
        let ok = client
            .post(format!("{proxy_url}{PREDICTIONS_ENDPOINT}"))
            .json(&json!({ "location": "Nakuru", "predictionType": "yield" }))
            .send()
            .await
            .unwrap();
        assert_eq!(ok.status(), StatusCode::OK);
        let body: Value = ok.json().await.unwrap();
        assert_eq!(body["predictions"][0], "yield");

        let rejected = client
            .post(format!("{proxy_url}{PREDICTIONS_ENDPOINT}"))
            .json(&json!({ "location": "", "predictionType": "yield" }))
            .send()
            .await
            .unwrap();
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let proxy_url = spawn_server(proxy_router(&dead)).await;
        let response = Client::new()
            .post(format!("{proxy_url}{PREDICTIONS_ENDPOINT}"))
            .json(&json!({ "location": "Nakuru", "predictionType": "yield" }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: PredictionResponse = response.json().await.unwrap();
        assert!(!body.success);
        assert!(body.predictions.is_empty());
        assert!(body.error.unwrap().contains("unreachable"));
    }
}
