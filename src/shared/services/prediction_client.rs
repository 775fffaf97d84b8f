//! Client for the AI prediction endpoint
//!
//! One POST per call, no retry and no timeout. Every failure is folded into
//! a `success: false` response so callers never handle an error channel.

use tracing::Instrument;

use crate::config::PREDICTIONS_ENDPOINT;
use crate::domain::models::{PredictionRequest, PredictionResponse};
use crate::shared::errors::PredictionError;
use crate::shared::logging::{log_prediction_error, log_prediction_result, log_prediction_start};

/// Status line and body of an HTTP reply
#[derive(Debug, Clone)]
pub struct RawReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Turn an HTTP reply into a response; the body is trusted, not validated
pub fn decode_reply(reply: RawReply) -> Result<PredictionResponse, PredictionError> {
    if !reply.is_success() {
        return Err(PredictionError::Status {
            status: reply.status,
            status_text: reply.status_text,
        });
    }

    serde_json::from_str(&reply.body).map_err(|e| PredictionError::Decode(e.to_string()))
}

#[derive(Debug, Clone)]
pub struct PredictionClient {
    url: String,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl PredictionClient {
    /// Relative to the page origin
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        Self::with_url(PREDICTIONS_ENDPOINT)
    }

    /// Joined onto the configured base URL
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self::with_base_url(&crate::config::config().api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_url(format!("{}{}", base_url.trim_end_matches('/'), PREDICTIONS_ENDPOINT))
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request predictions; failures come back as `success: false` with a message
    pub async fn generate_predictions(&self, request: &PredictionRequest) -> PredictionResponse {
        match self.try_generate_predictions(request).await {
            Ok(response) => response,
            Err(e) => {
                log_prediction_error(&request.prediction_type, e.kind(), &e.to_string());
                PredictionResponse::failure(e.to_string())
            }
        }
    }

    /// Request predictions, keeping the failure kind
    pub async fn try_generate_predictions(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictionError> {
        let span = crate::log_context!(request.prediction_type.as_str(), request.location.as_str());

        async move {
            log_prediction_start(&request.prediction_type, &request.location);

            let body = serde_json::to_string(request)
                .map_err(|e| PredictionError::Encode(e.to_string()))?;
            let reply = self.post_json(body).await?;
            let response = decode_reply(reply)?;

            log_prediction_result(
                &request.prediction_type,
                response.success,
                response.predictions.len(),
            );
            Ok(response)
        }
        .instrument(span)
        .await
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_json(&self, body: String) -> Result<RawReply, PredictionError> {
        use reqwasm::http::Request;

        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        Ok(RawReply { status, status_text, body })
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn post_json(&self, body: String) -> Result<RawReply, PredictionError> {
        let response = self
            .http
            .post(&self.url)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PredictionError::Transport(e.to_string()))?;

        Ok(RawReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Request predictions with the default client
pub async fn generate_predictions(request: &PredictionRequest) -> PredictionResponse {
    PredictionClient::new().generate_predictions(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: u16, body: &str) -> RawReply {
        RawReply {
            status,
            status_text: "Status".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_decode_success_body_verbatim() {
        let body = json!({
            "success": true,
            "predictions": [{ "title": "Yield", "confidence": 0.7 }, "free text"],
            "rawResponse": "**Yield** looks good",
        });

        let response = decode_reply(reply(200, &body.to_string())).unwrap();

        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }

    #[test]
    fn test_decode_passes_application_failure_through() {
        let body = json!({ "success": false, "predictions": [], "error": "quota exceeded" });
        let response = decode_reply(reply(200, &body.to_string())).unwrap();

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("quota exceeded"));
    }

    #[test]
    fn test_decode_rejects_non_2xx() {
        let err = decode_reply(reply(500, r#"{"success":true,"predictions":[]}"#)).unwrap_err();
        assert!(matches!(err, PredictionError::Status { status: 500, .. }));
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode_reply(reply(200, "<html>oops</html>")).unwrap_err();
        assert!(matches!(err, PredictionError::Decode(_)));
    }

    #[test]
    fn test_client_urls() {
        let client = PredictionClient::with_base_url("http://localhost:9000/");
        assert_eq!(client.url(), "http://localhost:9000/api/gemini-predictions");
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod http {
        use super::*;
        use axum::{http::StatusCode, routing::post, Json, Router};
        use serde_json::Value;

        async fn spawn_server(router: Router) -> String {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            tokio::spawn(async move {
                axum::serve(listener, router).await.unwrap();
            });
            format!("http://{addr}")
        }

        fn request() -> PredictionRequest {
            PredictionRequest::new("Nakuru", "yield")
                .with_farm_type("smallholder")
                .with_crop_type("maize")
        }

        #[tokio::test]
        async fn test_success_response_returned_unchanged() {
            let expected = PredictionResponse {
                success: true,
                predictions: vec![json!({ "title": "Maize", "confidence": 0.9 }).into()],
                raw_response: Some("raw".to_string()),
                error: None,
            };
            let body = serde_json::to_value(&expected).unwrap();
            let router = Router::new().route(
                PREDICTIONS_ENDPOINT,
                post(move |Json(req): Json<Value>| {
                    let body = body.clone();
                    async move {
                        assert_eq!(req["predictionType"], "yield");
                        assert_eq!(req["cropType"], "maize");
                        Json(body)
                    }
                }),
            );
            let base = spawn_server(router).await;

            let response = PredictionClient::with_base_url(&base)
                .generate_predictions(&request())
                .await;

            assert_eq!(response, expected);
        }

        #[tokio::test]
        async fn test_non_2xx_collapses_to_failure() {
            let router = Router::new().route(
                PREDICTIONS_ENDPOINT,
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            );
            let base = spawn_server(router).await;

            let response = PredictionClient::with_base_url(&base)
                .generate_predictions(&request())
                .await;

            assert!(!response.success);
            assert!(response.predictions.is_empty());
            assert!(response.error.as_deref().is_some_and(|e| e.contains("500")));
        }

        #[tokio::test]
        async fn test_connection_failure_collapses_to_failure() {
            // Bind then drop to get a port nothing listens on
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            drop(listener);

            let client = PredictionClient::with_base_url(&format!("http://{addr}"));
            let err = client.try_generate_predictions(&request()).await.unwrap_err();
            assert!(matches!(err, PredictionError::Transport(_)));

            let response = client.generate_predictions(&request()).await;
            assert!(!response.success);
            assert!(response.predictions.is_empty());
            assert!(!response.error.unwrap_or_default().is_empty());
        }

        #[tokio::test]
        async fn test_unparsable_body_collapses_to_failure() {
            let router = Router::new().route(PREDICTIONS_ENDPOINT, post(|| async { "not json" }));
            let base = spawn_server(router).await;

            let response = PredictionClient::with_base_url(&base)
                .generate_predictions(&request())
                .await;

            assert!(!response.success);
            assert!(response.error.is_some());
        }
    }
}
