use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::domain::models::{PredictionRequest, PredictionResponse};
use crate::shared::hooks::Toaster;
use crate::shared::services::generate_predictions;

/// Prediction page state
#[derive(Clone, Copy)]
pub struct PredictionState {
    pub is_loading: Signal<bool>,
    pub response: Signal<Option<PredictionResponse>>,
    pub last_run_at: Signal<Option<DateTime<Utc>>>,
}

impl PredictionState {
    /// Start a new request
    pub fn start_request(&mut self) {
        self.is_loading.set(true);
    }

    /// Store the outcome of a request
    pub fn finish_request(&mut self, response: PredictionResponse) {
        self.response.set(Some(response));
        self.last_run_at.set(Some(Utc::now()));
        self.is_loading.set(false);
    }

    /// Send the request and report the outcome as a toast.
    /// Ignored while a request is already in flight.
    pub fn submit(&self, request: PredictionRequest, mut toaster: Toaster) {
        if *self.is_loading.read() {
            return;
        }

        let mut state = *self;
        state.start_request();

        spawn(async move {
            let response = generate_predictions(&request).await;
            toaster.toast(outcome_toast(&response));
            state.finish_request(response);
        });
    }
}

/// Toast describing a finished request
pub fn outcome_toast(response: &PredictionResponse) -> crate::shared::hooks::ToastOptions {
    use crate::shared::hooks::{ToastOptions, ToastSeverity};

    if response.success {
        let message = match response.predictions.len() {
            0 => "Predictions generated".to_string(),
            1 => "Generated 1 prediction".to_string(),
            n => format!("Generated {} predictions", n),
        };
        ToastOptions::for_severity(ToastSeverity::Success, message)
    } else {
        let message = response
            .error
            .clone()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "Failed to generate predictions".to_string());
        ToastOptions::for_severity(ToastSeverity::Error, message)
    }
}

/// Hook to manage prediction requests
pub fn use_predictions() -> PredictionState {
    let is_loading = use_signal(|| false);
    let response = use_signal(|| None::<PredictionResponse>);
    let last_run_at = use_signal(|| None::<DateTime<Utc>>);

    PredictionState {
        is_loading,
        response,
        last_run_at,
    }
}
