/// Forwarding of prediction requests to the upstream prediction service
pub mod prediction_proxy;

pub use prediction_proxy::{prediction_proxy_handler, PredictionProxy};
