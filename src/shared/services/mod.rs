// Shared services
// Prediction client works on both targets: reqwasm in the browser, reqwest natively
pub mod prediction_client;

pub use prediction_client::{generate_predictions, PredictionClient};
