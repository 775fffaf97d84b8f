// Domain models (business entities)
// Pure Rust, no framework dependencies

pub mod navigation;
pub mod prediction;

pub use navigation::{NavItem, NAVIGATION};
pub use prediction::{PredictionCategory, PredictionRecord, PredictionRequest, PredictionResponse};
