pub mod predictions;
pub mod sections;

pub use predictions::Predictions;
pub use sections::{
    CropDetail, CropPlanning, Dashboard, Farms, Finances, Inventory, Livestock, NotFound,
    Settings, Tasks, Weather,
};
