pub mod button;
pub mod card;
pub mod common;
pub mod markdown;
pub mod prediction_card;
pub mod toast_viewport;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use common::{EmptyState, ErrorMessage, LoadingText, PageHeader};
pub use markdown::render_markdown;
pub use prediction_card::PredictionCard;
pub use toast_viewport::ToastViewport;
