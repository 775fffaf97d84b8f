// Custom Dioxus hooks
pub mod use_predictions;
pub mod use_sidebar_panel;
pub mod use_toast;

pub use use_predictions::{use_predictions, PredictionState};
pub use use_sidebar_panel::{use_sidebar_panel, PanelEvent, UseSidebarPanel};
pub use use_toast::{
    use_toast, use_toast_provider, Toast, ToastOptions, ToastQueue, ToastSeverity, ToastVariant,
    Toaster,
};
