use dioxus::prelude::*;

use crate::app::components::ToastViewport;
use crate::app::layouts::Sidebar;
use crate::app::pages::{
    CropDetail, CropPlanning, Dashboard, Farms, Finances, Inventory, Livestock, NotFound,
    Predictions, Settings, Tasks, Weather,
};
use crate::shared::hooks::use_toast_provider;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/farms")]
        Farms {},
        #[route("/crops")]
        CropPlanning {},
        #[route("/crops/:crop")]
        CropDetail { crop: String },
        #[route("/livestock")]
        Livestock {},
        #[route("/inventory")]
        Inventory {},
        #[route("/finances")]
        Finances {},
        #[route("/weather")]
        Weather {},
        #[route("/tasks")]
        Tasks {},
        #[route("/predictions")]
        Predictions {},
        #[route("/settings")]
        Settings {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Farm Hub app initialized");
    });

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn AppLayout() -> Element {
    // Bundled by build.rs from assets/css/
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    use_toast_provider();

    rsx! {
        document::Title { "Farm Hub" }
        document::Link {
            rel: "stylesheet",
            href: BUNDLE_CSS
        },
        div { class: "c-layout",
            Sidebar {}

            main { class: "c-layout__main",
                Outlet::<Route> {}
            }

            ToastViewport {}
        }
    }
}
