use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Same-origin route proxying the diagnostic bundle download from Central.
pub const DIAGNOSTIC_BUNDLE_DOWNLOAD_ROUTE: &str = "/_download_diagnostic_bundle";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
