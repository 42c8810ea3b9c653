//! Side navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::{MdBugReport, MdHome};
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 24px;
                    width: 200px;
                    height: 100%;
                    background-color: #1C212D;
                    border-right: 1px solid #000000;
                    padding: 16px;
                    box-sizing: border-box;
                ",

                IconLink { to: Route::HomePage { }, icon: MdHome, label: "Home" }
                IconLink {
                    to: Route::workload_cves_overview(),
                    icon: MdBugReport,
                    label: "Workload CVEs",
                }
                IconLink { to: Route::DiagnosticBundlePage { }, icon: MdFileDownload, label: "Diagnostic bundle" }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static> (to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            class: "x-nav-link",
            Icon { icon: icon, style: "width: 22px; height: 22px;" }
            span { "{label}" }
        }
    }
}
