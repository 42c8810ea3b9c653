use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdBugReport;
use dioxus_free_icons::icons::md_file_icons::MdFileDownload;
use dioxus_free_icons::{Icon, IconShape};

use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Vulnerability Management - Home" }
        div {
            id: "x-home-container",
            style: "
                display:flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                box-sizing: border-box;
            ",

            div {
                style: "color: #0F172A; font-size: 36px; font-weight: 500;",
                "Vulnerability Management"
            }

            div {
                style: "
                    display:flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                ",
                HomeCard {
                    to: Route::workload_cves_overview(),
                    icon: MdBugReport,
                    title: "Workload CVEs",
                    description: "Filter images, deployments and their CVEs by any attribute and see what the scoped query matches.",
                }
                HomeCard {
                    to: Route::DiagnosticBundlePage { },
                    icon: MdFileDownload,
                    title: "Diagnostic bundle",
                    description: "Download the Central diagnostic archive for a set of clusters.",
                }
            }
        }
    }
}

#[component]
fn HomeCard<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, title: String, description: String) -> Element {
    rsx! {
        Link {
            to: to,
            class: "x-card",
            div {
                style: "display:flex; align-items:center; gap: 10px; font-size: 22px; font-weight: 500;",
                Icon { icon: icon, style: "width: 24px; height: 24px;" }
                "{title}"
            }
            div { style: "font-size: 16px; line-height: 1.5; color: #374151;", "{description}" }
        }
    }
}
