use common::search_category::VulnerabilityState;
use common::search_filter::SearchFilter;
use common::workload_cve_view::{ObservedCveMode, WorkloadCveView, initial_search_filter};
use dioxus::prelude::*;

use crate::components::navbar::Navbar;

use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::workload_cves_page::WorkloadCvesPage;
use crate::pages::diagnostic_bundle_page::DiagnosticBundlePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/vulnerabilities/workload-cves/:view/:vulnerability_state/:observed_cve_mode/:search_filter")]
    WorkloadCvesPage {
        view: WorkloadCveView,
        vulnerability_state: VulnerabilityState,
        observed_cve_mode: ObservedCveMode,
        search_filter: UrlParam<SearchFilter>,
    },


    #[route("/diagnostic-bundle")]
    DiagnosticBundlePage {  },

}

impl Route {
    pub fn workload_cves_page(
        view: WorkloadCveView,
        vulnerability_state: VulnerabilityState,
        observed_cve_mode: ObservedCveMode,
        search_filter: SearchFilter,
    ) -> Self {
        Self::WorkloadCvesPage {
            view,
            vulnerability_state,
            observed_cve_mode,
            search_filter: UrlParam::from(search_filter),
        }
    }

    /// Overview entry point: user workloads with CVEs, default filters applied.
    pub fn workload_cves_overview() -> Self {
        let mode = ObservedCveMode::default();
        Self::workload_cves_page(
            WorkloadCveView::default(),
            VulnerabilityState::default(),
            mode,
            initial_search_filter(&SearchFilter::new(), mode),
        )
    }
}
