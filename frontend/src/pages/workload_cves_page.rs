//! Workload CVE overview: view and vulnerability state tabs, the with/without
//! CVEs toggle, filter toolbar, the Central query the filter scopes to, and
//! entity counts.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdContentCopy;

use common::feature_flags::FeatureFlags;
use common::search_category::VulnerabilityState;
use common::search_filter::{OnSearchPayloadItem, SearchFilter, update_search_filter};
use common::search_filter_config::workload_cve_search_filter_config;
use common::search_query::RegexSearchTerms;
use common::workload_cve_view::{
    ObservedCveMode, WorkloadCveView, default_search_filter, search_filter_for_mode, search_filter_for_state,
    should_apply_default_filters, workload_cves_scoped_query_string,
};

use crate::api::central_api::{fetch_entity_type_counts, list_feature_flags};
use crate::components::compound_search_filter::CompoundSearchFilter;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::search_filter_chips::SearchFilterChips;
use crate::components::suspend_boundary::SuspendWrapper;
use crate::data_definitions::filter_tracker::{WORKLOAD_CVE_FILTER_APPLIED, track_applied_filters};
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;


#[component]
pub fn WorkloadCvesPage(
    view: WorkloadCveView,
    vulnerability_state: VulnerabilityState,
    observed_cve_mode: ObservedCveMode,
    search_filter: UrlParam<SearchFilter>,
) -> Element {
    rsx! {
        Title { "Workload CVEs - {view.title()} - {vulnerability_state.title()}" }
        WorkloadCvesRoot { view, vulnerability_state, observed_cve_mode, search_filter: search_filter.0.clone() }
    }
}

#[component]
fn WorkloadCvesRoot(
    view: ReadSignal<WorkloadCveView>,
    vulnerability_state: ReadSignal<VulnerabilityState>,
    observed_cve_mode: ReadSignal<ObservedCveMode>,
    search_filter: ReadSignal<SearchFilter>,
) -> Element {
    let feature_flags = use_resource(list_feature_flags);
    let config = use_memo(move || {
        let flags = match &*feature_flags.read() {
            Some(Ok(flags)) => flags.clone(),
            Some(Err(err)) => {
                tracing::warn!("Feature flags unavailable, gated attributes hidden: {}", err);
                FeatureFlags::default()
            }
            None => FeatureFlags::default(),
        };
        workload_cve_search_filter_config().with_feature_flags(|flag| flags.is_enabled(flag))
    });

    // Runs once on mount. Later clears keep the filter empty.
    use_effect(move || {
        let mode = *observed_cve_mode.peek();
        if should_apply_default_filters(&search_filter.peek(), mode) {
            tracing::info!("Empty workload CVE filter, applying default filters");
            navigator().replace(Route::workload_cves_page(
                *view.peek(),
                *vulnerability_state.peek(),
                mode,
                default_search_filter(),
            ));
        }
    });

    let regex_terms = use_hook(|| RegexSearchTerms::from_config(&workload_cve_search_filter_config()));
    let scoped_query = use_memo(move || {
        workload_cves_scoped_query_string(
            view(),
            vulnerability_state(),
            observed_cve_mode(),
            &search_filter.read(),
            &regex_terms,
        )
    });
    let is_filtered = use_memo(move || search_filter.read().has_search_applied());

    let on_search = Callback::new(move |payload: Vec<OnSearchPayloadItem>| {
        let current = search_filter.peek().clone();
        let updated = update_search_filter(&current, &payload);
        track_applied_filters(WORKLOAD_CVE_FILTER_APPLIED, &payload);
        if updated != current {
            navigator().push(Route::workload_cves_page(
                *view.peek(),
                *vulnerability_state.peek(),
                *observed_cve_mode.peek(),
                updated,
            ));
        }
    });

    rsx! {
        div {
            id: "x-workload-cves-page",
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                padding: 24px 32px;
                box-sizing: border-box;
            ",
            h1 { style: "font-size: 28px; font-weight: 500; margin: 0;", "Workload CVEs" }
            WorkloadCveViewTabs { view, vulnerability_state, observed_cve_mode, search_filter }
            VulnerabilityStateTabs { view, vulnerability_state }
            if vulnerability_state() == VulnerabilityState::Observed {
                ObservedCveModeToggle { view, observed_cve_mode }
            }
            div {
                class: "x-toolbar",
                CompoundSearchFilter { config: config(), search_filter, on_search }
            }
            SearchFilterChips { config: config(), search_filter, on_search }
            ScopedQueryPreview { scoped_query: scoped_query(), is_filtered: is_filtered() }
            SuspendWrapper {
                EntityCounts { scoped_query: scoped_query(), observed_cve_mode }
            }
        }
    }
}

#[component]
fn WorkloadCveViewTabs(
    view: ReadSignal<WorkloadCveView>,
    vulnerability_state: ReadSignal<VulnerabilityState>,
    observed_cve_mode: ReadSignal<ObservedCveMode>,
    search_filter: ReadSignal<SearchFilter>,
) -> Element {
    rsx! {
        div {
            class: "x-tabs",
            role: "tablist",
            for option in WorkloadCveView::ALL {
                button {
                    key: "{option}",
                    class: if option == view() { "x-tab x-tab-selected" } else { "x-tab" },
                    role: "tab",
                    onclick: move |_| {
                        if option != *view.peek() {
                            navigator().push(Route::workload_cves_page(
                                option,
                                *vulnerability_state.peek(),
                                *observed_cve_mode.peek(),
                                search_filter.peek().clone(),
                            ));
                        }
                    },
                    "{option.title()}"
                }
            }
        }
    }
}

#[component]
fn VulnerabilityStateTabs(view: ReadSignal<WorkloadCveView>, vulnerability_state: ReadSignal<VulnerabilityState>) -> Element {
    rsx! {
        div {
            class: "x-tabs",
            role: "tablist",
            for state in VulnerabilityState::ALL {
                button {
                    key: "{state}",
                    class: if state == vulnerability_state() { "x-tab x-tab-selected" } else { "x-tab" },
                    role: "tab",
                    onclick: move |_| {
                        if state != *vulnerability_state.peek() {
                            navigator().push(Route::workload_cves_page(
                                *view.peek(),
                                state,
                                ObservedCveMode::WithCves,
                                search_filter_for_state(state),
                            ));
                        }
                    },
                    "{state.title()}"
                }
            }
        }
    }
}

#[component]
fn ObservedCveModeToggle(view: ReadSignal<WorkloadCveView>, observed_cve_mode: ReadSignal<ObservedCveMode>) -> Element {
    rsx! {
        div {
            class: "x-toggle-group",
            role: "radiogroup",
            for mode in ObservedCveMode::ALL {
                button {
                    key: "{mode}",
                    class: if mode == observed_cve_mode() { "x-toggle x-toggle-selected" } else { "x-toggle" },
                    role: "radio",
                    aria_checked: mode == observed_cve_mode(),
                    onclick: move |_| {
                        if mode != *observed_cve_mode.peek() {
                            navigator().push(Route::workload_cves_page(
                                *view.peek(),
                                VulnerabilityState::Observed,
                                mode,
                                search_filter_for_mode(mode),
                            ));
                        }
                    },
                    "{mode.title()}"
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CopyStatus {
    Copied,
    Failed,
}

impl CopyStatus {
    fn from_result<T, E>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => Self::Copied,
            Err(_) => Self::Failed,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Copied => "Copied",
            Self::Failed => "Copy failed",
        }
    }
}

#[component]
fn ScopedQueryPreview(scoped_query: ReadSignal<String>, is_filtered: ReadSignal<bool>) -> Element {
    let mut copy_status = use_signal(|| None::<CopyStatus>);
    use_effect(move || {
        let _ = scoped_query.read();
        copy_status.set(None);
    });

    let copy_query = move |_: Event<MouseData>| {
        let query = scoped_query.peek().clone();
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window, query not copied");
            copy_status.set(Some(CopyStatus::Failed));
            return;
        };
        let promise = window.navigator().clipboard().write_text(&query);
        spawn(async move {
            let result = wasm_bindgen_futures::JsFuture::from(promise).await;
            match &result {
                Ok(_) => tracing::info!("Query copied to clipboard: {}", query),
                Err(err) => tracing::warn!("Clipboard write rejected: {:?}", err),
            }
            copy_status.set(Some(CopyStatus::from_result(&result)));
        });
    };

    rsx! {
        div {
            class: "x-query-preview",
            div {
                style: "display:flex; align-items:center; gap: 8px;",
                span { style: "font-weight: 500;", "Query" }
                button {
                    class: "x-icon-button",
                    aria_label: "Copy query",
                    onclick: copy_query,
                    Icon { icon: MdContentCopy, style: "width: 16px; height: 16px;" }
                }
                if let Some(status) = copy_status() {
                    span { class: "x-copy-status", "{status.label()}" }
                }
                span {
                    style: "margin-left: auto; color: #6B7280;",
                    if is_filtered() { "Filtered results" } else { "No filters applied" }
                }
            }
            pre { "{scoped_query}" }
        }
    }
}

#[component]
fn EntityCounts(scoped_query: ReadSignal<String>, observed_cve_mode: ReadSignal<ObservedCveMode>) -> Element {
    let counts = use_resource(move || fetch_entity_type_counts(scoped_query())).suspend()?.cloned();
    let counts = match counts {
        Err(e) => return rsx! {
            ComponentErrorDisplay { title: "Entity counts unavailable".to_string(), error_txt: e.to_string() }
        },
        Ok(counts) => counts,
    };
    rsx! {
        div {
            id: "x-entity-counts",
            style: "display:flex; flex-direction: row; gap: 12px;",
            if observed_cve_mode() == ObservedCveMode::WithCves {
                CountBadge { label: "CVEs", count: counts.image_cve_count }
            }
            CountBadge { label: "Images", count: counts.image_count }
            CountBadge { label: "Deployments", count: counts.deployment_count }
        }
    }
}

#[component]
fn CountBadge(label: String, count: u64) -> Element {
    rsx! {
        div {
            class: "x-count-badge",
            span { style: "font-size: 22px; font-weight: 500;", "{count}" }
            span { style: "color: #6B7280;", "{label}" }
        }
    }
}
