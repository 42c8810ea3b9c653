//! Analytics for filters applied through the compound search filter.

use common::search_filter::{OnSearchPayloadItem, tracked_filters};
use dioxus::logger::tracing;

pub const WORKLOAD_CVE_FILTER_APPLIED: &str = "Workload CVE Filter Applied";

/// Emits one analytics event per applied filter in `payload`. Removals and
/// deletions are not tracked. Returns the number of events emitted.
pub fn track_applied_filters(event: &str, payload: &[OnSearchPayloadItem]) -> usize {
    let mut emitted = 0;
    for tracked in tracked_filters(payload) {
        tracing::info!(analytics_event = event, category = tracked.category, filter = tracked.filter, "filter applied");
        emitted += 1;
    }
    emitted
}
