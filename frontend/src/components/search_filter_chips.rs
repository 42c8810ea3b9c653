//! Chips for the filters currently applied, grouped by attribute.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use common::search_filter::{OnSearchPayloadItem, SearchFilter};
use common::search_filter_config::{FilterChipDescriptor, SearchFilterConfig};

/// Chip groups in config order. Several attributes may share a search term,
/// only the first one gets a group.
pub fn filter_chip_groups(config: &SearchFilterConfig, search_filter: &SearchFilter) -> Vec<(FilterChipDescriptor, Vec<String>)> {
    let mut groups: Vec<(FilterChipDescriptor, Vec<String>)> = Vec::new();
    for descriptor in config.make_filter_chip_descriptors() {
        if groups.iter().any(|(d, _)| d.search_filter_name == descriptor.search_filter_name) {
            continue;
        }
        let values = search_filter.values(descriptor.search_filter_name).iter().filter(|v| !v.is_empty()).cloned().collect::<Vec<_>>();
        if !values.is_empty() {
            groups.push((descriptor, values));
        }
    }
    groups
}

#[component]
pub fn SearchFilterChips(
    config: ReadSignal<SearchFilterConfig>,
    search_filter: ReadSignal<SearchFilter>,
    on_search: Callback<Vec<OnSearchPayloadItem>>,
) -> Element {
    let chip_groups = use_memo(move || filter_chip_groups(&config.read(), &search_filter.read()));
    let clear_all = move |_: Event<MouseData>| {
        let payload = search_filter.peek().categories().map(OnSearchPayloadItem::delete).collect::<Vec<_>>();
        on_search(payload);
    };

    rsx! {
        div {
            id: "x-search-filter-chips",
            style: "
                display:flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                min-height: 32px;
            ",
            for (descriptor, values) in chip_groups() {
                div {
                    key: "{descriptor.search_filter_name}",
                    class: "x-chip-group",
                    span { class: "x-chip-group-label", "{descriptor.display_name}" }
                    for value in values {
                        FilterChip {
                            key: "{value}",
                            category: descriptor.search_filter_name,
                            value: value.clone(),
                            on_search,
                        }
                    }
                }
            }
            if search_filter.read().has_search_applied() {
                button {
                    class: "x-link-button",
                    onclick: clear_all,
                    "Clear filters"
                }
            }
        }
    }
}

#[component]
fn FilterChip(category: &'static str, value: String, on_search: Callback<Vec<OnSearchPayloadItem>>) -> Element {
    let removed = value.clone();
    rsx! {
        span {
            class: "x-chip",
            "{value}"
            button {
                class: "x-chip-close",
                aria_label: "Remove {value}",
                onclick: move |_| on_search(vec![OnSearchPayloadItem::remove(category, removed.clone())]),
                Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
            }
        }
    }
}
