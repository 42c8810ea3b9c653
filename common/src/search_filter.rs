//! Runtime search filter state and the payload reducer that updates it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value of one filter category: a bare string as found in hand-written URLs,
/// or the list of values the reducer maintains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchFilterValue {
    Single(String),
    Multiple(Vec<String>),
}

impl SearchFilterValue {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multiple(values) => values,
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.as_slice().to_vec()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().iter().all(|value| value.is_empty())
    }
}

impl From<Vec<String>> for SearchFilterValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multiple(values)
    }
}

impl From<&str> for SearchFilterValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

/// Active filters keyed by search term, in the order they were first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct SearchFilter(IndexMap<String, SearchFilterValue>);

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: &str) -> Option<&SearchFilterValue> {
        self.0.get(category)
    }

    /// Values for `category`, empty when the category is absent.
    pub fn values(&self, category: &str) -> &[String] {
        self.get(category).map(SearchFilterValue::as_slice).unwrap_or_default()
    }

    pub fn insert(&mut self, category: impl Into<String>, value: impl Into<SearchFilterValue>) {
        self.0.insert(category.into(), value.into());
    }

    pub fn remove(&mut self, category: &str) -> Option<SearchFilterValue> {
        self.0.shift_remove(category)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SearchFilterValue)> + '_ {
        self.0.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when at least one category holds a non-empty value.
    pub fn has_search_applied(&self) -> bool {
        self.0.values().any(|value| !value.is_empty())
    }

    fn apply(&mut self, item: &OnSearchPayloadItem) {
        match item {
            OnSearchPayloadItem::AppendString { category, value } | OnSearchPayloadItem::AppendToggle { category, value } => {
                let mut values = self.values(category).to_vec();
                values.push(value.clone());
                self.insert(category.clone(), values);
            }
            OnSearchPayloadItem::AssignSingle { category, value } => {
                self.insert(category.clone(), vec![value.clone()]);
            }
            OnSearchPayloadItem::Delete { category } => {
                self.remove(category);
            }
            OnSearchPayloadItem::Remove { category, value } => {
                if !self.contains_category(category) {
                    return;
                }
                let mut values = self.values(category).to_vec();
                if let Some(index) = values.iter().position(|v| v == value) {
                    values.remove(index);
                    self.insert(category.clone(), values);
                }
            }
        }
    }
}

impl<K: Into<String>, V: Into<SearchFilterValue>> FromIterator<(K, V)> for SearchFilter {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// One UI-originated change to the search filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnSearchPayloadItem {
    AppendString { category: String, value: String },
    AppendToggle { category: String, value: String },
    AssignSingle { category: String, value: String },
    Delete { category: String },
    Remove { category: String, value: String },
}

impl OnSearchPayloadItem {
    pub fn append_string(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AppendString { category: category.into(), value: value.into() }
    }

    pub fn append_toggle(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AppendToggle { category: category.into(), value: value.into() }
    }

    pub fn assign_single(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self::AssignSingle { category: category.into(), value: value.into() }
    }

    pub fn delete(category: impl Into<String>) -> Self {
        Self::Delete { category: category.into() }
    }

    pub fn remove(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Remove { category: category.into(), value: value.into() }
    }

    pub fn category(&self) -> &str {
        match self {
            Self::AppendString { category, .. }
            | Self::AppendToggle { category, .. }
            | Self::AssignSingle { category, .. }
            | Self::Delete { category }
            | Self::Remove { category, .. } => category,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::AppendString { value, .. }
            | Self::AppendToggle { value, .. }
            | Self::AssignSingle { value, .. }
            | Self::Remove { value, .. } => Some(value.as_str()),
            Self::Delete { .. } => None,
        }
    }

    /// Narrows the item to the analytics record it produces, if any.
    pub fn as_trackable(&self) -> Option<TrackedFilter<'_>> {
        match self {
            Self::AppendString { category, value }
            | Self::AppendToggle { category, value }
            | Self::AssignSingle { category, value } => Some(TrackedFilter { category, filter: value }),
            Self::Delete { .. } | Self::Remove { .. } => None,
        }
    }
}

/// Analytics record for a filter the user applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrackedFilter<'a> {
    pub category: &'a str,
    pub filter: &'a str,
}

/// Folds `payload` into a copy of `search_filter`, strictly in order.
pub fn apply_payload(search_filter: &SearchFilter, payload: &[OnSearchPayloadItem]) -> SearchFilter {
    payload.iter().fold(search_filter.clone(), |mut filter, item| {
        filter.apply(item);
        filter
    })
}

/// Rejects appends that are empty or already present in `search_filter`.
pub fn payload_item_filterer_for_updating(search_filter: &SearchFilter) -> impl Fn(&OnSearchPayloadItem) -> bool + '_ {
    move |item: &OnSearchPayloadItem| match item {
        OnSearchPayloadItem::AppendString { category, value } => {
            !value.is_empty() && !search_filter.values(category).contains(value)
        }
        _ => true,
    }
}

pub fn is_trackable(item: &OnSearchPayloadItem) -> bool {
    item.as_trackable().is_some()
}

pub fn tracked_filters(payload: &[OnSearchPayloadItem]) -> impl Iterator<Item = TrackedFilter<'_>> + '_ {
    payload.iter().filter_map(OnSearchPayloadItem::as_trackable)
}

/// Drops redundant appends (checked against the incoming filter) and folds the rest.
pub fn update_search_filter(search_filter: &SearchFilter, payload: &[OnSearchPayloadItem]) -> SearchFilter {
    let keep = payload_item_filterer_for_updating(search_filter);
    let payload = payload.iter().filter(|item| keep(*item)).cloned().collect::<Vec<_>>();
    apply_payload(search_filter, &payload)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn filter(entries: &[(&str, &[&str])]) -> SearchFilter {
        entries
            .iter()
            .map(|(k, vs)| (*k, vs.iter().map(|v| v.to_string()).collect::<Vec<_>>()))
            .collect()
    }

    #[test]
    fn later_items_see_earlier_items() {
        let payload = [OnSearchPayloadItem::append_string("X", "a"), OnSearchPayloadItem::assign_single("X", "b")];
        assert_eq!(apply_payload(&SearchFilter::new(), &payload), filter(&[("X", &["b"])]));
    }

    #[test]
    fn appends_create_and_extend_categories() {
        let payload = [
            OnSearchPayloadItem::append_string("Image", "nginx"),
            OnSearchPayloadItem::append_toggle("Severity", "CRITICAL_VULNERABILITY_SEVERITY"),
            OnSearchPayloadItem::append_string("Image", "redis"),
        ];
        let result = apply_payload(&SearchFilter::new(), &payload);
        assert_eq!(result.values("Image"), ["nginx", "redis"]);
        assert_eq!(result.values("Severity"), ["CRITICAL_VULNERABILITY_SEVERITY"]);
        assert_eq!(result.categories().collect::<Vec<_>>(), vec!["Image", "Severity"]);
    }

    #[test]
    fn append_promotes_a_single_value() {
        let start: SearchFilter = [("Image", "nginx")].into_iter().collect();
        let result = apply_payload(&start, &[OnSearchPayloadItem::append_string("Image", "redis")]);
        assert_eq!(result.get("Image"), Some(&SearchFilterValue::Multiple(vec!["nginx".into(), "redis".into()])));
    }

    #[test]
    fn remove_of_absent_value_is_a_no_op() {
        let start = filter(&[("X", &["a", "b"])]);
        assert_eq!(apply_payload(&start, &[OnSearchPayloadItem::remove("X", "z")]), start);
        assert_eq!(apply_payload(&start, &[OnSearchPayloadItem::remove("Y", "a")]), start);
    }

    #[test]
    fn remove_drops_only_the_first_match() {
        let start = filter(&[("X", &["a", "b", "a"])]);
        let result = apply_payload(&start, &[OnSearchPayloadItem::remove("X", "a")]);
        assert_eq!(result.values("X"), ["b", "a"]);
    }

    #[test]
    fn delete_removes_the_category_and_keeps_order() {
        let start = filter(&[("A", &["1"]), ("B", &["2"]), ("C", &["3"])]);
        let result = apply_payload(&start, &[OnSearchPayloadItem::delete("B")]);
        assert_eq!(result.categories().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(apply_payload(&result, &[OnSearchPayloadItem::delete("Missing")]), result);
    }

    #[test]
    fn input_filter_is_not_mutated() {
        let start = filter(&[("X", &["a"])]);
        let snapshot = start.clone();
        let _ = apply_payload(&start, &[OnSearchPayloadItem::delete("X"), OnSearchPayloadItem::append_string("Y", "b")]);
        assert_eq!(start, snapshot);
    }

    #[test]
    fn updating_filterer_drops_empty_and_duplicate_appends() {
        let current = filter(&[("Image", &["nginx"])]);
        let keep = payload_item_filterer_for_updating(&current);
        assert!(!keep(&OnSearchPayloadItem::append_string("Image", "")));
        assert!(!keep(&OnSearchPayloadItem::append_string("Image", "nginx")));
        assert!(keep(&OnSearchPayloadItem::append_string("Image", "redis")));
        assert!(keep(&OnSearchPayloadItem::append_toggle("Image", "nginx")));
        assert!(keep(&OnSearchPayloadItem::assign_single("Image", "")));
        assert!(keep(&OnSearchPayloadItem::remove("Image", "nginx")));
        assert!(keep(&OnSearchPayloadItem::delete("Image")));
    }

    #[test]
    fn update_checks_duplicates_against_the_incoming_filter() {
        let current = filter(&[("Image", &["nginx"])]);
        let payload = [
            OnSearchPayloadItem::append_string("Image", "nginx"),
            OnSearchPayloadItem::append_string("Image", ""),
            OnSearchPayloadItem::append_string("Image", "redis"),
            OnSearchPayloadItem::append_string("Image", "redis"),
        ];
        // both "redis" appends pass the filter because it only sees the incoming state
        assert_eq!(update_search_filter(&current, &payload).values("Image"), ["nginx", "redis", "redis"]);
    }

    #[test]
    fn trackable_actions() {
        let payload = [
            OnSearchPayloadItem::append_string("Image", "nginx"),
            OnSearchPayloadItem::append_toggle("Fixable", "true"),
            OnSearchPayloadItem::assign_single("CVSS", ">5"),
            OnSearchPayloadItem::remove("Image", "nginx"),
            OnSearchPayloadItem::delete("Image"),
        ];
        assert_eq!(payload.iter().map(is_trackable).collect::<Vec<_>>(), vec![true, true, true, false, false]);
        assert_eq!(
            tracked_filters(&payload).collect::<Vec<_>>(),
            vec![
                TrackedFilter { category: "Image", filter: "nginx" },
                TrackedFilter { category: "Fixable", filter: "true" },
                TrackedFilter { category: "CVSS", filter: ">5" },
            ],
        );
    }

    #[test]
    fn payload_wire_format_uses_action_tags() {
        let item: OnSearchPayloadItem =
            serde_json::from_str(r#"{"action":"APPEND_STRING","category":"Image","value":"nginx"}"#).unwrap();
        assert_eq!(item, OnSearchPayloadItem::append_string("Image", "nginx"));
        assert_eq!(
            serde_json::to_string(&OnSearchPayloadItem::delete("Image")).unwrap(),
            r#"{"action":"DELETE","category":"Image"}"#,
        );
        assert!(serde_json::from_str::<OnSearchPayloadItem>(r#"{"action":"RENAME","category":"Image"}"#).is_err());
    }

    #[test]
    fn filter_accepts_single_and_list_values() {
        let parsed: SearchFilter = serde_json::from_str(r#"{"Image":"nginx","Severity":["A","B"]}"#).unwrap();
        assert_eq!(parsed.values("Image"), ["nginx"]);
        assert_eq!(parsed.values("Severity"), ["A", "B"]);
        assert!(parsed.values("Missing").is_empty());
    }

    #[test]
    fn search_applied_ignores_empty_values() {
        assert!(!SearchFilter::new().has_search_applied());
        assert!(!filter(&[("Image", &[])]).has_search_applied());
        assert!(!filter(&[("Image", &[""])]).has_search_applied());
        assert!(filter(&[("Image", &["nginx"])]).has_search_applied());
    }

    fn payload_item() -> impl Strategy<Value = OnSearchPayloadItem> {
        let category = prop_oneof![Just("A"), Just("B"), Just("C")];
        let value = prop_oneof![Just("x"), Just("y"), Just("")];
        (0..5u8, category, value).prop_map(|(kind, category, value)| match kind {
            0 => OnSearchPayloadItem::append_string(category, value),
            1 => OnSearchPayloadItem::append_toggle(category, value),
            2 => OnSearchPayloadItem::assign_single(category, value),
            3 => OnSearchPayloadItem::delete(category),
            _ => OnSearchPayloadItem::remove(category, value),
        })
    }

    proptest! {
        #[test]
        fn prop_fold_is_sequential(
            first in proptest::collection::vec(payload_item(), 0..12),
            second in proptest::collection::vec(payload_item(), 0..12),
        ) {
            let all = first.iter().chain(&second).cloned().collect::<Vec<_>>();
            let stepwise = apply_payload(&apply_payload(&SearchFilter::new(), &first), &second);
            prop_assert_eq!(apply_payload(&SearchFilter::new(), &all), stepwise);
        }

        #[test]
        fn prop_updating_never_introduces_duplicate_string_appends(
            payload in proptest::collection::vec(payload_item(), 0..12),
        ) {
            let start = apply_payload(&SearchFilter::new(), &payload);
            let keep = payload_item_filterer_for_updating(&start);
            for item in &payload {
                if let OnSearchPayloadItem::AppendString { category, value } = item {
                    if keep(item) {
                        prop_assert!(!value.is_empty());
                        prop_assert!(!start.values(category).contains(value));
                    }
                }
            }
        }
    }
}
