//! Translation of search filters into Central search query strings.
//!
//! Central expects `Category:value1,value2+Other Category:value` where a value
//! prefixed by `r/` is matched as a regular expression instead of exactly.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::search_category::VulnerabilityState;
use crate::search_filter::SearchFilter;
use crate::search_filter_config::SearchFilterConfig;

pub const REGEX_PREFIX: &str = "r/";
pub const VULNERABILITY_STATE_KEY: &str = "Vulnerability State";
pub const IMAGE_CVE_COUNT_KEY: &str = "Image CVE Count";

/// Search filter with every category normalized to a list of non-empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct QuerySearchFilter(IndexMap<String, Vec<String>>);

impl QuerySearchFilter {
    pub fn get(&self, category: &str) -> Option<&Vec<String>> {
        self.0.get(category)
    }

    pub fn insert(&mut self, category: impl Into<String>, values: Vec<String>) {
        self.0.insert(category.into(), values);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> + '_ {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of `self` with `category` set to a single value, replacing any
    /// existing entry in its current position.
    pub fn with_value(&self, category: &str, value: &str) -> Self {
        let mut scoped = self.clone();
        scoped.insert(category, vec![value.to_string()]);
        scoped
    }

    /// Copy of `self` merged with `base`, `self` winning on shared categories.
    pub fn merged_over(&self, base: &QuerySearchFilter) -> Self {
        let mut merged = base.clone();
        for (category, values) in self.iter() {
            merged.insert(category.clone(), values.clone());
        }
        merged
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for QuerySearchFilter {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Drops empty values and categories left without values.
pub fn parse_query_search_filter(raw: &SearchFilter) -> QuerySearchFilter {
    raw.iter()
        .filter_map(|(category, value)| {
            let values = value
                .as_slice()
                .iter()
                .filter(|v| !v.is_empty())
                .cloned()
                .collect::<Vec<_>>();
            (!values.is_empty()).then(|| (category.clone(), values))
        })
        .collect()
}

/// Lower-cased search terms of every free text attribute in a config.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegexSearchTerms(BTreeSet<String>);

impl RegexSearchTerms {
    pub fn from_config(config: &SearchFilterConfig) -> Self {
        Self::from_configs([config])
    }

    pub fn from_configs<'a>(configs: impl IntoIterator<Item = &'a SearchFilterConfig>) -> Self {
        Self(
            configs
                .into_iter()
                .flat_map(|config| config.attributes())
                .filter(|attribute| attribute.input_type.is_free_text())
                .map(|attribute| attribute.search_term.to_lowercase())
                .collect(),
        )
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains(&category.to_lowercase())
    }
}

/// Prefixes every value of a free text category with `r/`.
pub fn apply_regex_search_modifiers(filter: &QuerySearchFilter, terms: &RegexSearchTerms) -> QuerySearchFilter {
    filter
        .iter()
        .map(|(category, values)| {
            let values = if terms.contains(category) {
                values.iter().map(|v| format!("{REGEX_PREFIX}{v}")).collect()
            } else {
                values.clone()
            };
            (category.clone(), values)
        })
        .collect()
}

/// Serializes a filter into Central's `Key:v1,v2+Key2:v3` grammar.
pub fn request_query_string(filter: &QuerySearchFilter) -> String {
    filter
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(category, values)| format!("{category}:{}", values.join(",")))
        .collect::<Vec<_>>()
        .join("+")
}

pub fn regex_scoped_query_string(filter: &QuerySearchFilter, terms: &RegexSearchTerms) -> String {
    request_query_string(&apply_regex_search_modifiers(filter, terms))
}

/// Regex scoped query restricted to CVEs in `vulnerability_state`, when given.
pub fn vuln_state_scoped_query_string(
    filter: &QuerySearchFilter,
    terms: &RegexSearchTerms,
    vulnerability_state: Option<VulnerabilityState>,
) -> String {
    let regex_filter = apply_regex_search_modifiers(filter, terms);
    match vulnerability_state {
        Some(state) => request_query_string(&regex_filter.with_value(VULNERABILITY_STATE_KEY, state.as_str())),
        None => request_query_string(&regex_filter),
    }
}

/// Regex scoped query restricted to images without any CVE.
pub fn zero_cve_scoped_query_string(filter: &QuerySearchFilter, terms: &RegexSearchTerms) -> String {
    request_query_string(&apply_regex_search_modifiers(filter, terms).with_value(IMAGE_CVE_COUNT_KEY, "0"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::search_attributes::{AttributeDescriptor, InputType};
    use crate::search_category::SearchCategory;
    use crate::search_filter_config::{EntitySpec, workload_cve_search_filter_config};

    fn query_filter(entries: &[(&str, &[&str])]) -> QuerySearchFilter {
        entries
            .iter()
            .map(|(k, vs)| (*k, vs.iter().map(|v| v.to_string()).collect::<Vec<_>>()))
            .collect()
    }

    fn tag_and_cvss_terms() -> RegexSearchTerms {
        let config = SearchFilterConfig::build([EntitySpec::new(
            "Image",
            SearchCategory::Images,
            &[
                AttributeDescriptor::new("Tag", "Image tag", "Tag", InputType::Text),
                AttributeDescriptor::new("CVSS", "CVSS", "CVSS", InputType::DropdownSlider),
            ],
        )]);
        RegexSearchTerms::from_config(&config)
    }

    #[test]
    fn only_free_text_categories_get_regex_prefix() {
        let filter = query_filter(&[("Tag", &["1.0"]), ("CVSS", &[">5"])]);
        assert_eq!(
            apply_regex_search_modifiers(&filter, &tag_and_cvss_terms()),
            query_filter(&[("Tag", &["r/1.0"]), ("CVSS", &[">5"])]),
        );
    }

    #[test]
    fn regex_terms_match_case_insensitively() {
        let terms = tag_and_cvss_terms();
        assert!(terms.contains("TAG"));
        assert!(terms.contains("tag"));
        assert!(!terms.contains("cvss"));

        let filter = query_filter(&[("tAg", &["latest", "1.0"])]);
        assert_eq!(regex_scoped_query_string(&filter, &terms), "tAg:r/latest,r/1.0");
    }

    #[test]
    fn workload_terms_cover_autocomplete_and_text_only() {
        let terms = RegexSearchTerms::from_config(&workload_cve_search_filter_config());
        for term in ["Image", "Image Tag", "CVE", "Deployment", "Namespace", "Cluster", "Component Version"] {
            assert!(terms.contains(term), "{term}");
        }
        for term in ["CVSS", "Severity", "Fixable", "Image Scan Time", "EPSS Probability", "Component Source"] {
            assert!(!terms.contains(term), "{term}");
        }
    }

    #[test]
    fn request_query_string_joins_values_and_categories() {
        let filter = query_filter(&[("Image", &["nginx", "redis"]), ("Empty", &[]), ("Severity", &["CRITICAL_VULNERABILITY_SEVERITY"])]);
        assert_eq!(request_query_string(&filter), "Image:nginx,redis+Severity:CRITICAL_VULNERABILITY_SEVERITY");
        assert_eq!(request_query_string(&QuerySearchFilter::default()), "");
    }

    #[test]
    fn vulnerability_state_is_appended_or_overrides() {
        let terms = tag_and_cvss_terms();
        let filter = query_filter(&[("Tag", &["1.0"])]);
        assert_eq!(
            vuln_state_scoped_query_string(&filter, &terms, Some(VulnerabilityState::Deferred)),
            "Tag:r/1.0+Vulnerability State:DEFERRED",
        );
        assert_eq!(vuln_state_scoped_query_string(&filter, &terms, None), "Tag:r/1.0");

        let filter = query_filter(&[("Vulnerability State", &["OBSERVED"]), ("Tag", &["1.0"])]);
        assert_eq!(
            vuln_state_scoped_query_string(&filter, &terms, Some(VulnerabilityState::FalsePositive)),
            "Vulnerability State:FALSE_POSITIVE+Tag:r/1.0",
        );
    }

    #[test]
    fn zero_cve_scope_adds_literal_count() {
        let filter = query_filter(&[("CVSS", &[">5"])]);
        assert_eq!(zero_cve_scoped_query_string(&filter, &tag_and_cvss_terms()), "CVSS:>5+Image CVE Count:0");
    }

    #[test]
    fn parsing_normalizes_and_drops_empty_values() {
        let mut raw = SearchFilter::new();
        raw.insert("Image", "nginx");
        raw.insert("Tag", vec!["".to_string()]);
        raw.insert("Severity", vec!["A".to_string(), "".to_string(), "B".to_string()]);
        assert_eq!(parse_query_search_filter(&raw), query_filter(&[("Image", &["nginx"]), ("Severity", &["A", "B"])]));
    }

    #[test]
    fn merging_prefers_page_filter() {
        let base = query_filter(&[("Severity", &["A"]), ("Fixable", &["true"])]);
        let page = query_filter(&[("Fixable", &["false"])]);
        let merged = page.merged_over(&base);
        assert_eq!(merged, query_filter(&[("Severity", &["A"]), ("Fixable", &["false"])]));
    }
}
