//! Scope of the workload CVE overview. The view picks the workloads in scope
//! through a base filter, the observed CVE mode switches between images with
//! and without CVEs, and the page starts from a default filter.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::search_attributes::image_cve;
use crate::search_category::VulnerabilityState;
use crate::search_filter::SearchFilter;
use crate::search_query::{
    QuerySearchFilter, RegexSearchTerms, parse_query_search_filter, vuln_state_scoped_query_string,
    zero_cve_scoped_query_string,
};

pub const PLATFORM_COMPONENT_KEY: &str = "Platform Component";

#[derive(Debug, Clone, PartialEq)]
pub struct ParseScopeSegmentError(pub String);

impl Display for ParseScopeSegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown workload CVE scope: {}", self.0)
    }
}

impl std::error::Error for ParseScopeSegmentError {}

/// Whether the overview lists images that have CVEs or images with none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservedCveMode {
    #[default]
    WithCves,
    WithoutCves,
}

impl ObservedCveMode {
    pub const ALL: [ObservedCveMode; 2] = [Self::WithCves, Self::WithoutCves];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WithCves => "WITH_CVES",
            Self::WithoutCves => "WITHOUT_CVES",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::WithCves => "Image vulnerabilities",
            Self::WithoutCves => "Images without vulnerabilities",
        }
    }
}

impl Display for ObservedCveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservedCveMode {
    type Err = ParseScopeSegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseScopeSegmentError(s.to_string()))
    }
}

/// Which workloads the overview covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum WorkloadCveView {
    #[default]
    UserWorkloads,
    Platform,
    AllImages,
}

impl WorkloadCveView {
    pub const ALL: [WorkloadCveView; 3] = [Self::UserWorkloads, Self::Platform, Self::AllImages];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserWorkloads => "user-workloads",
            Self::Platform => "platform",
            Self::AllImages => "all-images",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::UserWorkloads => "User workloads",
            Self::Platform => "Platform",
            Self::AllImages => "All images",
        }
    }

    /// Filter every query of this view starts from. The page filter wins on
    /// shared categories.
    pub fn base_search_filter(&self) -> QuerySearchFilter {
        match self {
            Self::UserWorkloads => [(PLATFORM_COMPONENT_KEY, vec!["false".to_string()])].into_iter().collect(),
            Self::Platform => [(PLATFORM_COMPONENT_KEY, vec!["true".to_string()])].into_iter().collect(),
            Self::AllImages => QuerySearchFilter::default(),
        }
    }
}

impl Display for WorkloadCveView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkloadCveView {
    type Err = ParseScopeSegmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| ParseScopeSegmentError(s.to_string()))
    }
}

/// Critical and important fixable CVEs.
pub fn default_search_filter() -> SearchFilter {
    [
        (
            image_cve::SEVERITY.search_term,
            vec!["CRITICAL_VULNERABILITY_SEVERITY".to_string(), "IMPORTANT_VULNERABILITY_SEVERITY".to_string()],
        ),
        (image_cve::FIXABLE.search_term, vec!["true".to_string()]),
    ]
    .into_iter()
    .collect()
}

/// The defaults only seed an empty filter, and only while viewing images with CVEs.
pub fn should_apply_default_filters(search_filter: &SearchFilter, mode: ObservedCveMode) -> bool {
    search_filter.is_empty() && mode == ObservedCveMode::WithCves
}

/// Filter the page opens with for `search_filter` taken from the URL.
pub fn initial_search_filter(search_filter: &SearchFilter, mode: ObservedCveMode) -> SearchFilter {
    if should_apply_default_filters(search_filter, mode) {
        default_search_filter()
    } else {
        search_filter.clone()
    }
}

/// Switching modes clears the filter.
pub fn search_filter_for_mode(mode: ObservedCveMode) -> SearchFilter {
    initial_search_filter(&SearchFilter::new(), mode)
}

/// Switching vulnerability state clears the filter and goes back to images
/// with CVEs. Only the observed state gets the defaults back.
pub fn search_filter_for_state(state: VulnerabilityState) -> SearchFilter {
    match state {
        VulnerabilityState::Observed => default_search_filter(),
        VulnerabilityState::Deferred | VulnerabilityState::FalsePositive => SearchFilter::new(),
    }
}

/// Query sent to Central for the overview counts: the page filter merged over
/// the view's base filter, then scoped to the vulnerability state or to
/// images without CVEs.
pub fn workload_cves_scoped_query_string(
    view: WorkloadCveView,
    vulnerability_state: VulnerabilityState,
    mode: ObservedCveMode,
    search_filter: &SearchFilter,
    terms: &RegexSearchTerms,
) -> String {
    let query_filter = parse_query_search_filter(search_filter).merged_over(&view.base_search_filter());
    match mode {
        ObservedCveMode::WithCves => vuln_state_scoped_query_string(&query_filter, terms, Some(vulnerability_state)),
        ObservedCveMode::WithoutCves => zero_cve_scoped_query_string(&query_filter, terms),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::search_filter_config::workload_cve_search_filter_config;

    fn workload_terms() -> RegexSearchTerms {
        RegexSearchTerms::from_config(&workload_cve_search_filter_config())
    }

    fn image_filter(image: &str) -> SearchFilter {
        [("Image", image)].into_iter().collect()
    }

    #[test]
    fn scope_segments_parse_back() {
        for mode in ObservedCveMode::ALL {
            assert_eq!(mode.to_string().parse::<ObservedCveMode>(), Ok(mode));
        }
        for view in WorkloadCveView::ALL {
            assert_eq!(view.to_string().parse::<WorkloadCveView>(), Ok(view));
        }
        assert_eq!("with-cves".parse::<ObservedCveMode>(), Err(ParseScopeSegmentError("with-cves".to_string())));
        assert_eq!(serde_json::to_value(WorkloadCveView::AllImages).unwrap(), serde_json::json!("all-images"));
        assert_eq!(serde_json::to_value(ObservedCveMode::WithoutCves).unwrap(), serde_json::json!("WITHOUT_CVES"));
    }

    #[test]
    fn with_cves_scopes_to_the_vulnerability_state() {
        let query = workload_cves_scoped_query_string(
            WorkloadCveView::UserWorkloads,
            VulnerabilityState::Deferred,
            ObservedCveMode::WithCves,
            &image_filter("nginx"),
            &workload_terms(),
        );
        assert_eq!(query, "Platform Component:false+Image:r/nginx+Vulnerability State:DEFERRED");
    }

    #[test]
    fn without_cves_scopes_to_images_with_no_cves() {
        let query = workload_cves_scoped_query_string(
            WorkloadCveView::AllImages,
            VulnerabilityState::Observed,
            ObservedCveMode::WithoutCves,
            &image_filter("nginx"),
            &workload_terms(),
        );
        assert_eq!(query, "Image:r/nginx+Image CVE Count:0");
    }

    #[test]
    fn page_filter_overrides_the_view_base_filter() {
        let mut filter = image_filter("nginx");
        filter.insert(PLATFORM_COMPONENT_KEY, "true");
        let query = workload_cves_scoped_query_string(
            WorkloadCveView::UserWorkloads,
            VulnerabilityState::Observed,
            ObservedCveMode::WithoutCves,
            &filter,
            &workload_terms(),
        );
        assert_eq!(query, "Platform Component:true+Image:r/nginx+Image CVE Count:0");
    }

    #[test]
    fn empty_filter_still_carries_the_base_filter() {
        let query = workload_cves_scoped_query_string(
            WorkloadCveView::Platform,
            VulnerabilityState::FalsePositive,
            ObservedCveMode::WithCves,
            &SearchFilter::new(),
            &workload_terms(),
        );
        assert_eq!(query, "Platform Component:true+Vulnerability State:FALSE_POSITIVE");
    }

    #[test]
    fn defaults_seed_only_an_empty_filter_with_cves() {
        let defaults = default_search_filter();
        assert_eq!(defaults.categories().collect::<Vec<_>>(), vec!["Severity", "Fixable"]);
        assert_eq!(
            defaults.values("Severity"),
            ["CRITICAL_VULNERABILITY_SEVERITY".to_string(), "IMPORTANT_VULNERABILITY_SEVERITY".to_string()]
        );
        assert_eq!(defaults.values("Fixable"), ["true".to_string()]);
        assert!(defaults.has_search_applied());

        assert_eq!(initial_search_filter(&SearchFilter::new(), ObservedCveMode::WithCves), defaults);
        assert_eq!(initial_search_filter(&SearchFilter::new(), ObservedCveMode::WithoutCves), SearchFilter::new());
        assert_eq!(initial_search_filter(&image_filter("nginx"), ObservedCveMode::WithCves), image_filter("nginx"));
    }

    #[test]
    fn mode_and_state_changes_reset_the_filter() {
        assert_eq!(search_filter_for_mode(ObservedCveMode::WithCves), default_search_filter());
        assert_eq!(search_filter_for_mode(ObservedCveMode::WithoutCves), SearchFilter::new());
        assert_eq!(search_filter_for_state(VulnerabilityState::Observed), default_search_filter());
        assert_eq!(search_filter_for_state(VulnerabilityState::Deferred), SearchFilter::new());
        assert_eq!(search_filter_for_state(VulnerabilityState::FalsePositive), SearchFilter::new());
    }

    #[test]
    fn default_values_are_options_of_their_attributes() {
        let defaults = default_search_filter();
        for attribute in [image_cve::SEVERITY, image_cve::FIXABLE] {
            let options = attribute.input_type.options();
            for value in defaults.values(attribute.search_term) {
                assert!(options.iter().any(|option| option.value == value.as_str()), "{value}");
            }
        }
    }
}
