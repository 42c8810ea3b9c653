//! Backend search categories and vulnerability states.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Entity categories understood by the Central search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchCategory {
    Images,
    ImageVulnerabilities,
    ImageComponents,
    Deployments,
    Namespaces,
    Clusters,
    Nodes,
    NodeVulnerabilities,
}

impl SearchCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Images => "IMAGES",
            Self::ImageVulnerabilities => "IMAGE_VULNERABILITIES",
            Self::ImageComponents => "IMAGE_COMPONENTS",
            Self::Deployments => "DEPLOYMENTS",
            Self::Namespaces => "NAMESPACES",
            Self::Clusters => "CLUSTERS",
            Self::Nodes => "NODES",
            Self::NodeVulnerabilities => "NODE_VULNERABILITIES",
        }
    }
}

impl Display for SearchCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VulnerabilityState {
    #[default]
    Observed,
    Deferred,
    FalsePositive,
}

impl VulnerabilityState {
    pub const ALL: [VulnerabilityState; 3] = [Self::Observed, Self::Deferred, Self::FalsePositive];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Observed => "OBSERVED",
            Self::Deferred => "DEFERRED",
            Self::FalsePositive => "FALSE_POSITIVE",
        }
    }

    /// Tab title used by the workload CVE pages.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Observed => "Observed",
            Self::Deferred => "Deferred",
            Self::FalsePositive => "False positives",
        }
    }
}

impl Display for VulnerabilityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseVulnerabilityStateError(pub String);

impl Display for ParseVulnerabilityStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown vulnerability state: {}", self.0)
    }
}

impl std::error::Error for ParseVulnerabilityStateError {}

impl FromStr for VulnerabilityState {
    type Err = ParseVulnerabilityStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseVulnerabilityStateError(s.to_string()))
    }
}
