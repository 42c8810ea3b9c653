//! Entity counts shown on the workload CVE entity tabs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EntityTypeCounts {
    pub image_count: u64,
    pub deployment_count: u64,
    #[serde(rename = "imageCVECount")]
    pub image_cve_count: u64,
}
