//! Feature flags reported by Central.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlag {
    pub name: String,
    pub env_var: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FeatureFlags {
    #[serde(default)]
    pub feature_flags: Vec<FeatureFlag>,
}

impl FeatureFlags {
    /// Unknown flags count as disabled.
    pub fn is_enabled(&self, env_var: &str) -> bool {
        self.feature_flags.iter().any(|flag| flag.env_var == env_var && flag.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_filter_config::workload_cve_search_filter_config;

    fn flags() -> FeatureFlags {
        serde_json::from_str(
            r#"{"featureFlags":[
                {"name":"Scanner V4","envVar":"ROX_SCANNER_V4","enabled":true},
                {"name":"Advisory separation","envVar":"ROX_CVE_ADVISORY_SEPARATION","enabled":false}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn unknown_and_disabled_flags_are_off() {
        let flags = flags();
        assert!(flags.is_enabled("ROX_SCANNER_V4"));
        assert!(!flags.is_enabled("ROX_CVE_ADVISORY_SEPARATION"));
        assert!(!flags.is_enabled("ROX_UNKNOWN"));
        assert!(!FeatureFlags::default().is_enabled("ROX_SCANNER_V4"));
    }

    #[test]
    fn gates_config_attributes() {
        let flags = flags();
        let config = workload_cve_search_filter_config().with_feature_flags(|flag| flags.is_enabled(flag));
        assert!(config.get_attribute("Image CVE", "EPSS probability").is_some());
        assert!(config.get_attribute("Image CVE", "Advisory name").is_none());
    }
}
