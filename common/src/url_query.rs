//! Request query strings for plain REST endpoints.
//!
//! Arrays repeat their key (`cluster=a&cluster=b`), only values are
//! percent-encoded and absent parameters are left out entirely. A `?` is
//! prepended only when at least one parameter remains.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// RFC 3986 unreserved characters stay literal.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Absent,
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Absent)
    }
}

/// Ordered query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams(Vec<(String, ParamValue)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Renders `key=value` pairs joined by `&`, without a prefix.
    pub fn to_query(&self) -> String {
        let encode = |value: &str| utf8_percent_encode(value, QUERY_VALUE).to_string();
        let mut pairs = Vec::new();
        for (key, value) in &self.0 {
            match value {
                ParamValue::Absent => {}
                ParamValue::Bool(b) => pairs.push(format!("{key}={b}")),
                ParamValue::Str(s) => pairs.push(format!("{key}={}", encode(s))),
                ParamValue::List(values) => {
                    pairs.extend(values.iter().map(|v| format!("{key}={}", encode(v))));
                }
            }
        }
        pairs.join("&")
    }

    pub fn to_query_string(&self) -> String {
        let query = self.to_query();
        if query.is_empty() { query } else { format!("?{query}") }
    }
}

/// Options of the diagnostic bundle download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DiagnosticBundleRequest {
    pub selected_cluster_names: Vec<String>,
    /// ISO 8601 timestamp, `None` for the whole retention window.
    pub starting_time_iso: Option<String>,
    pub is_database_diagnostics_only: bool,
    pub include_compliance_operator_resources: bool,
}

impl DiagnosticBundleRequest {
    pub fn query_string(&self) -> String {
        QueryParams::new()
            .param("database-only", self.is_database_diagnostics_only.then_some(true))
            .param("compliance-operator", self.include_compliance_operator_resources.then_some(true))
            .param("since", self.starting_time_iso.clone().filter(|since| !since.is_empty()))
            .param("cluster", self.selected_cluster_names.clone())
            .to_query_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn single_cluster_only() {
        let request = DiagnosticBundleRequest {
            selected_cluster_names: vec!["abbot".to_string()],
            starting_time_iso: None,
            is_database_diagnostics_only: false,
            include_compliance_operator_resources: false,
        };
        assert_eq!(request.query_string(), "?cluster=abbot");
    }

    #[test]
    fn all_options_in_fixed_order() {
        let request = DiagnosticBundleRequest {
            selected_cluster_names: vec!["test-cluster".to_string()],
            starting_time_iso: Some("2020-10-20T20:21:22.000Z".to_string()),
            is_database_diagnostics_only: true,
            include_compliance_operator_resources: true,
        };
        assert_eq!(
            request.query_string(),
            "?database-only=true&compliance-operator=true&since=2020-10-20T20%3A21%3A22.000Z&cluster=test-cluster",
        );
    }

    #[test]
    fn no_options_means_no_prefix() {
        assert_eq!(DiagnosticBundleRequest::default().query_string(), "");
    }

    #[test]
    fn arrays_repeat_their_key() {
        let request = DiagnosticBundleRequest {
            selected_cluster_names: vec!["a".to_string(), "b c".to_string()],
            ..Default::default()
        };
        assert_eq!(request.query_string(), "?cluster=a&cluster=b%20c");
    }

    #[test]
    fn keys_are_not_encoded_but_values_are() {
        let params = QueryParams::new()
            .param("s[Image]", "nginx:latest")
            .param("skip", None::<String>)
            .param("flag", false);
        assert_eq!(params.to_query_string(), "?s[Image]=nginx%3Alatest&flag=false");
    }
}
