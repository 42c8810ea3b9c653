use std::time::Instant;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;

pub const DEFAULT_CENTRAL_URL: &str = "https://localhost:8000";

/// Connection settings, read from `ROX_CENTRAL_URL`, `ROX_API_TOKEN` and `ROX_INSECURE_SKIP_TLS_VERIFY`.
#[derive(Debug, Clone, PartialEq)]
pub struct CentralConfig {
    pub url: String,
    pub api_token: Option<String>,
    pub insecure_skip_tls_verify: bool,
}

impl CentralConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let url = lookup("ROX_CENTRAL_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_CENTRAL_URL.to_string());
        Self {
            url: url.trim_end_matches('/').to_string(),
            api_token: lookup("ROX_API_TOKEN").filter(|token| !token.is_empty()),
            insecure_skip_tls_verify: lookup("ROX_INSECURE_SKIP_TLS_VERIFY")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Clone)]
pub struct CentralClient {
    config: CentralConfig,
    http: reqwest::Client,
}

impl CentralClient {
    pub fn new(config: CentralConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure_skip_tls_verify)
            .build()
            .context("Failed to build Central HTTP client")?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(CentralConfig::from_env())
    }

    pub fn url_for(&self, path_and_query: &str) -> String {
        format!("{}{}", self.config.url, path_and_query)
    }

    fn request(&self, method: reqwest::Method, path_and_query: &str) -> reqwest::RequestBuilder {
        let builder = self.http.request(method, self.url_for(path_and_query));
        match &self.config.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends a GET and returns the response once its status is known to be a success.
    pub async fn get_raw(&self, path_and_query: &str) -> anyhow::Result<reqwest::Response> {
        tracing::info!("CENTRAL GET: {}", path_and_query);
        let response = self.request(reqwest::Method::GET, path_and_query).send().await?;
        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let response_txt = response.text().await.unwrap_or_default();
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        Ok(response)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> anyhow::Result<T> {
        let t0 = Instant::now();
        let response_txt = self.get_raw(path_and_query).await?.text().await?;
        tracing::info!("CENTRAL RESPONSE: len = {} ({}ms)", response_txt.len(), t0.elapsed().as_millis());
        Ok(serde_json::from_str(&response_txt)?)
    }

    pub async fn graphql<T: DeserializeOwned>(
        &self,
        operation_name: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> anyhow::Result<T> {
        let t0 = Instant::now();
        let path = format!("/api/graphql?opname={operation_name}");
        tracing::info!("CENTRAL GRAPHQL: {} {}", operation_name, variables);
        let response = self
            .request(reqwest::Method::POST, &path)
            .json(&json!({
                "operationName": operation_name,
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;
        let status = response.status();
        let response_txt = response.text().await?;
        if status.is_client_error() || status.is_server_error() {
            anyhow::bail!("Error: {}: {}", status, response_txt);
        }
        tracing::info!("CENTRAL GRAPHQL RESPONSE: {} len = {} ({}ms)", operation_name, response_txt.len(), t0.elapsed().as_millis());
        decode_graphql_response(&response_txt)
    }
}

pub(crate) fn decode_graphql_response<T: DeserializeOwned>(response_txt: &str) -> anyhow::Result<T> {
    let response: GraphQlResponse<T> = serde_json::from_str(response_txt)?;
    if !response.errors.is_empty() {
        let messages = response.errors.into_iter().map(|e| e.message).collect::<Vec<_>>();
        anyhow::bail!("GraphQL errors: {}", messages.join("; "));
    }
    response.data.context("GraphQL response has no data")
}
