use axum::{body::Body, extract::RawQuery, http::StatusCode, response::{IntoResponse, Response}};
use tracing::info;

use crate::central_utils::central_client::CentralClient;

pub const DIAGNOSTICS_PATH: &str = "/api/extensions/diagnostics";
const DEFAULT_FILENAME: &str = "diagnostic_bundle.zip";

/// Central path for a query string built by `DiagnosticBundleRequest::query_string`, with or without its `?`.
pub fn diagnostics_path(query: Option<&str>) -> String {
    match query.map(|q| q.trim_start_matches('?')) {
        Some(q) if !q.is_empty() => format!("{DIAGNOSTICS_PATH}?{q}"),
        _ => DIAGNOSTICS_PATH.to_string(),
    }
}

async fn _download_diagnostic_bundle(query: Option<String>) -> anyhow::Result<Response> {
    let path = diagnostics_path(query.as_deref());
    info!("Downloading diagnostic bundle: {}", path);

    let client = CentralClient::from_env()?;
    let response = client.get_raw(&path).await?;
    let content_disposition = response
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
        .unwrap_or(format!("attachment; filename=\"{DEFAULT_FILENAME}\""));
    let headers: [(String, String); 2] = [
        ("Content-Type".to_string(), "application/zip".to_string()),
        ("Content-Disposition".to_string(), content_disposition),
    ];
    let body = Body::from_stream(response.bytes_stream());
    Ok((headers, body).into_response())
}

pub async fn download_diagnostic_bundle(RawQuery(query): RawQuery) -> Response {
    match _download_diagnostic_bundle(query).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("download_diagnostic_bundle: request failed: {:#?}", e);
            (StatusCode::BAD_GATEWAY, Body::from(e.to_string())).into_response()
        }
    }
}
