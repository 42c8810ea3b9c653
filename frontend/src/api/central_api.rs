//! Client API calls for Central endpoints.

use common::{entity_counts::EntityTypeCounts, feature_flags::FeatureFlags};
use dioxus::prelude::*;


#[server]
pub async fn fetch_entity_type_counts(query: String) -> Result<EntityTypeCounts, ServerFnError> {
    let x = backend::api::fetch_entity_type_counts(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn list_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    let x = backend::api::list_feature_flags().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
