//! Entity type counts for the workload CVE tabs.

use common::entity_counts::EntityTypeCounts;
use serde_json::json;

use crate::central_utils::central_client::CentralClient;

pub const ENTITY_TYPE_COUNTS_QUERY: &str = "
    query getEntityTypeCounts($query: String) {
        imageCount(query: $query)
        deploymentCount(query: $query)
        imageCVECount(query: $query)
    }
";

/// `query` is an already scoped Central search query string.
pub async fn fetch_entity_type_counts(query: String) -> anyhow::Result<EntityTypeCounts> {
    let client = CentralClient::from_env()?;
    fetch_entity_type_counts_with(&client, &query).await
}

pub(crate) async fn fetch_entity_type_counts_with(client: &CentralClient, query: &str) -> anyhow::Result<EntityTypeCounts> {
    tracing::info!("Fetching entity type counts for query: {:?}", query);
    client
        .graphql("getEntityTypeCounts", ENTITY_TYPE_COUNTS_QUERY, json!({ "query": query }))
        .await
}
