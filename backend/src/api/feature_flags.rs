use common::feature_flags::FeatureFlags;

use crate::central_utils::central_client::CentralClient;

pub const FEATURE_FLAGS_PATH: &str = "/v1/featureflags";

pub async fn list_feature_flags() -> anyhow::Result<FeatureFlags> {
    let client = CentralClient::from_env()?;
    let flags: FeatureFlags = client.get_json(FEATURE_FLAGS_PATH).await?;
    let enabled = flags.feature_flags.iter().filter(|flag| flag.enabled).count();
    tracing::info!("Feature flags: {} known, {} enabled", flags.feature_flags.len(), enabled);
    Ok(flags)
}
