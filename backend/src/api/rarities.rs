//! Rarity and passive-state lookup endpoints (permanently cacheable).

use common::api_envelope::ApiResponse;
use common::rarity::Rarity;

use crate::upstream::client::upstream_get;

pub async fn list_rarities() -> anyhow::Result<Vec<Rarity>> {
    let body = upstream_get("rarities", &[]).await?;
    let response: ApiResponse<Vec<Rarity>> = serde_json::from_str(&body)?;
    let (mut rarities, _meta) = response
        .into_result()
        .map_err(|message| anyhow::anyhow!("rarities query rejected: {message}"))?;
    rarities.sort_by_key(|rarity| rarity.level);
    Ok(rarities)
}

pub async fn list_passive_state_keys() -> anyhow::Result<Vec<String>> {
    let body = upstream_get("pet-passives/state-keys", &[]).await?;
    let response: ApiResponse<Vec<String>> = serde_json::from_str(&body)?;
    let (keys, _meta) = response
        .into_result()
        .map_err(|message| anyhow::anyhow!("passive state keys query rejected: {message}"))?;
    Ok(keys)
}
