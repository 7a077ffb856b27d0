//! Eggs list endpoint.

use common::api_envelope::ApiResponse;
use common::egg::{Egg, EggListPage, EggPageData, contained_item_types};
use common::list_query::EggListQuery;

use crate::api::rarities::list_rarities;
use crate::upstream::client::upstream_get;

pub async fn find_all_eggs(query: EggListQuery) -> anyhow::Result<EggListPage> {
    let pairs = query
        .upstream_pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect::<Vec<_>>();
    let body = upstream_get("wiki/eggs", &pairs).await?;
    let response: ApiResponse<Vec<Egg>> = serde_json::from_str(&body)?;
    let (eggs, meta) = response
        .into_result()
        .map_err(|message| anyhow::anyhow!("eggs query rejected: {message}"))?;
    Ok(EggListPage {
        eggs,
        pagination: meta.and_then(|m| m.pagination),
    })
}

/// Everything the eggs page needs on first render. The item-type filter
/// options come from the fetched eggs themselves; the upstream has no
/// listing endpoint for them.
pub async fn egg_page_data(query: EggListQuery) -> anyhow::Result<EggPageData> {
    let (page, rarities) =
        futures::future::try_join(find_all_eggs(query), list_rarities()).await?;
    let item_types = contained_item_types(&page.eggs);
    Ok(EggPageData {
        page,
        rarities,
        item_types,
    })
}
