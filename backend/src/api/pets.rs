//! Pets list endpoint.

use common::api_envelope::ApiResponse;
use common::list_query::PetListQuery;
use common::pet::{Pet, PetListPage, PetPageData};

use crate::api::rarities::{list_passive_state_keys, list_rarities};
use crate::upstream::client::upstream_get;

pub async fn find_all_pets(query: PetListQuery) -> anyhow::Result<PetListPage> {
    let pairs = query
        .upstream_pairs()
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect::<Vec<_>>();
    let body = upstream_get("wiki/pets", &pairs).await?;
    let response: ApiResponse<Vec<Pet>> = serde_json::from_str(&body)?;
    let (pets, meta) = response
        .into_result()
        .map_err(|message| anyhow::anyhow!("pets query rejected: {message}"))?;
    Ok(PetListPage {
        pets,
        pagination: meta.and_then(|m| m.pagination),
    })
}

/// Everything the pets page needs on first render, fetched concurrently.
pub async fn pet_page_data(query: PetListQuery) -> anyhow::Result<PetPageData> {
    let (page, rarities, passive_state_keys) = futures::future::try_join3(
        find_all_pets(query),
        list_rarities(),
        list_passive_state_keys(),
    )
    .await?;
    Ok(PetPageData {
        page,
        rarities,
        passive_state_keys,
    })
}
