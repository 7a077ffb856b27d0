//! Pet models returned by the wiki API.

use serde::{Deserialize, Serialize};

use crate::api_envelope::PaginationMeta;
use crate::rarity::Rarity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    /// Stable key from the game's data export; `slug` is its URL form.
    pub key: String,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub movement_type: String,
    pub sell_price: f64,
    pub rarity: Option<Rarity>,
    pub passives: Option<Vec<PetPassive>>,
    pub last_synced_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetPassive {
    pub id: String,
    pub key: String,
    pub name: String,
    /// State key the passive is grouped under in the filter sheet.
    pub state_key: Option<String>,
}

/// One fetched page of pets plus its pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetListPage {
    pub pets: Vec<Pet>,
    pub pagination: Option<PaginationMeta>,
}

/// Everything the pets page needs on first render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetPageData {
    pub page: PetListPage,
    pub rarities: Vec<Rarity>,
    pub passive_state_keys: Vec<String>,
}
