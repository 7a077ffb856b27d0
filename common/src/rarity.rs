//! Rarity model shared by all wiki item kinds.

use serde::{Deserialize, Serialize};

/// A global rarity tier. `level` ranks tiers from common upward and drives
/// badge colors and rarity sorting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rarity {
    pub id: String,
    pub key: String,
    pub name: String,
    pub level: u32,
}
