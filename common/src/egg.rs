//! Egg models returned by the wiki API.

use serde::{Deserialize, Serialize};

use crate::api_envelope::PaginationMeta;
use crate::filter_field::title_case;
use crate::rarity::Rarity;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Egg {
    pub id: String,
    pub key: String,
    pub slug: String,
    pub name: String,
    pub icon: String,
    /// Seconds until hatching; absent for instant eggs.
    pub hatch_time: Option<f64>,
    pub rarity: Option<Rarity>,
    pub items: Vec<EggItem>,
    pub last_synced_at: Option<String>,
}

/// One item an egg can hatch into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EggItem {
    pub key: String,
    pub name: String,
    pub item_type: String,
}

/// One fetched page of eggs plus its pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EggListPage {
    pub eggs: Vec<Egg>,
    pub pagination: Option<PaginationMeta>,
}

/// Everything the eggs page needs on first render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EggPageData {
    pub page: EggListPage,
    pub rarities: Vec<Rarity>,
    pub item_types: Vec<String>,
}

/// Distinct item types contained in a batch of eggs, title-cased and
/// sorted; these seed the item-type filter options.
pub fn contained_item_types(eggs: &[Egg]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for egg in eggs {
        for item in &egg.items {
            if item.item_type.is_empty() {
                continue;
            }
            let item_type = title_case(&item.item_type);
            if !types.contains(&item_type) {
                types.push(item_type);
            }
        }
    }
    types.sort();
    types
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contained_item_types_are_unique_title_cased_and_sorted() {
        let eggs = vec![
            Egg {
                items: vec![
                    EggItem {
                        item_type: "pet".to_string(),
                        ..Default::default()
                    },
                    EggItem {
                        item_type: "egg".to_string(),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            Egg {
                items: vec![EggItem {
                    item_type: "PET".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ];
        assert_eq!(contained_item_types(&eggs), vec!["Egg", "Pet"]);
    }
}
