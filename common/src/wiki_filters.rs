//! Filter records for the wiki list pages.

use serde::{Deserialize, Serialize};

use crate::filter_field::{FieldValue, FilterFieldConfig, FilterFields};

pub const FIELD_NAME: &str = "name";
pub const FIELD_RARITY_KEYS: &str = "rarityKeys";
pub const FIELD_PASSIVE_STATES: &str = "passiveStates";
pub const FIELD_ITEM_TYPES: &str = "itemTypes";


/// Filters on the pets list: name search, rarity keys, passive state keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PetFilters {
    pub name: String,
    pub rarity_keys: Vec<String>,
    pub passive_states: Vec<String>,
}

impl FilterFields for PetFilters {
    const CONFIG: &'static [FilterFieldConfig<Self>] = &[
        FilterFieldConfig::search(
            FIELD_NAME,
            |s| FieldValue::Text(s.name.clone()),
            |s, v| s.name = v.into_text(),
        ),
        FilterFieldConfig::multi_select(
            FIELD_RARITY_KEYS,
            |s| FieldValue::Tags(s.rarity_keys.clone()),
            |s, v| s.rarity_keys = v.into_tags(),
        ),
        FilterFieldConfig::multi_select(
            FIELD_PASSIVE_STATES,
            |s| FieldValue::Tags(s.passive_states.clone()),
            |s, v| s.passive_states = v.into_tags(),
        ),
    ];
}

impl PetFilters {
    /// Number of active multi-select selections, shown as the filter-button
    /// badge. The search text does not count.
    pub fn active_filter_count(&self) -> usize {
        self.rarity_keys.len() + self.passive_states.len()
    }
}


/// Filters on the eggs list: name search, rarity keys, contained item
/// types. Item types are lowercase in the URL and title-case internally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EggFilters {
    pub name: String,
    pub rarity_keys: Vec<String>,
    pub item_types: Vec<String>,
}

impl FilterFields for EggFilters {
    const CONFIG: &'static [FilterFieldConfig<Self>] = &[
        FilterFieldConfig::search(
            FIELD_NAME,
            |s| FieldValue::Text(s.name.clone()),
            |s, v| s.name = v.into_text(),
        ),
        FilterFieldConfig::multi_select(
            FIELD_RARITY_KEYS,
            |s| FieldValue::Tags(s.rarity_keys.clone()),
            |s, v| s.rarity_keys = v.into_tags(),
        ),
        FilterFieldConfig::multi_select_lowercase(
            FIELD_ITEM_TYPES,
            |s| FieldValue::Tags(s.item_types.clone()),
            |s, v| s.item_types = v.into_tags(),
        ),
    ];
}

impl EggFilters {
    pub fn active_filter_count(&self) -> usize {
        self.rarity_keys.len() + self.item_types.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_sync::QuerySnapshot;

    #[test]
    fn pet_filters_round_trip_through_snapshot() {
        let snapshot = QuerySnapshot::from_pairs([
            ("name", "fox"),
            ("rarityKeys", "Common,Rare"),
            ("passiveStates", "hungry"),
        ]);
        let filters = PetFilters::from_snapshot(&snapshot);
        assert_eq!(filters.name, "fox");
        assert_eq!(filters.rarity_keys, vec!["Common", "Rare"]);
        assert_eq!(filters.passive_states, vec!["hungry"]);
        assert_eq!(filters.to_snapshot(), snapshot);
    }

    #[test]
    fn empty_filters_produce_an_empty_snapshot() {
        assert!(PetFilters::default().to_snapshot().is_empty());
        assert!(EggFilters::default().to_snapshot().is_empty());
    }

    #[test]
    fn egg_item_types_are_lowercase_on_the_wire() {
        let snapshot = QuerySnapshot::from_pairs([("itemTypes", "pet,egg")]);
        let filters = EggFilters::from_snapshot(&snapshot);
        assert_eq!(filters.item_types, vec!["Pet", "Egg"]);
        assert_eq!(filters.to_snapshot().get("itemTypes"), Some("pet,egg"));
    }

    #[test]
    fn active_filter_count_ignores_search_text() {
        let filters = PetFilters {
            name: "fox".to_string(),
            rarity_keys: vec!["Rare".to_string(), "Epic".to_string()],
            passive_states: vec!["sleepy".to_string()],
        };
        assert_eq!(filters.active_filter_count(), 3);
    }
}
