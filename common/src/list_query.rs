//! List queries for the wiki pages: pagination, sorting and filters.

use serde::{Deserialize, Serialize};

use crate::fetch_coordinator::QueryKey;
use crate::filter_field::FilterFields;
use crate::filter_sync::{QuerySnapshot, QueryWrite};
use crate::wiki_const::{EGGS_PAGE_LIMIT, MAX_PAGE_LIMIT, PETS_PAGE_LIMIT};
use crate::wiki_filters::{EggFilters, PetFilters};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PetSortField {
    Key,
    Name,
    RarityLevel,
    CreatedAt,
    UpdatedAt,
    LastSyncedAt,
}

impl PetSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            PetSortField::Key => "key",
            PetSortField::Name => "name",
            PetSortField::RarityLevel => "rarityLevel",
            PetSortField::CreatedAt => "createdAt",
            PetSortField::UpdatedAt => "updatedAt",
            PetSortField::LastSyncedAt => "lastSyncedAt",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "key" => Some(PetSortField::Key),
            "name" => Some(PetSortField::Name),
            "rarityLevel" => Some(PetSortField::RarityLevel),
            "createdAt" => Some(PetSortField::CreatedAt),
            "updatedAt" => Some(PetSortField::UpdatedAt),
            "lastSyncedAt" => Some(PetSortField::LastSyncedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EggSortField {
    Key,
    Name,
    HatchTime,
    ItemType,
    RarityLevel,
    CreatedAt,
    UpdatedAt,
    LastSyncedAt,
}

impl EggSortField {
    pub fn as_str(self) -> &'static str {
        match self {
            EggSortField::Key => "key",
            EggSortField::Name => "name",
            EggSortField::HatchTime => "hatchTime",
            EggSortField::ItemType => "itemType",
            EggSortField::RarityLevel => "rarityLevel",
            EggSortField::CreatedAt => "createdAt",
            EggSortField::UpdatedAt => "updatedAt",
            EggSortField::LastSyncedAt => "lastSyncedAt",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "key" => Some(EggSortField::Key),
            "name" => Some(EggSortField::Name),
            "hatchTime" => Some(EggSortField::HatchTime),
            "itemType" => Some(EggSortField::ItemType),
            "rarityLevel" => Some(EggSortField::RarityLevel),
            "createdAt" => Some(EggSortField::CreatedAt),
            "updatedAt" => Some(EggSortField::UpdatedAt),
            "lastSyncedAt" => Some(EggSortField::LastSyncedAt),
            _ => None,
        }
    }
}


fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_page(pairs: &[(String, String)]) -> u32 {
    lookup(pairs, "page")
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

fn parse_limit(pairs: &[(String, String)], default: u32) -> u32 {
    lookup(pairs, "limit")
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|limit| (1..=MAX_PAGE_LIMIT).contains(limit))
        .unwrap_or(default)
}


/// Full query for the pets list. `page` and `limit` are 1-based and
/// positive; parsing is total and falls back to defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetListQuery {
    pub page: u32,
    pub limit: u32,
    pub filters: PetFilters,
    pub sort: PetSortField,
    pub order: SortOrder,
}

impl Default for PetListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PETS_PAGE_LIMIT,
            filters: PetFilters::default(),
            sort: PetSortField::LastSyncedAt,
            order: SortOrder::Desc,
        }
    }
}

impl PetListQuery {
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let snapshot = QuerySnapshot::from_pairs(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        Self {
            page: parse_page(pairs),
            limit: parse_limit(pairs, PETS_PAGE_LIMIT),
            filters: PetFilters::from_snapshot(&snapshot),
            sort: lookup(pairs, "sort")
                .and_then(PetSortField::parse)
                .unwrap_or(PetSortField::LastSyncedAt),
            order: lookup(pairs, "order")
                .and_then(SortOrder::parse)
                .unwrap_or(SortOrder::Desc),
        }
    }

    /// Pairs for the shareable URL; fields at their default are omitted.
    pub fn url_pairs(&self) -> Vec<(&'static str, String)> {
        let defaults = Self::default();
        let mut pairs = Vec::new();
        let snapshot = self.filters.to_snapshot();
        for field in PetFilters::CONFIG {
            if let Some(value) = snapshot.get(field.key) {
                pairs.push((field.key, value.to_string()));
            }
        }
        if self.page != defaults.page {
            pairs.push(("page", self.page.to_string()));
        }
        if self.limit != defaults.limit {
            pairs.push(("limit", self.limit.to_string()));
        }
        if self.sort != defaults.sort {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }
        if self.order != defaults.order {
            pairs.push(("order", self.order.as_str().to_string()));
        }
        pairs
    }

    /// Pairs for the upstream API; pagination and sorting are always sent,
    /// filters only when active.
    pub fn upstream_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let snapshot = self.filters.to_snapshot();
        for field in PetFilters::CONFIG {
            if let Some(value) = snapshot.get(field.key) {
                pairs.push((field.key, value.to_string()));
            }
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        pairs
    }

    /// Cache key for one page of results, built from the debounced filters
    /// rather than the live ones.
    pub fn query_key(&self, debounced: &PetFilters) -> QueryKey {
        QueryKey::new("pets")
            .part(self.page)
            .part(self.limit)
            .part(&debounced.name)
            .tag_part(&debounced.rarity_keys)
            .tag_part(&debounced.passive_states)
            .part(self.sort.as_str())
            .part(self.order.as_str())
    }

    /// Applies a staged filter write, resetting to page 1 when the write
    /// asks for it and the query is not already there.
    pub fn apply_filter_write(&self, write: &QueryWrite) -> Self {
        let mut snapshot = self.filters.to_snapshot();
        for (key, value) in &write.updates {
            snapshot.set(key, value.clone());
        }
        let mut next = self.clone();
        next.filters = PetFilters::from_snapshot(&snapshot);
        if write.reset_page && next.page != 1 {
            next.page = 1;
        }
        next
    }

    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.page = page.max(1);
        next
    }

    pub fn with_filters(&self, filters: PetFilters) -> Self {
        let mut next = self.clone();
        next.filters = filters;
        next
    }
}


/// Full query for the eggs list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EggListQuery {
    pub page: u32,
    pub limit: u32,
    pub filters: EggFilters,
    pub sort: EggSortField,
    pub order: SortOrder,
}

impl Default for EggListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: EGGS_PAGE_LIMIT,
            filters: EggFilters::default(),
            sort: EggSortField::RarityLevel,
            order: SortOrder::Asc,
        }
    }
}

impl EggListQuery {
    pub fn from_query_pairs(pairs: &[(String, String)]) -> Self {
        let snapshot = QuerySnapshot::from_pairs(
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        );
        Self {
            page: parse_page(pairs),
            limit: parse_limit(pairs, EGGS_PAGE_LIMIT),
            filters: EggFilters::from_snapshot(&snapshot),
            sort: lookup(pairs, "sort")
                .and_then(EggSortField::parse)
                .unwrap_or(EggSortField::RarityLevel),
            order: lookup(pairs, "order")
                .and_then(SortOrder::parse)
                .unwrap_or(SortOrder::Asc),
        }
    }

    pub fn url_pairs(&self) -> Vec<(&'static str, String)> {
        let defaults = Self::default();
        let mut pairs = Vec::new();
        let snapshot = self.filters.to_snapshot();
        for field in EggFilters::CONFIG {
            if let Some(value) = snapshot.get(field.key) {
                pairs.push((field.key, value.to_string()));
            }
        }
        if self.page != defaults.page {
            pairs.push(("page", self.page.to_string()));
        }
        if self.limit != defaults.limit {
            pairs.push(("limit", self.limit.to_string()));
        }
        if self.sort != defaults.sort {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }
        if self.order != defaults.order {
            pairs.push(("order", self.order.as_str().to_string()));
        }
        pairs
    }

    pub fn upstream_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let snapshot = self.filters.to_snapshot();
        for field in EggFilters::CONFIG {
            if let Some(value) = snapshot.get(field.key) {
                pairs.push((field.key, value.to_string()));
            }
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs.push(("order", self.order.as_str().to_string()));
        pairs
    }

    pub fn query_key(&self, debounced: &EggFilters) -> QueryKey {
        QueryKey::new("eggs")
            .part(self.page)
            .part(self.limit)
            .part(&debounced.name)
            .tag_part(&debounced.rarity_keys)
            .tag_part(&debounced.item_types)
            .part(self.sort.as_str())
            .part(self.order.as_str())
    }

    pub fn apply_filter_write(&self, write: &QueryWrite) -> Self {
        let mut snapshot = self.filters.to_snapshot();
        for (key, value) in &write.updates {
            snapshot.set(key, value.clone());
        }
        let mut next = self.clone();
        next.filters = EggFilters::from_snapshot(&snapshot);
        if write.reset_page && next.page != 1 {
            next.page = 1;
        }
        next
    }

    pub fn with_page(&self, page: u32) -> Self {
        let mut next = self.clone();
        next.page = page.max(1);
        next
    }

    pub fn with_filters(&self, filters: EggFilters) -> Self {
        let mut next = self.clone();
        next.filters = filters;
        next
    }
}


/// One slot in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u32),
    Ellipsis,
}

/// Windowed page numbers: first and last page always visible, an ellipsis
/// on each side of the current window once the strip would overflow.
pub fn pagination_window(current_page: u32, total_pages: u32) -> Vec<PageEntry> {
    use PageEntry::{Ellipsis, Page};

    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= 7 {
        return (1..=total_pages).map(Page).collect();
    }

    let mut pages = vec![Page(1)];
    if current_page <= 3 {
        pages.extend((2..=5).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    } else if current_page >= total_pages - 2 {
        pages.push(Ellipsis);
        pages.extend((total_pages - 4..=total_pages).map(Page));
    } else {
        pages.push(Ellipsis);
        pages.extend((current_page - 1..=current_page + 1).map(Page));
        pages.push(Ellipsis);
        pages.push(Page(total_pages));
    }
    pages
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_sync::FilterSynchronizer;
    use crate::filter_field::FieldValue;
    use crate::wiki_filters::FIELD_RARITY_KEYS;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn deep_link_seeds_filters_and_pagination() {
        let query = PetListQuery::from_query_pairs(&pairs(&[
            ("rarityKeys", "Common,Rare"),
            ("page", "3"),
        ]));
        assert_eq!(query.filters.rarity_keys, vec!["Common", "Rare"]);
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort, PetSortField::LastSyncedAt);
        assert_eq!(query.order, SortOrder::Desc);

        // the mount key equals the key of the server-rendered data, so the
        // coordinator suppresses the duplicate fetch after hydration
        let key = query.query_key(&query.filters);
        let mut coordinator = crate::fetch_coordinator::FetchCoordinator::new(key.clone());
        assert_eq!(
            coordinator.plan(&key),
            crate::fetch_coordinator::FetchPlan::ReuseInitial
        );
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let query = PetListQuery::from_query_pairs(&pairs(&[
            ("page", "zero"),
            ("limit", "9000"),
            ("sort", "banana"),
            ("order", "sideways"),
        ]));
        assert_eq!(query, PetListQuery::default());
    }

    #[test]
    fn url_pairs_omit_defaults_and_round_trip() {
        let query = PetListQuery {
            page: 2,
            filters: PetFilters {
                name: "fox".to_string(),
                rarity_keys: vec!["Rare".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let url = query.url_pairs();
        assert_eq!(
            url,
            vec![
                ("name", "fox".to_string()),
                ("rarityKeys", "Rare".to_string()),
                ("page", "2".to_string()),
            ]
        );
        let reparsed = PetListQuery::from_query_pairs(
            &url.iter().map(|(k, v)| (k.to_string(), v.clone())).collect::<Vec<_>>(),
        );
        assert_eq!(reparsed, query);

        assert!(PetListQuery::default().url_pairs().is_empty());
        assert!(EggListQuery::default().url_pairs().is_empty());
    }

    #[test]
    fn upstream_pairs_always_carry_pagination_and_sorting() {
        let query = EggListQuery::default();
        assert_eq!(
            query.upstream_pairs(),
            vec![
                ("page", "1".to_string()),
                ("limit", "50".to_string()),
                ("sort", "rarityLevel".to_string()),
                ("order", "asc".to_string()),
            ]
        );
    }

    #[test]
    fn egg_url_pairs_keep_item_types_lowercase() {
        let query = EggListQuery {
            filters: EggFilters {
                item_types: vec!["Pet".to_string(), "Egg".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            query.url_pairs(),
            vec![("itemTypes", "pet,egg".to_string())]
        );
    }

    #[test]
    fn staged_filter_write_resets_pagination() {
        let query = PetListQuery::from_query_pairs(&pairs(&[("page", "3")]));
        let snapshot = query.filters.to_snapshot();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);

        let ticket = sync.update_field(
            FIELD_RARITY_KEYS,
            FieldValue::Tags(vec!["Epic".to_string()]),
        );
        let write = sync.commit_debounce(ticket, &snapshot).expect("staged write");
        let next = query.apply_filter_write(&write);
        assert_eq!(next.filters.rarity_keys, vec!["Epic"]);
        assert_eq!(next.page, 1);
    }

    #[test]
    fn page_only_navigation_keeps_filters_and_never_resets() {
        let query = PetListQuery::from_query_pairs(&pairs(&[
            ("rarityKeys", "Rare"),
            ("page", "2"),
        ]));
        let next = query.with_page(5);
        assert_eq!(next.page, 5);
        assert_eq!(next.filters, query.filters);
        // a page-only route change is invisible to the filter fields, so a
        // later reconcile pass imports nothing
        let mut sync =
            FilterSynchronizer::<PetFilters>::from_snapshot(&query.filters.to_snapshot());
        assert_eq!(
            sync.reconcile_from_snapshot(&next.filters.to_snapshot()),
            None
        );
    }

    #[test]
    fn query_key_uses_debounced_filters_not_live_ones() {
        let query = PetListQuery::default();
        let debounced = PetFilters {
            name: "fox".to_string(),
            ..Default::default()
        };
        assert_eq!(
            query.query_key(&debounced).to_string(),
            "pets:1:20:fox:::lastSyncedAt:desc"
        );
    }

    #[test]
    fn pagination_window_shapes() {
        use PageEntry::{Ellipsis, Page};

        assert!(pagination_window(1, 0).is_empty());
        assert_eq!(
            pagination_window(1, 3),
            vec![Page(1), Page(2), Page(3)]
        );
        assert_eq!(
            pagination_window(2, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_window(6, 10),
            vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(10)]
        );
        assert_eq!(
            pagination_window(9, 10),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]
        );
    }
}
