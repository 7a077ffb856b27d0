//! Eggs list page: same synchronization shape as pets, with the item-type
//! filter in place of passive states.

use dioxus::prelude::*;

use common::egg::{EggListPage, EggPageData};
use common::fetch_coordinator::{FetchCoordinator, FetchPlan};
use common::filter_field::FieldValue;
use common::filter_field::FilterFields;
use common::filter_sync::QueryWrite;
use common::list_query::EggListQuery;
use common::wiki_filters::{EggFilters, FIELD_ITEM_TYPES, FIELD_NAME, FIELD_RARITY_KEYS};

use crate::api::wiki_api::{egg_page_data, find_eggs};
use crate::components::suspend_boundary::SuspendWrapper;
use crate::components::wiki_components::filter_bar::WikiFiltersBar;
use crate::components::wiki_components::filters_sheet::{
    FilterCheckboxGroup, FilterOption, FiltersSheet,
};
use crate::components::wiki_components::item_card::ItemCard;
use crate::components::wiki_components::items_grid::WikiItemsGrid;
use crate::components::wiki_components::pagination::{Pagination, scroll_to_top};
use crate::data_definitions::filter_controller::use_debounced_filters;
use crate::data_definitions::query_segments::EggQuery;
use crate::routes::Route;


/// Eggs page
#[component]
pub fn EggsPage(query: EggQuery) -> Element {
    rsx! {
        Title { "Garden Wiki: Eggs" }
        SuspendWrapper {
            EggsPageRoot { query: query.0.clone() }
        }
    }
}

/// Hatch time as shown on the cards.
fn hatch_time_label(hatch_time: Option<f64>) -> String {
    match hatch_time {
        None => String::new(),
        Some(seconds) if seconds <= 0.0 => "Hatches instantly".to_string(),
        Some(seconds) if seconds < 3600.0 => {
            format!("Hatches in {:.0} min", (seconds / 60.0).ceil())
        }
        Some(seconds) => format!("Hatches in {:.1} h", seconds / 3600.0),
    }
}

#[component]
fn EggsPageRoot(query: ReadSignal<EggListQuery>) -> Element {
    let initial_query = use_hook(|| query.peek().clone());
    let initial_data = use_server_future({
        let initial_query = initial_query.clone();
        move || {
            let q = initial_query.clone();
            async move { egg_page_data(q).await }
        }
    })?;

    let initial = use_memo(move || match initial_data.read().as_ref() {
        Some(Ok(data)) => data.clone(),
        _ => EggPageData::default(),
    });
    use_effect(move || {
        if let Some(Err(e)) = initial_data.read().as_ref() {
            dioxus::logger::tracing::error!("Failed to fetch eggs page data: {e:?}");
        }
    });

    let url_snapshot = use_memo(move || query.read().filters.to_snapshot());
    let on_query_write = use_callback(move |write: QueryWrite| {
        let next = query.peek().apply_filter_write(&write);
        navigator().push(Route::EggsPage { query: next.into() });
    });
    let filters = use_debounced_filters::<EggFilters>(url_snapshot, on_query_write);

    let live = use_memo(move || filters.live());
    let active_filters_count = use_memo(move || live.read().active_filter_count());

    let query_key = use_memo(move || {
        let debounced = filters.debounced();
        query.read().query_key(&debounced)
    });
    let mut coordinator = use_signal({
        let initial_query = initial_query.clone();
        move || FetchCoordinator::new(initial_query.query_key(&initial_query.filters))
    });
    let list_resource = use_resource(move || {
        let key = query_key.read().clone();
        async move {
            match coordinator.write().plan(&key) {
                FetchPlan::Fetch => {
                    let fetch_query = query.peek().with_filters(filters.peek_debounced());
                    Some(find_eggs(fetch_query).await)
                }
                FetchPlan::ReuseInitial | FetchPlan::ReuseCurrent => None,
            }
        }
    });

    let mut latest_page = use_signal(|| None::<EggListPage>);
    use_effect(move || {
        if let Some(Some(result)) = list_resource.read().as_ref() {
            match result {
                Ok(page) => latest_page.set(Some(page.clone())),
                Err(e) => {
                    dioxus::logger::tracing::error!("Failed to fetch eggs: {e:?}");
                }
            }
        }
    });
    let shown_page = use_memo(move || {
        latest_page
            .read()
            .clone()
            .unwrap_or_else(|| initial.read().page.clone())
    });
    let is_fetching = use_memo(move || list_resource.read().is_none());

    let current_page = use_memo(move || query.read().page);
    let total_pages = use_memo(move || {
        shown_page
            .read()
            .pagination
            .map(|meta| meta.total_pages)
            .unwrap_or(1)
    });
    let on_page_change = use_callback(move |page: u32| {
        navigator().push(Route::EggsPage {
            query: query.peek().with_page(page).into(),
        });
    });
    let mut previous_page = use_signal(|| query.peek().page);
    use_effect(move || {
        let page = query.read().page;
        if *previous_page.peek() != page {
            previous_page.set(page);
            scroll_to_top();
        }
    });

    let on_search_change = use_callback(move |value: String| {
        filters.update_field(FIELD_NAME, FieldValue::Text(value));
    });
    let on_search_clear = use_callback(move |_: ()| {
        filters.update_field(FIELD_NAME, FieldValue::empty_text());
    });
    let on_rarity_change = use_callback(move |keys: Vec<String>| {
        filters.update_field(FIELD_RARITY_KEYS, FieldValue::Tags(keys));
    });
    let on_item_type_change = use_callback(move |keys: Vec<String>| {
        filters.update_field(FIELD_ITEM_TYPES, FieldValue::Tags(keys));
    });
    let on_clear_all = use_callback(move |_: ()| {
        filters.update_fields(vec![
            (FIELD_RARITY_KEYS, FieldValue::empty_tags()),
            (FIELD_ITEM_TYPES, FieldValue::empty_tags()),
        ]);
    });

    let mut is_filters_open = use_signal(|| false);
    let rarity_options = use_memo(move || {
        initial
            .read()
            .rarities
            .iter()
            .map(|rarity| FilterOption {
                key: rarity.key.clone(),
                label: rarity.name.clone(),
            })
            .collect::<Vec<_>>()
    });
    let item_type_options = use_memo(move || {
        initial
            .read()
            .item_types
            .iter()
            .map(|key| FilterOption::from_key(key))
            .collect::<Vec<_>>()
    });
    let selected_rarities = use_memo(move || live.read().rarity_keys.clone());
    let selected_item_types = use_memo(move || live.read().item_types.clone());
    let search_value = use_memo(move || live.read().name.clone());
    let eggs = use_memo(move || shown_page.read().eggs.clone());
    let is_empty = use_memo(move || eggs.read().is_empty());

    rsx! {
        div {
            id: "x-eggs-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                padding: 28px 32px;
                min-height: 100%;
            ",

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 16px;
                ",
                h1 {
                    style: "font-size: 34px; font-weight: 500; margin: 0; flex-grow: 1;",
                    "Eggs"
                }
                WikiFiltersBar {
                    category_name: "eggs".to_string(),
                    search_value: search_value(),
                    on_search_change,
                    on_search_clear,
                    active_filters_count: active_filters_count(),
                    on_open_filters: move |_| is_filters_open.set(true),
                }
            }

            WikiItemsGrid {
                is_loading: is_fetching(),
                is_empty: is_empty(),
                for egg in eggs() {
                    ItemCard {
                        key: "{egg.id}",
                        name: egg.name.clone(),
                        icon: egg.icon.clone(),
                        subtitle: hatch_time_label(egg.hatch_time),
                        rarity: egg.rarity.clone(),
                    }
                }
            }

            if total_pages() > 1 {
                Pagination {
                    current_page: current_page(),
                    total_pages: total_pages(),
                    on_page_change,
                }
            }

            FiltersSheet {
                is_open: is_filters_open(),
                on_close: move |_| is_filters_open.set(false),
                on_clear_all,
                FilterCheckboxGroup {
                    title: "Rarity".to_string(),
                    options: rarity_options(),
                    selected: selected_rarities(),
                    on_change: on_rarity_change,
                }
                FilterCheckboxGroup {
                    title: "Contains".to_string(),
                    options: item_type_options(),
                    selected: selected_item_types(),
                    on_change: on_item_type_change,
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::hatch_time_label;

    #[test]
    fn hatch_time_labels() {
        assert_eq!(hatch_time_label(None), "");
        assert_eq!(hatch_time_label(Some(0.0)), "Hatches instantly");
        assert_eq!(hatch_time_label(Some(90.0)), "Hatches in 2 min");
        assert_eq!(hatch_time_label(Some(7200.0)), "Hatches in 2.0 h");
    }
}
