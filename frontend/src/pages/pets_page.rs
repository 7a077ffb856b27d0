//! Pets list page: debounced filters, URL sync and paginated fetching.

use dioxus::prelude::*;

use common::fetch_coordinator::{FetchCoordinator, FetchPlan};
use common::filter_field::FieldValue;
use common::filter_sync::QueryWrite;
use common::list_query::PetListQuery;
use common::pet::{PetListPage, PetPageData};
use common::wiki_filters::{FIELD_NAME, FIELD_PASSIVE_STATES, FIELD_RARITY_KEYS, PetFilters};
use common::filter_field::FilterFields;

use crate::api::wiki_api::{find_pets, pet_page_data};
use crate::components::suspend_boundary::SuspendWrapper;
use crate::components::wiki_components::filter_bar::WikiFiltersBar;
use crate::components::wiki_components::filters_sheet::{
    FilterCheckboxGroup, FilterOption, FiltersSheet,
};
use crate::components::wiki_components::item_card::ItemCard;
use crate::components::wiki_components::items_grid::WikiItemsGrid;
use crate::components::wiki_components::pagination::{Pagination, scroll_to_top};
use crate::data_definitions::filter_controller::use_debounced_filters;
use crate::data_definitions::query_segments::PetQuery;
use crate::routes::Route;


/// Pets page
#[component]
pub fn PetsPage(query: PetQuery) -> Element {
    rsx! {
        Title { "Garden Wiki: Pets" }
        SuspendWrapper {
            PetsPageRoot { query: query.0.clone() }
        }
    }
}

#[component]
fn PetsPageRoot(query: ReadSignal<PetListQuery>) -> Element {
    // one server-side fetch per mount; hydration reuses its payload instead
    // of firing the same request again from the client
    let initial_query = use_hook(|| query.peek().clone());
    let initial_data = use_server_future({
        let initial_query = initial_query.clone();
        move || {
            let q = initial_query.clone();
            async move { pet_page_data(q).await }
        }
    })?;

    let initial = use_memo(move || match initial_data.read().as_ref() {
        Some(Ok(data)) => data.clone(),
        // a failed first load degrades to an empty page, never an error page
        _ => PetPageData::default(),
    });
    use_effect(move || {
        if let Some(Err(e)) = initial_data.read().as_ref() {
            dioxus::logger::tracing::error!("Failed to fetch pets page data: {e:?}");
        }
    });

    // filter synchronizer wired to the route's query parameters
    let url_snapshot = use_memo(move || query.read().filters.to_snapshot());
    let on_query_write = use_callback(move |write: QueryWrite| {
        let next = query.peek().apply_filter_write(&write);
        navigator().push(Route::PetsPage { query: next.into() });
    });
    let filters = use_debounced_filters::<PetFilters>(url_snapshot, on_query_write);

    let live = use_memo(move || filters.live());
    let active_filters_count = use_memo(move || live.read().active_filter_count());

    // fetch key from the debounced filters; the memo dedups by value so
    // identity churn never reaches the coordinator
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
                    Some(find_pets(fetch_query).await)
                }
                FetchPlan::ReuseInitial | FetchPlan::ReuseCurrent => None,
            }
        }
    });

    // last good page stays visible when a fetch fails or is pending
    let mut latest_page = use_signal(|| None::<PetListPage>);
    use_effect(move || {
        if let Some(Some(result)) = list_resource.read().as_ref() {
            match result {
                Ok(page) => latest_page.set(Some(page.clone())),
                Err(e) => {
                    dioxus::logger::tracing::error!("Failed to fetch pets: {e:?}");
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

    // pagination from the shown page's metadata
    let current_page = use_memo(move || query.read().page);
    let total_pages = use_memo(move || {
        shown_page
            .read()
            .pagination
            .map(|meta| meta.total_pages)
            .unwrap_or(1)
    });
    let on_page_change = use_callback(move |page: u32| {
        navigator().push(Route::PetsPage {
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

    // filter handlers
    let on_search_change = use_callback(move |value: String| {
        filters.update_field(FIELD_NAME, FieldValue::Text(value));
    });
    let on_search_clear = use_callback(move |_: ()| {
        filters.update_field(FIELD_NAME, FieldValue::empty_text());
    });
    let on_rarity_change = use_callback(move |keys: Vec<String>| {
        filters.update_field(FIELD_RARITY_KEYS, FieldValue::Tags(keys));
    });
    let on_passive_change = use_callback(move |keys: Vec<String>| {
        filters.update_field(FIELD_PASSIVE_STATES, FieldValue::Tags(keys));
    });
    let on_clear_all = use_callback(move |_: ()| {
        filters.update_fields(vec![
            (FIELD_RARITY_KEYS, FieldValue::empty_tags()),
            (FIELD_PASSIVE_STATES, FieldValue::empty_tags()),
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
    let passive_options = use_memo(move || {
        initial
            .read()
            .passive_state_keys
            .iter()
            .map(|key| FilterOption::from_key(key))
            .collect::<Vec<_>>()
    });
    let selected_rarities = use_memo(move || live.read().rarity_keys.clone());
    let selected_passives = use_memo(move || live.read().passive_states.clone());
    let search_value = use_memo(move || live.read().name.clone());
    let pets = use_memo(move || shown_page.read().pets.clone());
    let is_empty = use_memo(move || pets.read().is_empty());

    rsx! {
        div {
            id: "x-pets-page",
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
                    "Pets"
                }
                WikiFiltersBar {
                    category_name: "pets".to_string(),
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
                for pet in pets() {
                    ItemCard {
                        key: "{pet.id}",
                        name: pet.name.clone(),
                        icon: pet.icon.clone(),
                        subtitle: pet.description.clone(),
                        rarity: pet.rarity.clone(),
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
                    title: "Passive State".to_string(),
                    options: passive_options(),
                    selected: selected_passives(),
                    on_change: on_passive_change,
                }
            }
        }
    }
}
