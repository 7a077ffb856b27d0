//! Client API calls for wiki endpoints.

use common::egg::{EggListPage, EggPageData};
use common::list_query::{EggListQuery, PetListQuery};
use common::pet::{PetListPage, PetPageData};
use dioxus::prelude::*;




#[server]
pub async fn find_pets(query: PetListQuery) -> Result<PetListPage, ServerFnError> {
    let x = backend::api::find_all_pets(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn pet_page_data(query: PetListQuery) -> Result<PetPageData, ServerFnError> {
    let x = backend::api::pet_page_data(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn find_eggs(query: EggListQuery) -> Result<EggListPage, ServerFnError> {
    let x = backend::api::find_all_eggs(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn egg_page_data(query: EggListQuery) -> Result<EggPageData, ServerFnError> {
    let x = backend::api::egg_page_data(query).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
