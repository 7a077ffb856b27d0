//! Raw passthrough route for the upstream wiki API.

use axum::body::Body;
use axum::extract::{Path, RawQuery};
use axum::response::{IntoResponse, Response};
use reqwest::StatusCode;
use tracing::info;

use crate::upstream::client::upstream_get_raw;

async fn _wiki_proxy(path: String, raw_query: Option<String>) -> anyhow::Result<impl IntoResponse> {
    info!("Proxying wiki request: {}", path);

    let body = upstream_get_raw(&path, raw_query.as_deref()).await?;
    let headers = [("Content-Type", "application/json; charset=utf-8")];
    Ok((headers, Body::from(body)).into_response())
}

pub async fn wiki_proxy(Path(path): Path<String>, RawQuery(raw_query): RawQuery) -> Response {
    match _wiki_proxy(path, raw_query).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("wiki_proxy: request failed: {:#?}", e);
            return (StatusCode::BAD_GATEWAY, Body::from(e.to_string())).into_response();
        }
    }
}
