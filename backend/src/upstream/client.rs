//! HTTP client for the upstream wiki API.

use std::collections::BTreeMap;
use std::sync::{LazyLock, RwLock};

use anyhow::Context;

use crate::upstream::paths::{is_permanent_cache_path, map_upstream_path};

pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: String,
}

pub fn upstream_config() -> anyhow::Result<UpstreamConfig> {
    let base_url = std::env::var("WIKI_API_URL").context("WIKI_API_URL is not set")?;
    let api_key = std::env::var("WIKI_API_KEY").context("WIKI_API_KEY is not set")?;
    Ok(UpstreamConfig { base_url, api_key })
}

static PERMANENT_RESPONSE_CACHE: LazyLock<RwLock<BTreeMap<String, String>>> =
    LazyLock::new(|| RwLock::new(BTreeMap::new()));

fn cached_response(cache_key: &str) -> Option<String> {
    // a poisoned cache lock degrades to a miss, never an error
    PERMANENT_RESPONSE_CACHE
        .read()
        .ok()
        .and_then(|cache| cache.get(cache_key).cloned())
}

fn insert_cached_response(cache_key: &str, body: &str) {
    if let Ok(mut cache) = PERMANENT_RESPONSE_CACHE.write() {
        cache.insert(cache_key.to_string(), body.to_string());
    }
}

/// GET an upstream path with typed query pairs. Non-2xx responses become an
/// error carrying the status and body text.
pub async fn upstream_get(incoming_path: &str, query: &[(String, String)]) -> anyhow::Result<String> {
    let config = upstream_config()?;
    let mapped = map_upstream_path(incoming_path);
    let url = format!("{}{}", config.base_url.trim_end_matches('/'), mapped);

    let cacheable = is_permanent_cache_path(incoming_path);
    let cache_key = sha256::digest(format!("{url}?{query:?}"));
    if cacheable {
        if let Some(cached) = cached_response(&cache_key) {
            tracing::debug!("UPSTREAM CACHE HIT: {}", cache_key);
            return Ok(cached);
        }
        tracing::debug!("UPSTREAM CACHE MISS: {}", cache_key);
    }

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .query(query)
        .header("Accept", "application/json")
        .header("X-API-Key", &config.api_key)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("upstream error {}: {}", status, body);
    }
    tracing::debug!("UPSTREAM RESPONSE: {} len = {}", mapped, body.len());

    if cacheable {
        insert_cached_response(&cache_key, &body);
    }
    Ok(body)
}

/// GET an upstream path forwarding an already-encoded query string
/// verbatim, for the raw passthrough route.
pub async fn upstream_get_raw(
    incoming_path: &str,
    raw_query: Option<&str>,
) -> anyhow::Result<String> {
    let config = upstream_config()?;
    let mapped = map_upstream_path(incoming_path);
    let mut url = format!("{}{}", config.base_url.trim_end_matches('/'), mapped);
    if let Some(raw) = raw_query.filter(|raw| !raw.is_empty()) {
        url.push('?');
        url.push_str(raw);
    }

    let cacheable = is_permanent_cache_path(incoming_path);
    let cache_key = sha256::digest(url.clone());
    if cacheable {
        if let Some(cached) = cached_response(&cache_key) {
            tracing::debug!("UPSTREAM CACHE HIT: {}", cache_key);
            return Ok(cached);
        }
        tracing::debug!("UPSTREAM CACHE MISS: {}", cache_key);
    }

    let client = reqwest::Client::new();
    let response = client
        .get(&url)
        .header("Accept", "application/json")
        .header("X-API-Key", &config.api_key)
        .send()
        .await?;
    let status = response.status();
    let body = response.text().await?;
    if status.is_client_error() || status.is_server_error() {
        anyhow::bail!("upstream error {}: {}", status, body);
    }

    if cacheable {
        insert_cached_response(&cache_key, &body);
    }
    Ok(body)
}
