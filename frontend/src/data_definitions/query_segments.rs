//! URL query segment types for the wiki list pages.
//!
//! The router needs each page query to round-trip through the query string:
//! `Display` writes `name=fox&rarityKeys=Common,Rare&page=3` (defaults
//! omitted) and `FromQuery` parses it back. Parsing is total; malformed
//! values fall back to the page defaults.

use std::fmt::Display;

use dioxus::prelude::*;
use dioxus::router::routable::FromQuery;
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

use common::list_query::{EggListQuery, PetListQuery};

/// Characters that must be escaped inside a query key or value.
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_ENCODE_SET).to_string()
}

fn decode_component(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}

fn parse_query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut parts = pair.splitn(2, '=');
            let key = decode_component(parts.next().unwrap_or(""));
            let value = decode_component(parts.next().unwrap_or(""));
            (key, value)
        })
        .collect()
}

fn write_query_pairs(
    f: &mut std::fmt::Formatter<'_>,
    pairs: &[(&'static str, String)],
) -> std::fmt::Result {
    for (index, (key, value)) in pairs.iter().enumerate() {
        if index > 0 {
            write!(f, "&")?;
        }
        write!(f, "{}={}", encode_component(key), encode_component(value))?;
    }
    Ok(())
}


#[derive(Debug, Clone, Default, PartialEq)]
pub struct PetQuery(pub PetListQuery);

impl From<PetListQuery> for PetQuery {
    fn from(query: PetListQuery) -> Self {
        PetQuery(query)
    }
}

impl Display for PetQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_query_pairs(f, &self.0.url_pairs())
    }
}

impl FromQuery for PetQuery {
    fn from_query(query: &str) -> Self {
        PetQuery(PetListQuery::from_query_pairs(&parse_query_pairs(query)))
    }
}


#[derive(Debug, Clone, Default, PartialEq)]
pub struct EggQuery(pub EggListQuery);

impl From<EggListQuery> for EggQuery {
    fn from(query: EggListQuery) -> Self {
        EggQuery(query)
    }
}

impl Display for EggQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_query_pairs(f, &self.0.url_pairs())
    }
}

impl FromQuery for EggQuery {
    fn from_query(query: &str) -> Self {
        EggQuery(EggListQuery::from_query_pairs(&parse_query_pairs(query)))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::wiki_filters::PetFilters;

    #[test]
    fn query_string_round_trips() {
        let query = PetQuery(PetListQuery {
            page: 3,
            filters: PetFilters {
                name: "mythical fox".to_string(),
                rarity_keys: vec!["Common".to_string(), "Rare".to_string()],
                ..Default::default()
            },
            ..Default::default()
        });
        let rendered = query.to_string();
        assert_eq!(rendered, "name=mythical%20fox&rarityKeys=Common,Rare&page=3");
        assert_eq!(PetQuery::from_query(&rendered), query);
    }

    #[test]
    fn defaults_render_to_an_empty_query_string() {
        assert_eq!(PetQuery::default().to_string(), "");
        assert_eq!(EggQuery::default().to_string(), "");
    }

    #[test]
    fn malformed_queries_parse_to_defaults() {
        assert_eq!(PetQuery::from_query(""), PetQuery::default());
        assert_eq!(
            PetQuery::from_query("page=banana&sort=&&&rarityKeys="),
            PetQuery::default()
        );
    }

    #[test]
    fn plus_and_percent_escapes_decode() {
        let parsed = PetQuery::from_query("name=mythical+fox");
        assert_eq!(parsed.0.filters.name, "mythical fox");
        let parsed = PetQuery::from_query("name=mythical%20fox");
        assert_eq!(parsed.0.filters.name, "mythical fox");
    }
}
