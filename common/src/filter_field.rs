//! Per-field filter configuration tables.

use crate::filter_sync::QuerySnapshot;

/// Internal value of a single filter field. Exactly two field shapes exist
/// on wiki list pages: a free-text search string and a multi-select tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Tags(Vec<String>),
}

impl FieldValue {
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    pub fn empty_tags() -> Self {
        FieldValue::Tags(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::Tags(t) => t.is_empty(),
        }
    }

    /// Total conversion into a search string. A tag set collapses to its
    /// serialized comma-joined form rather than failing.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Tags(t) => t.join(","),
        }
    }

    /// Total conversion into a tag set. Text splits on commas like the
    /// query form; duplicates are dropped either way.
    pub fn into_tags(self) -> Vec<String> {
        match self {
            FieldValue::Tags(t) => dedup_tags(t),
            FieldValue::Text(s) => dedup_tags(
                s.split(',')
                    .filter(|p| !p.is_empty())
                    .map(|p| p.to_string())
                    .collect(),
            ),
        }
    }
}

/// Drops repeated tags, keeping first occurrence order.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(tags.len());
    for tag in tags {
        if !seen.contains(&tag) {
            seen.push(tag);
        }
    }
    seen
}

/// Whether a field participates in the page-reset decision as the search
/// box or as a multi-select filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFieldKind {
    Search,
    MultiSelect,
}

/// One row of a page's filter table: how the field round-trips through the
/// URL query and how the synchronizer reads and writes it on the owning
/// struct. The accessors tie every row to a real struct field, so a filter
/// record cannot silently miss a field.
pub struct FilterFieldConfig<S> {
    pub key: &'static str,
    pub kind: FilterFieldKind,
    pub parse_query_value: fn(&str) -> FieldValue,
    pub serialize_query_value: fn(&FieldValue) -> Option<String>,
    pub values_equal: fn(&FieldValue, &FieldValue) -> bool,
    pub get: fn(&S) -> FieldValue,
    pub set: fn(&mut S, FieldValue),
}

impl<S> FilterFieldConfig<S> {
    pub const fn search(
        key: &'static str,
        get: fn(&S) -> FieldValue,
        set: fn(&mut S, FieldValue),
    ) -> Self {
        Self {
            key,
            kind: FilterFieldKind::Search,
            parse_query_value: parse_text,
            serialize_query_value: serialize_text,
            values_equal: text_equal,
            get,
            set,
        }
    }

    pub const fn multi_select(
        key: &'static str,
        get: fn(&S) -> FieldValue,
        set: fn(&mut S, FieldValue),
    ) -> Self {
        Self {
            key,
            kind: FilterFieldKind::MultiSelect,
            parse_query_value: parse_tags,
            serialize_query_value: serialize_tags,
            values_equal: tags_equal,
            get,
            set,
        }
    }

    /// Multi-select whose URL form is lowercase while the internal form is
    /// title-case (e.g. `pet,egg` <-> `["Pet", "Egg"]`).
    pub const fn multi_select_lowercase(
        key: &'static str,
        get: fn(&S) -> FieldValue,
        set: fn(&mut S, FieldValue),
    ) -> Self {
        Self {
            key,
            kind: FilterFieldKind::MultiSelect,
            parse_query_value: parse_tags_title_case,
            serialize_query_value: serialize_tags_lowercase,
            values_equal: tags_equal,
            get,
            set,
        }
    }
}

fn parse_text(raw: &str) -> FieldValue {
    FieldValue::Text(raw.to_string())
}

fn serialize_text(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Text(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn text_equal(a: &FieldValue, b: &FieldValue) -> bool {
    a == b
}

fn parse_tags(raw: &str) -> FieldValue {
    FieldValue::Tags(dedup_tags(
        raw.split(',')
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
            .collect(),
    ))
}

fn serialize_tags(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Tags(t) if !t.is_empty() => Some(t.join(",")),
        _ => None,
    }
}

/// Tag sets compare without regard to selection order.
fn tags_equal(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        (FieldValue::Tags(a), FieldValue::Tags(b)) => {
            let mut a = a.clone();
            let mut b = b.clone();
            a.sort();
            b.sort();
            a == b
        }
        _ => a == b,
    }
}

fn parse_tags_title_case(raw: &str) -> FieldValue {
    FieldValue::Tags(dedup_tags(
        raw.split(',')
            .filter(|p| !p.is_empty())
            .map(title_case)
            .collect(),
    ))
}

fn serialize_tags_lowercase(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Tags(t) if !t.is_empty() => Some(
            t.iter()
                .map(|tag| tag.to_lowercase())
                .collect::<Vec<_>>()
                .join(","),
        ),
        _ => None,
    }
}

pub fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// A page's filter record. Implementors list every field exactly once in
/// `CONFIG`; the synchronizer drives parsing, serialization and equality
/// exclusively through that table.
pub trait FilterFields: Clone + Default + PartialEq + std::fmt::Debug + 'static {
    const CONFIG: &'static [FilterFieldConfig<Self>];

    fn field(key: &str) -> Option<&'static FilterFieldConfig<Self>> {
        Self::CONFIG.iter().find(|f| f.key == key)
    }

    /// Seeds a record from the URL snapshot. Absent and malformed values
    /// normalize to the field's empty value; parsing never fails.
    fn from_snapshot(snapshot: &QuerySnapshot) -> Self {
        let mut state = Self::default();
        for field in Self::CONFIG {
            let raw = snapshot.get(field.key).unwrap_or("");
            (field.set)(&mut state, (field.parse_query_value)(raw));
        }
        state
    }

    fn to_snapshot(&self) -> QuerySnapshot {
        let mut snapshot = QuerySnapshot::new();
        for field in Self::CONFIG {
            snapshot.set(field.key, (field.serialize_query_value)(&(field.get)(self)));
        }
        snapshot
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_round_trip() {
        for value in ["", "fire", "Mythical Fox"] {
            let parsed = parse_text(value);
            let serialized = serialize_text(&parsed).unwrap_or_default();
            assert!(text_equal(&parsed, &parse_text(&serialized)));
        }
    }

    #[test]
    fn tags_round_trip() {
        for tags in [vec![], vec!["Rare"], vec!["Rare", "Epic", "Legendary"]] {
            let value = FieldValue::Tags(tags.iter().map(|t| t.to_string()).collect());
            let serialized = serialize_tags(&value).unwrap_or_default();
            assert!(tags_equal(&value, &parse_tags(&serialized)));
        }
    }

    #[test]
    fn lowercase_tags_round_trip_normalizes_case() {
        let value = FieldValue::Tags(vec!["Pet".to_string(), "Egg".to_string()]);
        let serialized = serialize_tags_lowercase(&value).unwrap();
        assert_eq!(serialized, "pet,egg");
        assert!(tags_equal(&value, &parse_tags_title_case(&serialized)));
        // arbitrary-cased query input normalizes to the internal form
        assert_eq!(
            parse_tags_title_case("pET,eGG"),
            FieldValue::Tags(vec!["Pet".to_string(), "Egg".to_string()])
        );
    }

    #[test]
    fn empty_and_absent_serialize_the_same() {
        assert_eq!(serialize_text(&FieldValue::empty_text()), None);
        assert_eq!(serialize_tags(&FieldValue::empty_tags()), None);
        assert_eq!(parse_tags(""), FieldValue::empty_tags());
    }

    #[test]
    fn tags_compare_order_insensitively() {
        let a = parse_tags("Rare,Epic");
        let b = parse_tags("Epic,Rare");
        assert!(tags_equal(&a, &b));
        assert!(!tags_equal(&a, &parse_tags("Epic")));
    }

    #[test]
    fn parse_drops_duplicates_and_empty_segments() {
        assert_eq!(
            parse_tags("Rare,,Rare,Epic,"),
            FieldValue::Tags(vec!["Rare".to_string(), "Epic".to_string()])
        );
    }

    #[test]
    fn total_conversions_never_lose_the_other_shape() {
        assert_eq!(FieldValue::Text("a,b".to_string()).into_tags(), vec!["a", "b"]);
        assert_eq!(
            FieldValue::Tags(vec!["a".to_string(), "b".to_string()]).into_text(),
            "a,b"
        );
    }
}
