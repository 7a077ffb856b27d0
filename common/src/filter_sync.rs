//! Debounced filter synchronization between UI state and the URL query.

use std::collections::BTreeMap;

use crate::filter_field::{FieldValue, FilterFieldKind, FilterFields};
use crate::wiki_const::DEFAULT_DEBOUNCE_MS;

/// The URL-owned representation of the filter fields: one serialized string
/// per present field. An absent key and an empty value are the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySnapshot {
    values: BTreeMap<String, String>,
}

impl QuerySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut snapshot = Self::new();
        for (key, value) in pairs {
            snapshot.set(key, Some(value.to_string()));
        }
        snapshot
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    /// `None` and the empty string both clear the parameter.
    pub fn set(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(v) if !v.is_empty() => {
                self.values.insert(key.to_string(), v);
            }
            _ => {
                self.values.remove(key);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Handle for one arming of the debounce timer. The host sleeps for
/// `delay_ms` and then redeems the ticket with `commit_debounce`; a ticket
/// whose generation is no longer current is a stale timer firing and is
/// ignored, which is what restarts the delay on every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket {
    pub generation: u64,
    pub delay_ms: u32,
}

/// A staged batch of URL parameter updates, applied by the host as one
/// atomic write to the URL store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryWrite {
    /// Field key -> new serialized value (`None` clears the parameter).
    pub updates: Vec<(&'static str, Option<String>)>,
    /// True when the write changed the search field or a multi-select
    /// field, in which case pagination must return to page 1.
    pub reset_page: bool,
}

/// Keeps three representations of the filter fields consistent without
/// feedback loops: `live` is what the inputs show (updated synchronously on
/// every keystroke), `debounced` is the delayed copy that drives fetches and
/// URL writes, and the URL itself is only touched through [`QueryWrite`]s.
///
/// `prev_external` records the parsed URL state as of the last
/// reconciliation pass (and as of our own writes), so that a snapshot change
/// is only imported back into `live` when it is a genuine external
/// navigation rather than an echo of a value this instance just pushed out.
/// The in-flight flag is per instance; two synchronizers on one page cannot
/// interfere.
#[derive(Debug, Clone)]
pub struct FilterSynchronizer<S: FilterFields> {
    live: S,
    debounced: S,
    prev_external: S,
    generation: u64,
    internal_update_in_flight: bool,
    delay_ms: u32,
}

impl<S: FilterFields> FilterSynchronizer<S> {
    pub fn from_snapshot(snapshot: &QuerySnapshot) -> Self {
        Self::with_delay(snapshot, DEFAULT_DEBOUNCE_MS)
    }

    pub fn with_delay(snapshot: &QuerySnapshot, delay_ms: u32) -> Self {
        let live = S::from_snapshot(snapshot);
        Self {
            debounced: live.clone(),
            prev_external: live.clone(),
            live,
            generation: 0,
            internal_update_in_flight: false,
            delay_ms,
        }
    }

    /// Immediate values for the inputs and chips.
    pub fn live(&self) -> &S {
        &self.live
    }

    /// Delayed values driving fetches and URL writes.
    pub fn debounced(&self) -> &S {
        &self.debounced
    }

    pub fn internal_update_in_flight(&self) -> bool {
        self.internal_update_in_flight
    }

    fn arm_debounce(&mut self) -> DebounceTicket {
        self.generation += 1;
        DebounceTicket {
            generation: self.generation,
            delay_ms: self.delay_ms,
        }
    }

    /// Overwrites one live field synchronously. An unknown key is ignored.
    pub fn update_field(&mut self, key: &str, value: FieldValue) -> DebounceTicket {
        if let Some(field) = S::field(key) {
            (field.set)(&mut self.live, value);
        }
        self.arm_debounce()
    }

    /// Merges several live fields atomically (presets, "clear all").
    pub fn update_fields(
        &mut self,
        updates: impl IntoIterator<Item = (&'static str, FieldValue)>,
    ) -> DebounceTicket {
        for (key, value) in updates {
            if let Some(field) = S::field(key) {
                (field.set)(&mut self.live, value);
            }
        }
        self.arm_debounce()
    }

    /// Replaces the whole live record (typed update path for page handlers).
    pub fn set_live(&mut self, next: S) -> DebounceTicket {
        self.live = next;
        self.arm_debounce()
    }

    /// Redeems a debounce ticket. On the current generation, replaces the
    /// debounced snapshot with a deep copy of `live` and stages updates
    /// against the URL snapshot; stale generations are timer firings that a
    /// later mutation has already superseded.
    ///
    /// Returns a write only when something actually differs from the URL,
    /// so retyping the same value (or reordering a tag selection) produces
    /// no history entry. When a write is returned the in-flight flag is set;
    /// the host must apply the write and clear the flag on the next tick.
    pub fn commit_debounce(
        &mut self,
        ticket: DebounceTicket,
        snapshot: &QuerySnapshot,
    ) -> Option<QueryWrite> {
        if ticket.generation != self.generation {
            return None;
        }
        self.debounced = self.live.clone();

        let mut write = QueryWrite::default();
        for field in S::CONFIG {
            let serialized = (field.serialize_query_value)(&(field.get)(&self.debounced));
            let current = snapshot.get(field.key).filter(|v| !v.is_empty());
            if serialized.as_deref() != current {
                write.reset_page |=
                    matches!(field.kind, FilterFieldKind::Search | FilterFieldKind::MultiSelect);
                write.updates.push((field.key, serialized));
            }
        }
        if write.updates.is_empty() {
            return None;
        }

        // The URL will now hold the debounced values; remember that so the
        // echo of this write is not imported back.
        self.prev_external = self.debounced.clone();
        self.internal_update_in_flight = true;
        Some(write)
    }

    pub fn clear_internal_update_flag(&mut self) {
        self.internal_update_in_flight = false;
    }

    /// Handles a snapshot reported by the URL store (browser back/forward,
    /// links). Skipped entirely while our own write is in flight. A field is
    /// imported into `live` only when all three hold: the debounced value no
    /// longer matches the URL, the debounced value did match the URL on the
    /// previous pass (a genuine external change just occurred), and the live
    /// value does not already match. Returns a ticket when anything was
    /// imported so the debounced copy catches up through the normal path.
    pub fn reconcile_from_snapshot(&mut self, snapshot: &QuerySnapshot) -> Option<DebounceTicket> {
        if self.internal_update_in_flight {
            return None;
        }
        let mut changed = false;
        for field in S::CONFIG {
            let external = (field.parse_query_value)(snapshot.get(field.key).unwrap_or(""));
            let debounced_matches = (field.values_equal)(&(field.get)(&self.debounced), &external);
            let was_in_sync = (field.values_equal)(
                &(field.get)(&self.debounced),
                &(field.get)(&self.prev_external),
            );
            let live_matches = (field.values_equal)(&(field.get)(&self.live), &external);
            if !debounced_matches && was_in_sync && !live_matches {
                (field.set)(&mut self.live, external.clone());
                changed = true;
            }
            (field.set)(&mut self.prev_external, external);
        }
        changed.then(|| self.arm_debounce())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_field::FieldValue;
    use crate::wiki_filters::{FIELD_NAME, FIELD_RARITY_KEYS, PetFilters};

    fn tags(values: &[&str]) -> FieldValue {
        FieldValue::Tags(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn seeds_from_snapshot_with_malformed_values_normalized() {
        let snapshot = QuerySnapshot::from_pairs([("rarityKeys", "Common,,Rare,Common")]);
        let sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);
        assert_eq!(sync.live().rarity_keys, vec!["Common", "Rare"]);
        assert_eq!(sync.live().name, "");
        assert_eq!(sync.live(), sync.debounced());
    }

    #[test]
    fn burst_of_updates_commits_once_with_last_value() {
        let snapshot = QuerySnapshot::new();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);

        let t1 = sync.update_field(FIELD_NAME, FieldValue::Text("f".into()));
        let t2 = sync.update_field(FIELD_NAME, FieldValue::Text("fi".into()));
        let t3 = sync.update_field(FIELD_NAME, FieldValue::Text("fire".into()));

        // the first two timers fire stale and change nothing
        assert_eq!(sync.commit_debounce(t1, &snapshot), None);
        assert_eq!(sync.commit_debounce(t2, &snapshot), None);
        assert_eq!(sync.debounced().name, "");

        let write = sync.commit_debounce(t3, &snapshot).expect("staged write");
        assert_eq!(sync.debounced().name, "fire");
        assert_eq!(write.updates, vec![(FIELD_NAME, Some("fire".to_string()))]);
        assert!(write.reset_page);
    }

    #[test]
    fn type_then_clear_within_delay_stages_nothing() {
        let snapshot = QuerySnapshot::new();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);

        let _stale = sync.update_field(FIELD_NAME, FieldValue::Text("Fire".into()));
        let ticket = sync.update_field(FIELD_NAME, FieldValue::Text("".into()));

        // the URL never held a name, so clearing back to empty is a no-op
        assert_eq!(sync.commit_debounce(ticket, &snapshot), None);
        assert_eq!(sync.debounced().name, "");
        assert!(!sync.internal_update_in_flight());
    }

    #[test]
    fn reordered_tags_serialize_identically_and_stage_nothing() {
        let snapshot = QuerySnapshot::from_pairs([("rarityKeys", "Rare,Epic")]);
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);

        let ticket = sync.update_field(FIELD_RARITY_KEYS, tags(&["Epic", "Rare"]));
        assert_eq!(sync.commit_debounce(ticket, &snapshot), None);
    }

    #[test]
    fn changed_tags_stage_a_page_reset() {
        let snapshot = QuerySnapshot::new();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);

        let ticket = sync.update_field(FIELD_RARITY_KEYS, tags(&["Rare", "Epic"]));
        let write = sync.commit_debounce(ticket, &snapshot).expect("staged write");
        assert!(write.reset_page);
        assert_eq!(
            write.updates,
            vec![(FIELD_RARITY_KEYS, Some("Rare,Epic".to_string()))]
        );
    }

    #[test]
    fn clearing_a_filter_stages_a_parameter_removal() {
        let snapshot = QuerySnapshot::from_pairs([("rarityKeys", "Rare")]);
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);

        let ticket = sync.update_field(FIELD_RARITY_KEYS, FieldValue::empty_tags());
        let write = sync.commit_debounce(ticket, &snapshot).expect("staged write");
        assert_eq!(write.updates, vec![(FIELD_RARITY_KEYS, None)]);
    }

    #[test]
    fn external_snapshot_change_imports_into_live_state() {
        let snapshot = QuerySnapshot::new();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&snapshot);

        // browser back/forward lands on a snapshot with a rarity filter
        let external = QuerySnapshot::from_pairs([("rarityKeys", "Common,Rare")]);
        let ticket = sync.reconcile_from_snapshot(&external).expect("imported");
        assert_eq!(sync.live().rarity_keys, vec!["Common", "Rare"]);

        // the debounced copy catches up and finds nothing left to write
        assert_eq!(sync.commit_debounce(ticket, &external), None);
        assert_eq!(sync.debounced().rarity_keys, vec!["Common", "Rare"]);
    }

    #[test]
    fn own_write_echo_is_not_reimported() {
        let url = QuerySnapshot::new();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&url);

        let ticket = sync.update_field(FIELD_NAME, FieldValue::Text("fox".into()));
        let write = sync.commit_debounce(ticket, &url).expect("staged write");
        assert!(sync.internal_update_in_flight());

        // the router applies the write and reports the new snapshot while
        // the flag is still set: skipped entirely
        let mut url_after = url.clone();
        for (key, value) in &write.updates {
            url_after.set(key, value.clone());
        }
        assert_eq!(sync.reconcile_from_snapshot(&url_after), None);

        // after the next-tick clear the echo still changes nothing
        sync.clear_internal_update_flag();
        assert_eq!(sync.reconcile_from_snapshot(&url_after), None);
        assert_eq!(sync.live().name, "fox");
    }

    #[test]
    fn back_button_after_settled_write_restores_previous_state() {
        let url = QuerySnapshot::new();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&url);

        let ticket = sync.update_field(FIELD_NAME, FieldValue::Text("fox".into()));
        let write = sync.commit_debounce(ticket, &url).expect("staged write");
        let mut url_after = url.clone();
        for (key, value) in &write.updates {
            url_after.set(key, value.clone());
        }
        sync.clear_internal_update_flag();
        assert_eq!(sync.reconcile_from_snapshot(&url_after), None);

        // back to the original snapshot: a genuine external change
        let ticket = sync.reconcile_from_snapshot(&url).expect("imported");
        assert_eq!(sync.live().name, "");
        assert_eq!(sync.commit_debounce(ticket, &url), None);
    }

    #[test]
    fn external_import_does_not_clobber_unrelated_fields_mid_typing() {
        let url = QuerySnapshot::new();
        let mut sync = FilterSynchronizer::<PetFilters>::from_snapshot(&url);

        // typing in flight, not yet committed
        let _typing = sync.update_field(FIELD_NAME, FieldValue::Text("fo".into()));

        // an external navigation changes only the rarity filter
        let external = QuerySnapshot::from_pairs([("rarityKeys", "Rare")]);
        let ticket = sync.reconcile_from_snapshot(&external).expect("imported");
        assert_eq!(sync.live().rarity_keys, vec!["Rare"]);
        assert_eq!(sync.live().name, "fo");

        // the catch-up commit then stages the in-flight name as well
        let write = sync.commit_debounce(ticket, &external).expect("staged write");
        assert_eq!(write.updates, vec![(FIELD_NAME, Some("fo".to_string()))]);
    }

    #[test]
    fn snapshot_treats_empty_and_absent_alike() {
        let mut snapshot = QuerySnapshot::new();
        snapshot.set("name", Some("".to_string()));
        assert_eq!(snapshot.get("name"), None);
        snapshot.set("name", Some("fox".to_string()));
        snapshot.set("name", None);
        assert!(snapshot.is_empty());
    }
}
