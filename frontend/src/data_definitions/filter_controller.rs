//! Dioxus host for the debounced filter synchronizer.
//!
//! The synchronizer itself is a plain state machine (`common::filter_sync`);
//! this module gives it the two suspension points it needs on the web: the
//! debounce timer for each mutation ticket, and the next-tick deferral that
//! clears the self-write guard after the router has applied a staged write.
//! Timer tasks are spawned in the component's scope, so unmounting cancels
//! any pending commit.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use common::filter_field::{FieldValue, FilterFields};
use common::filter_sync::{DebounceTicket, FilterSynchronizer, QuerySnapshot, QueryWrite};

/// Page-side handle: immediate reads for the inputs and chips, mutations
/// that arm the debounce timer, and automatic reconciliation against the
/// URL snapshot the page derives from its route props.
pub struct DebouncedFilters<S: FilterFields> {
    sync: Signal<FilterSynchronizer<S>>,
    url_snapshot: Memo<QuerySnapshot>,
    on_query_write: Callback<QueryWrite>,
}

impl<S: FilterFields> Clone for DebouncedFilters<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: FilterFields> Copy for DebouncedFilters<S> {}

pub fn use_debounced_filters<S: FilterFields>(
    url_snapshot: Memo<QuerySnapshot>,
    on_query_write: Callback<QueryWrite>,
) -> DebouncedFilters<S> {
    let mut sync = use_signal(|| FilterSynchronizer::<S>::from_snapshot(&url_snapshot.peek()));

    // every reported snapshot goes through the reconciliation pass; genuine
    // external changes (back/forward) import and arm a catch-up debounce,
    // echoes of our own writes do not
    use_effect(move || {
        let snapshot = url_snapshot.read().clone();
        let ticket = sync.write().reconcile_from_snapshot(&snapshot);
        if let Some(ticket) = ticket {
            schedule_commit(sync, url_snapshot, on_query_write, ticket);
        }
    });

    DebouncedFilters {
        sync,
        url_snapshot,
        on_query_write,
    }
}

/// Sleeps out one debounce ticket, then commits it. Stale tickets fall out
/// inside `commit_debounce`, so every mutation restarts the quiet period.
fn schedule_commit<S: FilterFields>(
    mut sync: Signal<FilterSynchronizer<S>>,
    url_snapshot: Memo<QuerySnapshot>,
    on_query_write: Callback<QueryWrite>,
    ticket: DebounceTicket,
) {
    spawn(async move {
        TimeoutFuture::new(ticket.delay_ms).await;
        let write = sync.write().commit_debounce(ticket, &url_snapshot.peek());
        if let Some(write) = write {
            on_query_write.call(write);
            // one tick later the router has applied the write and the
            // resulting snapshot echo has been skipped; reopen imports
            TimeoutFuture::new(0).await;
            sync.write().clear_internal_update_flag();
        }
    });
}

impl<S: FilterFields> DebouncedFilters<S> {
    /// Live values, for zero-latency input and chip rendering.
    pub fn live(&self) -> S {
        self.sync.read().live().clone()
    }

    /// Debounced values, for cache keys and fetches.
    pub fn debounced(&self) -> S {
        self.sync.read().debounced().clone()
    }

    /// Debounced values without subscribing the caller to updates.
    pub fn peek_debounced(&self) -> S {
        self.sync.peek().debounced().clone()
    }

    pub fn update_field(&self, key: &'static str, value: FieldValue) {
        let mut sync = self.sync;
        let ticket = sync.write().update_field(key, value);
        schedule_commit(self.sync, self.url_snapshot, self.on_query_write, ticket);
    }

    pub fn update_fields(&self, updates: Vec<(&'static str, FieldValue)>) {
        let mut sync = self.sync;
        let ticket = sync.write().update_fields(updates);
        schedule_commit(self.sync, self.url_snapshot, self.on_query_write, ticket);
    }
}
