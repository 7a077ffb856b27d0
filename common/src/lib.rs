//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod api_envelope;
pub mod egg;
pub mod fetch_coordinator;
pub mod filter_field;
pub mod filter_sync;
pub mod list_query;
pub mod pet;
pub mod rarity;
pub mod wiki_const;
pub mod wiki_filters;
