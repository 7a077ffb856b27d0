pub mod filter_controller;
pub mod query_segments;
