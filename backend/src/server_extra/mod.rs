//! Extra axum routes mounted beside the app router.

pub mod wiki_proxy;
