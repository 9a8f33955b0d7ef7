//! # ts-provider
//!
//! Catalog data providers for TierScope: a `reqwest`-backed client for the
//! backend JSON API, and an in-memory provider for tests and offline use.
//! Both implement `ts_core::CatalogProvider`.

pub mod backend;
pub mod memory;

pub use backend::{BackendConfig, BackendProvider};
pub use memory::StaticProvider;
