//! Data-provider interface.
//!
//! The engine consumes three async sources: per-category item lists,
//! per-category untiered counts, and the taxonomy document. Failures are
//! reported through `ProviderError`; the startup sequence degrades each
//! failed source to an empty dataset rather than aborting.

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::{Category, Item};
use crate::taxonomy::TaxonomyDoc;

/// Errors a data provider can report.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Async source of catalog data.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetches the tiered items of one category, in upstream order.
    async fn fetch_items(&self, category: Category) -> ProviderResult<Vec<Item>>;

    /// Fetches the number of still-untiered items of one category.
    async fn fetch_untiered_count(&self, category: Category) -> ProviderResult<u64>;

    /// Fetches the taxonomy document with tier names and definitions.
    async fn fetch_taxonomy(&self) -> ProviderResult<TaxonomyDoc>;
}
