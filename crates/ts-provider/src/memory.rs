//! In-memory provider for tests and offline use.

use std::collections::HashMap;

use async_trait::async_trait;

use ts_core::provider::{CatalogProvider, ProviderError, ProviderResult};
use ts_core::{Category, Item, TaxonomyDoc};

/// Serves catalog data from memory. Sources can be marked as failing to
/// exercise degradation paths.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    items: HashMap<Category, Vec<Item>>,
    untiered_counts: HashMap<Category, u64>,
    taxonomy: TaxonomyDoc,
    fail_all: bool,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(mut self, category: Category, items: Vec<Item>) -> Self {
        self.items.insert(category, items);
        self
    }

    pub fn with_untiered_count(mut self, category: Category, count: u64) -> Self {
        self.untiered_counts.insert(category, count);
        self
    }

    pub fn with_taxonomy(mut self, taxonomy: TaxonomyDoc) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Makes every fetch fail, for degradation tests.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    fn check(&self) -> ProviderResult<()> {
        if self.fail_all {
            Err(ProviderError::Request("static provider set to fail".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl CatalogProvider for StaticProvider {
    async fn fetch_items(&self, category: Category) -> ProviderResult<Vec<Item>> {
        self.check()?;
        Ok(self.items.get(&category).cloned().unwrap_or_default())
    }

    async fn fetch_untiered_count(&self, category: Category) -> ProviderResult<u64> {
        self.check()?;
        Ok(self.untiered_counts.get(&category).copied().unwrap_or(0))
    }

    async fn fetch_taxonomy(&self) -> ProviderResult<TaxonomyDoc> {
        self.check()?;
        Ok(self.taxonomy.clone())
    }
}
