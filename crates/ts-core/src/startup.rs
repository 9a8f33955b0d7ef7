//! Ordered startup sequence.
//!
//! Initialization is an explicit state machine rather than an implicit
//! script: taxonomy first, then per-category untiered counts, then
//! per-category items, each awaited sequentially. A failed source degrades
//! to its empty value with a warning; only a catalog with no items at all
//! ends in `DataUnavailable`, which the web layer must surface explicitly
//! instead of rendering a blank page.

use tracing::{info, warn};

use crate::catalog::{Catalog, Category, CategoryData};
use crate::provider::CatalogProvider;
use crate::taxonomy::{TaxonomyDoc, TierTaxonomy};

/// Stages of the initialization sequence, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStage {
    /// Configuration loaded, nothing fetched yet.
    Config,
    /// Fetching the taxonomy document.
    Taxonomy,
    /// Fetching per-category untiered counts.
    Counts,
    /// Fetching per-category item lists.
    Items,
    /// Terminal: at least one category has data; rendering may start.
    Ready,
    /// Terminal: every category came back empty.
    DataUnavailable,
}

impl InitStage {
    /// True for the two terminal stages.
    pub fn is_terminal(&self) -> bool {
        matches!(self, InitStage::Ready | InitStage::DataUnavailable)
    }
}

/// The outcome of the startup sequence: an immutable snapshot the web
/// layer serves from.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    pub taxonomy: TierTaxonomy,
    pub stage: InitStage,
}

impl LoadedCatalog {
    pub fn is_ready(&self) -> bool {
        self.stage == InitStage::Ready
    }
}

/// Runs the full startup sequence against a provider.
pub async fn load_catalog(provider: &dyn CatalogProvider) -> LoadedCatalog {
    let mut stage = InitStage::Taxonomy;
    info!(?stage, "loading catalog");

    let taxonomy_doc = match provider.fetch_taxonomy().await {
        Ok(doc) => doc,
        Err(err) => {
            warn!(error = %err, "taxonomy fetch failed, tier names and definitions degrade to empty");
            TaxonomyDoc::default()
        }
    };

    stage = InitStage::Counts;
    info!(?stage, "loading untiered counts");
    let mut counts = [0u64; 3];
    for category in Category::ALL {
        counts[category.index()] = match provider.fetch_untiered_count(category).await {
            Ok(count) => count,
            Err(err) => {
                warn!(%category, error = %err, "untiered count fetch failed, using zero");
                0
            }
        };
    }

    stage = InitStage::Items;
    info!(?stage, "loading items");
    let mut catalog = Catalog::new();
    for category in Category::ALL {
        let items = match provider.fetch_items(category).await {
            Ok(items) => items,
            Err(err) => {
                warn!(%category, error = %err, "item fetch failed, category degrades to empty");
                Vec::new()
            }
        };
        info!(%category, count = items.len(), "category loaded");
        catalog.set(
            category,
            CategoryData {
                items,
                untiered_count: counts[category.index()],
            },
        );
    }

    stage = if catalog.is_empty() {
        warn!("no category returned any items");
        InitStage::DataUnavailable
    } else {
        InitStage::Ready
    };
    info!(?stage, "startup sequence finished");

    LoadedCatalog {
        catalog,
        taxonomy: TierTaxonomy::new(taxonomy_doc),
        stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::provider::{ProviderError, ProviderResult};
    use async_trait::async_trait;

    struct ScriptedProvider {
        items_fail: bool,
        taxonomy_fails: bool,
        empty: bool,
    }

    #[async_trait]
    impl CatalogProvider for ScriptedProvider {
        async fn fetch_items(&self, category: Category) -> ProviderResult<Vec<Item>> {
            if self.items_fail {
                return Err(ProviderError::Request("connection refused".into()));
            }
            if self.empty {
                return Ok(Vec::new());
            }
            let item: Item = serde_json::from_str(&format!(
                r#"{{"name": "{} role", "tier": 0}}"#,
                category.as_str()
            ))
            .unwrap();
            Ok(vec![item])
        }

        async fn fetch_untiered_count(&self, _category: Category) -> ProviderResult<u64> {
            Ok(2)
        }

        async fn fetch_taxonomy(&self) -> ProviderResult<TaxonomyDoc> {
            if self.taxonomy_fails {
                return Err(ProviderError::InvalidResponse("not json".into()));
            }
            Ok(TaxonomyDoc::default())
        }
    }

    #[tokio::test]
    async fn healthy_provider_reaches_ready() {
        let provider = ScriptedProvider {
            items_fail: false,
            taxonomy_fails: false,
            empty: false,
        };
        let loaded = load_catalog(&provider).await;
        assert_eq!(loaded.stage, InitStage::Ready);
        assert!(loaded.is_ready());
        assert_eq!(loaded.catalog.items(Category::Azure).len(), 1);
        assert_eq!(loaded.catalog.untiered_count(Category::Entra), 2);
    }

    #[tokio::test]
    async fn taxonomy_failure_degrades_to_empty_strings() {
        let provider = ScriptedProvider {
            items_fail: false,
            taxonomy_fails: true,
            empty: false,
        };
        let loaded = load_catalog(&provider).await;
        assert_eq!(loaded.stage, InitStage::Ready);
        assert_eq!(loaded.taxonomy.name_for(Category::Azure, Some(0)), "");
    }

    #[tokio::test]
    async fn all_sources_failing_is_data_unavailable() {
        let provider = ScriptedProvider {
            items_fail: true,
            taxonomy_fails: false,
            empty: false,
        };
        let loaded = load_catalog(&provider).await;
        assert_eq!(loaded.stage, InitStage::DataUnavailable);
        assert!(!loaded.is_ready());
    }

    #[tokio::test]
    async fn empty_datasets_are_data_unavailable() {
        let provider = ScriptedProvider {
            items_fail: false,
            taxonomy_fails: false,
            empty: true,
        };
        let loaded = load_catalog(&provider).await;
        assert_eq!(loaded.stage, InitStage::DataUnavailable);
    }

    #[test]
    fn terminal_stages() {
        assert!(InitStage::Ready.is_terminal());
        assert!(InitStage::DataUnavailable.is_terminal());
        assert!(!InitStage::Items.is_terminal());
        assert!(!InitStage::Config.is_terminal());
    }
}
