//! Backend JSON API provider.
//!
//! Talks to the storage backend that serves the tiered catalogs:
//!
//! - `/api/tier-definitions`
//! - `/api/azure/tiered-roles`, `/api/azure/untiered-roles`
//! - `/api/entra/tiered-roles`, `/api/entra/untiered-roles`
//! - `/api/msgraph/tiered-permissions`, `/api/msgraph/untiered-permissions`
//!
//! The untiered endpoints return full item lists; the engine only needs
//! their count, so this provider reduces them to a length.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use ts_core::provider::{CatalogProvider, ProviderError, ProviderResult};
use ts_core::{Category, Item, TaxonomyDoc};

/// Connection settings for the backend API.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL, e.g. `http://localhost:5000`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// `CatalogProvider` over the backend's HTTP surface.
pub struct BackendProvider {
    client: Client,
    base_url: String,
}

impl BackendProvider {
    pub fn new(config: BackendConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(4)
            .build()
            .map_err(|e| ProviderError::Config(e.to_string()))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn tiered_path(category: Category) -> &'static str {
        match category {
            Category::Azure => "/api/azure/tiered-roles",
            Category::Entra => "/api/entra/tiered-roles",
            Category::MsGraph => "/api/msgraph/tiered-permissions",
        }
    }

    fn untiered_path(category: Category) -> &'static str {
        match category {
            Category::Azure => "/api/azure/untiered-roles",
            Category::Entra => "/api/entra/untiered-roles",
            Category::MsGraph => "/api/msgraph/untiered-permissions",
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ProviderResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        let response = response
            .error_for_status()
            .map_err(|e| ProviderError::Request(e.to_string()))?;
        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl CatalogProvider for BackendProvider {
    async fn fetch_items(&self, category: Category) -> ProviderResult<Vec<Item>> {
        self.get_json(Self::tiered_path(category)).await
    }

    async fn fetch_untiered_count(&self, category: Category) -> ProviderResult<u64> {
        let items: Vec<serde_json::Value> = self.get_json(Self::untiered_path(category)).await?;
        Ok(items.len() as u64)
    }

    async fn fetch_taxonomy(&self) -> ProviderResult<TaxonomyDoc> {
        self.get_json("/api/tier-definitions").await
    }
}
