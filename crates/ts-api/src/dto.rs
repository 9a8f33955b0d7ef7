//! JSON response types for the API surface.

use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded".
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Seconds since server start.
    pub uptime_seconds: u64,
    /// Catalog snapshot health.
    pub catalog: CatalogHealth,
}

/// Per-category item counts plus snapshot readiness.
#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogHealth {
    pub ready: bool,
    pub azure_items: usize,
    pub entra_items: usize,
    pub msgraph_items: usize,
}

/// Untiered-count response for one category.
#[derive(Debug, Serialize, Deserialize)]
pub struct UntieredCountResponse {
    pub category: String,
    pub untiered: u64,
    pub total: u64,
}
