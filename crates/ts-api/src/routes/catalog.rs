//! Read-only JSON API over the catalog snapshot.
//!
//! Mirrors the storage backend's surface so bookmarked API consumers keep
//! working: tier definitions, per-category item lists, untiered counts.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use ts_core::{Category, Item, TaxonomyDoc};

use crate::dto::UntieredCountResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Creates catalog API routes, nested under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tier-definitions", get(tier_definitions))
        .route("/:category/items", get(items))
        .route("/:category/untiered-count", get(untiered_count))
}

fn parse_category(raw: &str) -> Result<Category, ApiError> {
    Category::parse(raw)
        .ok_or_else(|| ApiError::NotFound(format!("unknown category: {raw}")))
}

/// Tier names and definitions, as supplied by the taxonomy source.
async fn tier_definitions(State(state): State<AppState>) -> Json<TaxonomyDoc> {
    Json(state.snapshot.taxonomy.doc().clone())
}

/// Tiered items of one category, in upstream order.
async fn items(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let category = parse_category(&category)?;
    Ok(Json(state.snapshot.catalog.items(category).to_vec()))
}

/// Untiered count for one category.
async fn untiered_count(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<UntieredCountResponse>, ApiError> {
    let category = parse_category(&category)?;
    Ok(Json(UntieredCountResponse {
        category: category.as_str().to_string(),
        untiered: state.snapshot.catalog.untiered_count(category),
        total: state.snapshot.catalog.total_count(category),
    }))
}
