//! JSON API routes.

pub mod catalog;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Creates the JSON API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", catalog::routes())
        .merge(health::routes())
        .with_state(state)
}
