//! Health check endpoints.

use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use ts_core::Category;

use crate::dto::{CatalogHealth, HealthResponse};
use crate::state::AppState;

/// Start time for uptime calculation.
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Initialize the start time.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/live", get(liveness_check))
}

/// Health check endpoint. Degraded when the catalog snapshot is empty.
async fn health_check(
    State(state): State<AppState>,
) -> (axum::http::StatusCode, Json<HealthResponse>) {
    let ready = state.snapshot.is_ready();
    let uptime = START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0);

    let status = if ready { "healthy" } else { "degraded" };
    // The server still renders an explicit unavailable page when degraded,
    // so it stays 200 for liveness purposes and reports the stage here.
    (
        axum::http::StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: uptime,
            catalog: CatalogHealth {
                ready,
                azure_items: state.snapshot.catalog.items(Category::Azure).len(),
                entra_items: state.snapshot.catalog.items(Category::Entra).len(),
                msgraph_items: state.snapshot.catalog.items(Category::MsGraph).len(),
            },
        }),
    )
}

/// Liveness probe.
async fn liveness_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use ts_core::load_catalog;
    use ts_provider::StaticProvider;

    async fn get_health(provider: StaticProvider) -> (StatusCode, serde_json::Value) {
        let state = AppState::new(load_catalog(&provider).await);
        let router = crate::routes::create_router(state);
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn ready_snapshot_reports_healthy() {
        let items: Vec<ts_core::Item> =
            serde_json::from_str(r#"[{"name": "Owner", "tier": 0}]"#).unwrap();
        let provider = StaticProvider::new().with_items(Category::Azure, items);
        let (status, body) = get_health(provider).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["catalog"]["ready"], true);
        assert_eq!(body["catalog"]["azure_items"], 1);
        assert_eq!(body["catalog"]["entra_items"], 0);
    }

    #[tokio::test]
    async fn unready_snapshot_reports_degraded_but_stays_200() {
        let (status, body) = get_health(StaticProvider::new().failing()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["catalog"]["ready"], false);
    }

    #[tokio::test]
    async fn liveness_returns_ok() {
        let state = AppState::new(load_catalog(&StaticProvider::new().failing()).await);
        let router = crate::routes::create_router(state);
        let response = router
            .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"OK");
    }
}
