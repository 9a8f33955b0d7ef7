//! # ts-api
//!
//! Web server for TierScope. Serves the catalog as server-rendered HTML
//! (full page plus an HTMX partial for the item list), a small JSON API
//! mirroring the storage backend's surface, and health endpoints.

pub mod dto;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;
pub mod web;

pub use error::ApiError;
pub use server::{ApiServer, ApiServerConfig};
pub use state::AppState;
