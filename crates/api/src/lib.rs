//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes under `/api`
//! - The error-to-response mapping
//! - Shared query extractors

pub mod error;
pub mod query;
pub mod routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use webadmin_db::Repositories;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Every in-memory collection.
    pub repos: Repositories,
    /// Take-limit for the audit log listing when the caller gives none.
    pub audit_log_default_limit: usize,
}

impl AppState {
    /// Creates state over the given repositories.
    #[must_use]
    pub const fn new(repos: Repositories, audit_log_default_limit: usize) -> Self {
        Self {
            repos,
            audit_log_default_limit,
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
