//! Liveness probe with a snapshot of the in-memory collections.

use std::collections::BTreeMap;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::AppState;

const SERVICE_NAME: &str = "webadmin";

/// Body of `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always `healthy` while the process serves requests.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Stored records per collection, inactive ones included.
    pub records: BTreeMap<&'static str, usize>,
}

/// GET `/health` - Report liveness and collection sizes.
async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        records: state.repos.record_counts().await,
    })
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
