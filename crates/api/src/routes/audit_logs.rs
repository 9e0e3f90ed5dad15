//! Audit trail routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use tracing::{debug, info};
use webadmin_core::domain::{AuditLog, AuditSearch};
use webadmin_core::filter::{DateRange, active_filter};
use webadmin_core::stats::AuditStatistics;

use super::location;
use crate::{AppState, error::ApiError, query::parse_optional_date};

/// Creates the audit log routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auditlogs", get(list_logs).post(create_log))
        .route("/auditlogs/search", get(search_logs))
        .route("/auditlogs/statistics", get(statistics))
        .route("/auditlogs/user/{user_id}", get(list_by_user))
        .route(
            "/auditlogs/entity/{entity_type}/{entity_id}",
            get(list_for_entity),
        )
        .route("/auditlogs/{id}", get(get_log))
}

/// `?limit=` for the listing.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    /// Maximum number of logs returned.
    pub limit: Option<usize>,
}

/// Query parameters for searching the trail.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Lower timestamp bound (inclusive).
    pub start_date: Option<String>,
    /// Upper timestamp bound (inclusive).
    pub end_date: Option<String>,
    /// Action, compared case-insensitively.
    pub action: Option<String>,
    /// Entity type, compared case-insensitively.
    pub entity_type: Option<String>,
}

impl SearchQuery {
    fn into_search(self) -> Result<AuditSearch, ApiError> {
        Ok(AuditSearch {
            range: DateRange::new(
                parse_optional_date(self.start_date.as_deref())?,
                parse_optional_date(self.end_date.as_deref())?,
            ),
            action: active_filter(self.action.as_deref()).map(ToString::to_string),
            entity_type: active_filter(self.entity_type.as_deref()).map(ToString::to_string),
        })
    }
}

/// GET `/auditlogs` - Newest logs, up to `limit`.
async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> Json<Vec<AuditLog>> {
    let limit = query.limit.unwrap_or(state.audit_log_default_limit);
    debug!(limit, "Listing audit logs");
    Json(state.repos.audit_logs.list(limit).await)
}

/// GET `/auditlogs/{id}` - Get one log.
async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AuditLog>, ApiError> {
    Ok(Json(state.repos.audit_logs.find(id).await?))
}

/// GET `/auditlogs/user/{user_id}` - Logs written by a user.
async fn list_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Vec<AuditLog>> {
    debug!(user_id = %user_id, "Listing audit logs by user");
    Json(state.repos.audit_logs.list_by_user(&user_id).await)
}

/// GET `/auditlogs/entity/{entity_type}/{entity_id}` - Logs about one entity.
async fn list_for_entity(
    State(state): State<AppState>,
    Path((entity_type, entity_id)): Path<(String, String)>,
) -> Json<Vec<AuditLog>> {
    debug!(entity_type = %entity_type, entity_id = %entity_id, "Listing audit logs by entity");
    Json(
        state
            .repos
            .audit_logs
            .list_for_entity(&entity_type, &entity_id)
            .await,
    )
}

/// GET `/auditlogs/search` - Logs matching every given filter.
async fn search_logs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<AuditLog>>, ApiError> {
    let search = query.into_search()?;
    debug!(?search, "Searching audit logs");
    Ok(Json(state.repos.audit_logs.search(&search).await))
}

/// POST `/auditlogs` - Append a log.
async fn create_log(
    State(state): State<AppState>,
    Json(payload): Json<AuditLog>,
) -> Result<impl IntoResponse, ApiError> {
    let log = state.repos.audit_logs.append(payload).await?;
    info!(
        log_id = log.log_id,
        action = %log.action,
        entity_type = %log.entity_type,
        entity_id = %log.entity_id,
        "Audit log recorded"
    );
    Ok((
        StatusCode::CREATED,
        location("auditlogs", &log.log_id)?,
        Json(log),
    ))
}

/// GET `/auditlogs/statistics` - Counts over the whole trail.
async fn statistics(State(state): State<AppState>) -> Json<AuditStatistics> {
    Json(state.repos.audit_logs.statistics().await)
}
