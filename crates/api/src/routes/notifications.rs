//! Notification routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use serde::Deserialize;
use tracing::{debug, info};
use webadmin_core::domain::Notification;
use webadmin_core::filter::active_filter;
use webadmin_core::stats::NotificationStatistics;

use super::location;
use crate::{AppState, error::ApiError, query::ActiveOnlyQuery};

/// Creates the notification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(list_notifications).post(create_notification),
        )
        .route("/notifications/statistics", get(statistics))
        .route("/notifications/user/{username}", get(list_for_user))
        .route("/notifications/unread/{username}", get(list_unread_for_user))
        .route(
            "/notifications/{id}",
            get(get_notification).delete(deactivate_notification),
        )
        .route("/notifications/{id}/read", put(mark_read))
}

/// `?userRole=` filter for the per-user listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleQuery {
    /// Role of the requesting user.
    pub user_role: Option<String>,
}

/// GET `/notifications` - List notifications, newest first. Active only by default.
async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<ActiveOnlyQuery>,
) -> Json<Vec<Notification>> {
    let active_only = query.active_only.unwrap_or(true);
    debug!(active_only, "Listing notifications");
    Json(state.repos.notifications.list(active_only).await)
}

/// GET `/notifications/user/{username}` - Notifications visible to a user.
async fn list_for_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<UserRoleQuery>,
) -> Json<Vec<Notification>> {
    let role = active_filter(query.user_role.as_deref());
    debug!(username = %username, role = ?role, "Listing user notifications");
    Json(
        state
            .repos
            .notifications
            .list_for_user(&username, role)
            .await,
    )
}

/// GET `/notifications/unread/{username}` - Unread notifications visible to a user.
async fn list_unread_for_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<UserRoleQuery>,
) -> Json<Vec<Notification>> {
    let role = active_filter(query.user_role.as_deref());
    debug!(username = %username, role = ?role, "Listing unread user notifications");
    Json(
        state
            .repos
            .notifications
            .list_unread_for_user(&username, role)
            .await,
    )
}

/// GET `/notifications/{id}` - Get one notification.
async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Notification>, ApiError> {
    Ok(Json(state.repos.notifications.find(id).await?))
}

/// POST `/notifications` - Publish a notification.
async fn create_notification(
    State(state): State<AppState>,
    Json(payload): Json<Notification>,
) -> Result<impl IntoResponse, ApiError> {
    let notification = state.repos.notifications.create(payload).await?;
    info!(
        notification_id = notification.notification_id,
        target_user_role = %notification.target_user_role,
        priority = %notification.priority,
        "Notification created"
    );
    Ok((
        StatusCode::CREATED,
        location("notifications", &notification.notification_id)?,
        Json(notification),
    ))
}

/// PUT `/notifications/{id}/read` - Mark read.
async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Notification>, ApiError> {
    let notification = state.repos.notifications.mark_read(id).await?;
    info!(notification_id = id, "Notification marked read");
    Ok(Json(notification))
}

/// DELETE `/notifications/{id}` - Deactivate a notification.
async fn deactivate_notification(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.notifications.deactivate(id).await?;
    info!(notification_id = id, "Notification deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// GET `/notifications/statistics` - Counts over active notifications.
async fn statistics(State(state): State<AppState>) -> Json<NotificationStatistics> {
    Json(state.repos.notifications.statistics().await)
}
