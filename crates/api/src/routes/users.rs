//! Operator user management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{debug, info};
use webadmin_core::domain::SystemUser;

use super::location;
use crate::{AppState, error::ApiError, query::ActiveOnlyQuery};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/role/{role}", get(list_users_by_role))
        .route("/users/{username}", get(get_user).delete(delete_user))
        .route("/users/{username}/role", put(update_role))
        .route("/users/{username}/permissions", put(update_permissions))
        .route("/users/{username}/deactivate", put(deactivate_user))
        .route("/users/{username}/login", post(record_login))
}

/// GET `/users` - List users.
async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ActiveOnlyQuery>,
) -> Json<Vec<SystemUser>> {
    let active_only = query.active_only.unwrap_or(false);
    debug!(active_only, "Listing users");
    Json(state.repos.users.list(active_only).await)
}

/// GET `/users/role/{role}` - Users holding a role.
async fn list_users_by_role(
    State(state): State<AppState>,
    Path(role): Path<String>,
) -> Json<Vec<SystemUser>> {
    debug!(role = %role, "Listing users by role");
    Json(state.repos.users.list_by_role(&role).await)
}

/// GET `/users/{username}` - Get one user.
async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SystemUser>, ApiError> {
    Ok(Json(state.repos.users.find(&username).await?))
}

/// POST `/users` - Create a user.
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<SystemUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.repos.users.create(payload).await?;
    info!(user_id = user.user_id, username = %user.username, role = %user.role, "User created");
    Ok((
        StatusCode::CREATED,
        location("users", &user.username)?,
        Json(user),
    ))
}

/// PUT `/users/{username}/role` - Change the role.
async fn update_role(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(role): Json<String>,
) -> Result<Json<SystemUser>, ApiError> {
    let user = state.repos.users.update_role(&username, role).await?;
    info!(username = %username, role = %user.role, "User role updated");
    Ok(Json(user))
}

/// PUT `/users/{username}/permissions` - Replace the permission set.
async fn update_permissions(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(permissions): Json<Vec<String>>,
) -> Result<Json<SystemUser>, ApiError> {
    let user = state
        .repos
        .users
        .update_permissions(&username, permissions)
        .await?;
    info!(
        username = %username,
        permissions = user.permissions.len(),
        "User permissions updated"
    );
    Ok(Json(user))
}

/// PUT `/users/{username}/deactivate` - Deactivate and return the user.
async fn deactivate_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SystemUser>, ApiError> {
    let user = state.repos.users.deactivate(&username).await?;
    info!(username = %username, "User deactivated");
    Ok(Json(user))
}

/// DELETE `/users/{username}` - Deactivate a user.
async fn delete_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repos.users.deactivate(&username).await?;
    info!(username = %username, "User deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// POST `/users/{username}/login` - Record a login.
async fn record_login(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<SystemUser>, ApiError> {
    let user = state.repos.users.record_login(&username).await?;
    info!(username = %username, "User login recorded");
    Ok(Json(user))
}
