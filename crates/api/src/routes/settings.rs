//! System settings routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, info};
use webadmin_core::domain::{SettingUpdate, SystemSetting};

use super::location;
use crate::{AppState, error::ApiError, query::ActiveOnlyQuery};

/// Creates the settings routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(list_settings).post(create_setting))
        .route("/settings/category/{category}", get(list_by_category))
        .route(
            "/settings/{key}",
            get(get_setting).put(update_setting).delete(deactivate_setting),
        )
}

/// GET `/settings` - List settings.
async fn list_settings(
    State(state): State<AppState>,
    Query(query): Query<ActiveOnlyQuery>,
) -> Json<Vec<SystemSetting>> {
    let active_only = query.active_only.unwrap_or(false);
    debug!(active_only, "Listing settings");
    Json(state.repos.settings.list(active_only).await)
}

/// GET `/settings/category/{category}` - Settings in a category.
async fn list_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<Vec<SystemSetting>> {
    debug!(category = %category, "Listing settings by category");
    Json(state.repos.settings.list_by_category(&category).await)
}

/// GET `/settings/{key}` - Get one setting.
async fn get_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<SystemSetting>, ApiError> {
    Ok(Json(state.repos.settings.find(&key).await?))
}

/// POST `/settings` - Add a setting.
async fn create_setting(
    State(state): State<AppState>,
    Json(payload): Json<SystemSetting>,
) -> Result<impl IntoResponse, ApiError> {
    let setting = state.repos.settings.create(payload).await?;
    info!(
        setting_id = setting.setting_id,
        setting_key = %setting.setting_key,
        "Setting created"
    );
    Ok((
        StatusCode::CREATED,
        location("settings", &setting.setting_key)?,
        Json(setting),
    ))
}

/// PUT `/settings/{key}` - Change a setting's value.
async fn update_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(update): Json<SettingUpdate>,
) -> Result<Json<SystemSetting>, ApiError> {
    let setting = state.repos.settings.update(&key, update).await?;
    info!(
        setting_key = %setting.setting_key,
        modified_by = %setting.modified_by,
        "Setting updated"
    );
    Ok(Json(setting))
}

/// DELETE `/settings/{key}` - Deactivate a setting.
async fn deactivate_setting(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repos.settings.deactivate(&key).await?;
    info!(setting_key = %key, "Setting deactivated");
    Ok(StatusCode::NO_CONTENT)
}
