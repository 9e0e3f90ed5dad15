//! Account management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use rust_decimal::Decimal;
use tracing::{debug, info};
use webadmin_core::domain::Account;

use super::location;
use crate::{AppState, error::ApiError, query::ActiveOnlyQuery};

/// Creates the account routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/accounts", get(list_accounts).post(create_account))
        .route(
            "/accounts/{account_number}",
            get(get_account).delete(delete_account),
        )
        .route("/accounts/{account_number}/balance", put(update_balance))
        .route("/accounts/{account_number}/status", put(update_status))
}

/// GET `/accounts` - List accounts.
async fn list_accounts(
    State(state): State<AppState>,
    Query(query): Query<ActiveOnlyQuery>,
) -> Json<Vec<Account>> {
    let active_only = query.active_only.unwrap_or(false);
    debug!(active_only, "Listing accounts");
    Json(state.repos.accounts.list(active_only).await)
}

/// GET `/accounts/{account_number}` - Get one account.
async fn get_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<Json<Account>, ApiError> {
    Ok(Json(state.repos.accounts.find(&account_number).await?))
}

/// POST `/accounts` - Open an account.
async fn create_account(
    State(state): State<AppState>,
    Json(payload): Json<Account>,
) -> Result<impl IntoResponse, ApiError> {
    let account = state.repos.accounts.create(payload).await?;
    info!(
        account_id = account.account_id,
        account_number = %account.account_number,
        "Account created"
    );
    Ok((
        StatusCode::CREATED,
        location("accounts", &account.account_number)?,
        Json(account),
    ))
}

/// PUT `/accounts/{account_number}/balance` - Overwrite the balance.
async fn update_balance(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
    Json(balance): Json<Decimal>,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .repos
        .accounts
        .update_balance(&account_number, balance)
        .await?;
    info!(account_number = %account_number, balance = %balance, "Account balance updated");
    Ok(Json(account))
}

/// PUT `/accounts/{account_number}/status` - Change the status.
async fn update_status(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
    Json(status): Json<String>,
) -> Result<Json<Account>, ApiError> {
    let account = state
        .repos
        .accounts
        .update_status(&account_number, status)
        .await?;
    info!(
        account_number = %account_number,
        status = %account.status,
        is_active = account.is_active,
        "Account status updated"
    );
    Ok(Json(account))
}

/// DELETE `/accounts/{account_number}` - Remove an account.
async fn delete_account(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repos.accounts.delete(&account_number).await?;
    info!(account_number = %account_number, "Account deleted");
    Ok(StatusCode::NO_CONTENT)
}
