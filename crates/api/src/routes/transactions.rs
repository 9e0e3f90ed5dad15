//! Transaction routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use tracing::{debug, info};
use webadmin_core::domain::Transaction;

use super::location;
use crate::{AppState, error::ApiError};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/transactions", get(list_transactions).post(create_transaction))
        .route("/transactions/{transaction_number}", get(get_transaction))
        .route(
            "/transactions/account/{account_number}",
            get(list_account_transactions),
        )
        .route(
            "/transactions/{transaction_number}/approve",
            put(approve_transaction),
        )
        .route(
            "/transactions/{transaction_number}/reject",
            put(reject_transaction),
        )
}

/// GET `/transactions` - List transactions, newest first.
async fn list_transactions(State(state): State<AppState>) -> Json<Vec<Transaction>> {
    debug!("Listing transactions");
    Json(state.repos.transactions.list().await)
}

/// GET `/transactions/{transaction_number}` - Get one transaction.
async fn get_transaction(
    State(state): State<AppState>,
    Path(transaction_number): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    Ok(Json(
        state.repos.transactions.find(&transaction_number).await?,
    ))
}

/// GET `/transactions/account/{account_number}` - Transactions touching an account.
async fn list_account_transactions(
    State(state): State<AppState>,
    Path(account_number): Path<String>,
) -> Json<Vec<Transaction>> {
    debug!(account_number = %account_number, "Listing account transactions");
    Json(
        state
            .repos
            .transactions
            .list_for_account(&account_number)
            .await,
    )
}

/// POST `/transactions` - Record a pending transaction.
async fn create_transaction(
    State(state): State<AppState>,
    Json(payload): Json<Transaction>,
) -> Result<impl IntoResponse, ApiError> {
    let transaction = state.repos.transactions.create(payload).await?;
    info!(
        transaction_number = %transaction.transaction_number,
        amount = %transaction.amount,
        from_account = %transaction.from_account,
        to_account = %transaction.to_account,
        "Transaction created"
    );
    Ok((
        StatusCode::CREATED,
        location("transactions", &transaction.transaction_number)?,
        Json(transaction),
    ))
}

/// PUT `/transactions/{transaction_number}/approve` - Approve a pending transaction.
async fn approve_transaction(
    State(state): State<AppState>,
    Path(transaction_number): Path<String>,
    Json(approved_by): Json<String>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = state
        .repos
        .transactions
        .approve(&transaction_number, approved_by)
        .await?;
    info!(
        transaction_number = %transaction_number,
        approved_by = %transaction.approved_by,
        "Transaction approved"
    );
    Ok(Json(transaction))
}

/// PUT `/transactions/{transaction_number}/reject` - Reject a pending transaction.
async fn reject_transaction(
    State(state): State<AppState>,
    Path(transaction_number): Path<String>,
    Json(reason): Json<String>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = state
        .repos
        .transactions
        .reject(&transaction_number, &reason)
        .await?;
    info!(transaction_number = %transaction_number, reason = %reason, "Transaction rejected");
    Ok(Json(transaction))
}
