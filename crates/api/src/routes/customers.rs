//! Customer management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use tracing::{debug, info};
use webadmin_core::domain::{Customer, CustomerSearch, CustomerUpdate};

use super::location;
use crate::{AppState, error::ApiError, query::ActiveOnlyQuery};

/// Creates the customer routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/search", get(search_customers))
        .route(
            "/customers/{customer_number}",
            get(get_customer).put(update_customer).delete(deactivate_customer),
        )
        .route("/customers/{customer_number}/kyc", put(update_kyc))
}

/// GET `/customers` - List customers.
async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<ActiveOnlyQuery>,
) -> Json<Vec<Customer>> {
    let active_only = query.active_only.unwrap_or(false);
    debug!(active_only, "Listing customers");
    Json(state.repos.customers.list(active_only).await)
}

/// GET `/customers/search` - Search by email and/or phone.
async fn search_customers(
    State(state): State<AppState>,
    Query(search): Query<CustomerSearch>,
) -> Json<Vec<Customer>> {
    debug!(email = ?search.email, phone = ?search.phone, "Searching customers");
    Json(state.repos.customers.search(&search).await)
}

/// GET `/customers/{customer_number}` - Get one customer.
async fn get_customer(
    State(state): State<AppState>,
    Path(customer_number): Path<String>,
) -> Result<Json<Customer>, ApiError> {
    Ok(Json(state.repos.customers.find(&customer_number).await?))
}

/// POST `/customers` - Register a customer.
async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<Customer>,
) -> Result<impl IntoResponse, ApiError> {
    let customer = state.repos.customers.create(payload).await?;
    info!(
        customer_id = customer.customer_id,
        customer_number = %customer.customer_number,
        "Customer created"
    );
    Ok((
        StatusCode::CREATED,
        location("customers", &customer.customer_number)?,
        Json(customer),
    ))
}

/// PUT `/customers/{customer_number}` - Overwrite the profile.
async fn update_customer(
    State(state): State<AppState>,
    Path(customer_number): Path<String>,
    Json(update): Json<CustomerUpdate>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .repos
        .customers
        .update(&customer_number, update)
        .await?;
    info!(customer_number = %customer_number, "Customer updated");
    Ok(Json(customer))
}

/// PUT `/customers/{customer_number}/kyc` - Set the KYC status.
async fn update_kyc(
    State(state): State<AppState>,
    Path(customer_number): Path<String>,
    Json(kyc_status): Json<String>,
) -> Result<Json<Customer>, ApiError> {
    let customer = state
        .repos
        .customers
        .update_kyc(&customer_number, kyc_status)
        .await?;
    info!(
        customer_number = %customer_number,
        kyc_status = %customer.kyc_status,
        "Customer KYC status updated"
    );
    Ok(Json(customer))
}

/// DELETE `/customers/{customer_number}` - Deactivate a customer.
async fn deactivate_customer(
    State(state): State<AppState>,
    Path(customer_number): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.repos.customers.deactivate(&customer_number).await?;
    info!(customer_number = %customer_number, "Customer deactivated");
    Ok(StatusCode::NO_CONTENT)
}
