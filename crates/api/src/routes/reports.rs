//! Report generation routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info};
use webadmin_core::domain::Report;
use webadmin_core::reports::ReportKind;

use super::location;
use crate::{AppState, error::ApiError, query::parse_date};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/reports/transaction-summary", post(transaction_summary))
        .route("/reports/account-summary", post(account_summary))
        .route("/reports/customer-analytics", post(customer_analytics))
        .route("/reports/compliance-report", post(compliance_report))
        .route("/reports/{id}", get(get_report).delete(delete_report))
}

/// Query parameters for reports over an explicit period.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodQuery {
    /// Period start.
    pub start_date: String,
    /// Period end.
    pub end_date: String,
    /// Requesting user.
    pub generated_by: String,
}

/// Query parameters for reports over a fixed trailing period.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterQuery {
    /// Requesting user.
    pub generated_by: String,
}

async fn generate(
    state: &AppState,
    kind: ReportKind,
    generated_by: String,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<Response, ApiError> {
    let report = state
        .repos
        .reports
        .generate(kind, generated_by, start_date, end_date)
        .await?;
    info!(
        report_id = report.report_id,
        report_type = %report.report_type,
        generated_by = %report.generated_by,
        "Report generated"
    );
    Ok((
        StatusCode::CREATED,
        location("reports", &report.report_id)?,
        Json(report),
    )
        .into_response())
}

async fn generate_for_period(
    state: &AppState,
    kind: ReportKind,
    query: PeriodQuery,
) -> Result<Response, ApiError> {
    let start_date = parse_date(&query.start_date)?;
    let end_date = parse_date(&query.end_date)?;
    generate(state, kind, query.generated_by, start_date, end_date).await
}

async fn generate_trailing(
    state: &AppState,
    kind: ReportKind,
    query: RequesterQuery,
) -> Result<Response, ApiError> {
    let now = Utc::now();
    let (start_date, end_date) = kind.default_period(now).unwrap_or((now, now));
    generate(state, kind, query.generated_by, start_date, end_date).await
}

/// GET `/reports` - List reports, newest first.
async fn list_reports(State(state): State<AppState>) -> Json<Vec<Report>> {
    debug!("Listing reports");
    Json(state.repos.reports.list().await)
}

/// GET `/reports/{id}` - Get one report.
async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Report>, ApiError> {
    Ok(Json(state.repos.reports.find(id).await?))
}

/// POST `/reports/transaction-summary` - Transaction summary for a period.
async fn transaction_summary(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, ApiError> {
    generate_for_period(&state, ReportKind::TransactionSummary, query).await
}

/// POST `/reports/account-summary` - Account summary for the last month.
async fn account_summary(
    State(state): State<AppState>,
    Query(query): Query<RequesterQuery>,
) -> Result<Response, ApiError> {
    generate_trailing(&state, ReportKind::AccountSummary, query).await
}

/// POST `/reports/customer-analytics` - Customer analytics for the last three months.
async fn customer_analytics(
    State(state): State<AppState>,
    Query(query): Query<RequesterQuery>,
) -> Result<Response, ApiError> {
    generate_trailing(&state, ReportKind::CustomerAnalytics, query).await
}

/// POST `/reports/compliance-report` - Compliance report for a period.
async fn compliance_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Response, ApiError> {
    generate_for_period(&state, ReportKind::Compliance, query).await
}

/// DELETE `/reports/{id}` - Remove a report.
async fn delete_report(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.repos.reports.delete(id).await?;
    info!(report_id = id, "Report deleted");
    Ok(StatusCode::NO_CONTENT)
}
