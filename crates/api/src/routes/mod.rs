//! API route definitions.

use std::fmt::Display;

use axum::{
    Router,
    http::{HeaderValue, header},
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{AppState, error::ApiError};

pub mod accounts;
pub mod audit_logs;
pub mod currency;
pub mod customers;
pub mod health;
pub mod notifications;
pub mod reports;
pub mod settings;
pub mod transactions;
pub mod users;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(accounts::routes())
        .merge(customers::routes())
        .merge(transactions::routes())
        .merge(users::routes())
        .merge(notifications::routes())
        .merge(audit_logs::routes())
        .merge(settings::routes())
        .merge(reports::routes())
        .merge(currency::routes())
}

/// Bytes escaped in a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// `Location` header for a freshly created resource at `/api/{collection}/{key}`.
///
/// The key is percent-encoded as one path segment.
pub(crate) fn location(
    collection: &str,
    key: impl Display,
) -> Result<[(header::HeaderName, HeaderValue); 1], ApiError> {
    let key = key.to_string();
    let path = format!("/api/{collection}/{}", utf8_percent_encode(&key, PATH_SEGMENT));
    let value = HeaderValue::try_from(path)
        .map_err(|err| ApiError::internal(format!("Invalid Location header: {err}")))?;
    Ok([(header::LOCATION, value)])
}
