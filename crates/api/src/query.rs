//! Query-string extractors shared by several routes.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;

use crate::error::ApiError;

/// `?activeOnly=` filter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveOnlyQuery {
    /// Keep only active records.
    pub active_only: Option<bool>,
}

/// Parses a query date: RFC 3339, a date-time without offset read as UTC,
/// or `YYYY-MM-DD` meaning midnight UTC.
///
/// # Errors
///
/// Returns a validation error naming the rejected value.
pub fn parse_date(value: &str) -> Result<DateTime<Utc>, ApiError> {
    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.with_timezone(&Utc));
    }
    if let Ok(at) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(at.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| ApiError::validation(format!("Invalid date '{value}'")))
}

/// Parses an optional, possibly empty, query date.
///
/// # Errors
///
/// Returns a validation error if a non-empty value does not parse.
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .map(parse_date)
        .transpose()
}
