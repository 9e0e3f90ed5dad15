//! Report data types.

use std::collections::BTreeMap;

use chrono::{DateTime, Months, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::reports::service::ReportService;

/// A strongly typed report payload value.
///
/// Serialized untagged. Decimals are written as JSON numbers so they stay
/// distinguishable from `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReportValue {
    /// Whole number.
    Integer(i64),
    /// Exact decimal.
    Decimal(#[serde(with = "rust_decimal::serde::float")] Decimal),
    /// Free text.
    Text(String),
    /// Nested key/value map.
    Map(BTreeMap<String, ReportValue>),
}

impl From<i64> for ReportValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for ReportValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for ReportValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<K: Into<String>, V: Into<ReportValue>> FromIterator<(K, V)> for ReportValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

/// The report kinds the catalogue can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Transaction volumes by type.
    TransactionSummary,
    /// Account counts and balances.
    AccountSummary,
    /// Customer tiers and retention.
    CustomerAnalytics,
    /// Compliance review outcomes.
    Compliance,
}

impl ReportKind {
    /// Display name of the generated report.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TransactionSummary => "Transaction Summary Report",
            Self::AccountSummary => "Account Summary Report",
            Self::CustomerAnalytics => "Customer Analytics Report",
            Self::Compliance => "Compliance Report",
        }
    }

    /// Report type label.
    #[must_use]
    pub const fn type_label(self) -> &'static str {
        match self {
            Self::TransactionSummary => "Transaction Summary",
            Self::AccountSummary => "Account Summary",
            Self::CustomerAnalytics => "Customer Analytics",
            Self::Compliance => "Compliance",
        }
    }

    /// The period covered when the caller does not choose one.
    ///
    /// Returns `None` for kinds whose period must be supplied.
    #[must_use]
    pub fn default_period(self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let months = match self {
            Self::AccountSummary => 1,
            Self::CustomerAnalytics => 3,
            Self::TransactionSummary | Self::Compliance => return None,
        };
        let start = now.checked_sub_months(Months::new(months)).unwrap_or(now);
        Some((start, now))
    }

    /// The canned payload for this kind.
    #[must_use]
    pub fn payload(self) -> BTreeMap<String, ReportValue> {
        ReportService::payload(self)
    }
}
