//! Canned report payloads.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{ReportKind, ReportValue};

/// Report payload catalogue.
pub struct ReportService;

impl ReportService {
    /// Builds the fixed payload for a report kind.
    #[must_use]
    pub fn payload(kind: ReportKind) -> BTreeMap<String, ReportValue> {
        let entries: Vec<(&str, ReportValue)> = match kind {
            ReportKind::TransactionSummary => vec![
                ("TotalTransactions", 1250_i64.into()),
                ("TotalAmount", Decimal::new(2_500_000, 0).into()),
                ("AverageTransactionAmount", Decimal::new(2000, 0).into()),
                (
                    "TransactionsByType",
                    [("Transfer", 450_i64), ("Deposit", 500_i64), ("Withdrawal", 300_i64)]
                        .into_iter()
                        .collect(),
                ),
            ],
            ReportKind::AccountSummary => vec![
                ("TotalAccounts", 3500_i64.into()),
                ("ActiveAccounts", 3200_i64.into()),
                ("InactiveAccounts", 300_i64.into()),
                ("TotalBalance", Decimal::new(125_000_000, 0).into()),
                (
                    "AccountsByType",
                    [("Savings", 1500_i64), ("Checking", 1200_i64), ("Business", 800_i64)]
                        .into_iter()
                        .collect(),
                ),
            ],
            ReportKind::CustomerAnalytics => vec![
                ("TotalCustomers", 3200_i64.into()),
                ("NewCustomersThisMonth", 150_i64.into()),
                (
                    "CustomersByTier",
                    [("Gold", 800_i64), ("Silver", 1500_i64), ("Bronze", 900_i64)]
                        .into_iter()
                        .collect(),
                ),
                ("AverageCustomerBalance", Decimal::new(390_625, 1).into()),
                ("CustomerRetentionRate", Decimal::new(955, 1).into()),
            ],
            ReportKind::Compliance => vec![
                ("TotalReviews", 245_i64.into()),
                ("ComplianceRate", Decimal::new(985, 1).into()),
                ("IssuesFound", 12_i64.into()),
                ("IssuesResolved", 10_i64.into()),
                ("PendingIssues", 2_i64.into()),
                ("HighRiskAlerts", 3_i64.into()),
            ],
        };

        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}
