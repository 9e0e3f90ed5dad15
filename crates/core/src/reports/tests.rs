//! Tests for the report catalogue.

use chrono::{TimeZone, Utc};
use rstest::rstest;
use rust_decimal_macros::dec;

use super::types::{ReportKind, ReportValue};
use crate::domain::Report;

#[rstest]
#[case(ReportKind::TransactionSummary, 4)]
#[case(ReportKind::AccountSummary, 5)]
#[case(ReportKind::CustomerAnalytics, 5)]
#[case(ReportKind::Compliance, 6)]
fn test_payload_shape(#[case] kind: ReportKind, #[case] keys: usize) {
    assert_eq!(kind.payload().len(), keys);
}

#[test]
fn test_transaction_summary_payload() {
    let payload = ReportKind::TransactionSummary.payload();

    assert_eq!(payload["TotalTransactions"], ReportValue::Integer(1250));
    assert_eq!(payload["TotalAmount"], ReportValue::Decimal(dec!(2500000)));

    let ReportValue::Map(by_type) = &payload["TransactionsByType"] else {
        panic!("TransactionsByType should be a map");
    };
    assert_eq!(by_type["Deposit"], ReportValue::Integer(500));
}

#[test]
fn test_customer_analytics_keeps_fractional_values_exact() {
    let payload = ReportKind::CustomerAnalytics.payload();
    assert_eq!(
        payload["AverageCustomerBalance"],
        ReportValue::Decimal(dec!(39062.5))
    );
    assert_eq!(payload["CustomerRetentionRate"], ReportValue::Decimal(dec!(95.5)));
}

#[test]
fn test_default_periods() {
    let now = Utc.with_ymd_and_hms(2024, 5, 31, 10, 0, 0).unwrap();

    let (start, end) = ReportKind::AccountSummary.default_period(now).unwrap();
    assert_eq!(start, Utc.with_ymd_and_hms(2024, 4, 30, 10, 0, 0).unwrap());
    assert_eq!(end, now);

    let (start, _) = ReportKind::CustomerAnalytics.default_period(now).unwrap();
    assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 29, 10, 0, 0).unwrap());

    assert!(ReportKind::Compliance.default_period(now).is_none());
    assert!(ReportKind::TransactionSummary.default_period(now).is_none());
}

#[test]
fn test_generate_fills_labels_and_payload() {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    let report = Report::generate(ReportKind::Compliance, "auditor".into(), start, end);

    assert_eq!(report.report_name, "Compliance Report");
    assert_eq!(report.report_type, "Compliance");
    assert_eq!(report.status, "Completed");
    assert_eq!(report.generated_by, "auditor");
    assert_eq!(report.data["ComplianceRate"], ReportValue::Decimal(dec!(98.5)));
}

#[test]
fn test_payload_serializes_untagged() {
    let json = serde_json::to_value(ReportKind::AccountSummary.payload()).unwrap();
    assert_eq!(json["TotalAccounts"], serde_json::json!(3500));
    assert_eq!(json["AccountsByType"]["Savings"], serde_json::json!(1500));
    assert_eq!(json["TotalBalance"], serde_json::json!(125_000_000.0));
}

#[test]
fn test_decimal_and_text_differ_on_the_wire() {
    let decimal = serde_json::to_value(ReportValue::Decimal(dec!(98.5))).unwrap();
    let text = serde_json::to_value(ReportValue::Text("98.5".into())).unwrap();

    assert!(decimal.is_number());
    assert!(text.is_string());
    assert_eq!(decimal, serde_json::json!(98.5));
}
