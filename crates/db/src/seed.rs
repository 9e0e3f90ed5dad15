//! Sample rows loaded at startup.
//!
//! Relative timestamps are computed from the time passed in, so a fresh
//! process always sees "two hours ago" as two hours ago.

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use webadmin_core::domain::{
    Account, AuditLog, Customer, Notification, SystemSetting, SystemUser, Transaction,
    TransactionStatus,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn midnight(year: i32, month: u32, d: u32) -> DateTime<Utc> {
    day(year, month, d).and_time(chrono::NaiveTime::MIN).and_utc()
}

fn months_ago(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months)).unwrap_or(now)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Sample accounts.
#[must_use]
pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            account_id: 1,
            account_number: "ACC1001".into(),
            account_type: "Savings".into(),
            customer_name: "John Doe".into(),
            balance: Decimal::new(2_500_000, 2),
            currency: "USD".into(),
            opened_date: midnight(2020, 5, 15),
            status: "Active".into(),
            branch_id: 1,
            is_active: true,
        },
        Account {
            account_id: 2,
            account_number: "ACC1002".into(),
            account_type: "Checking".into(),
            customer_name: "Jane Smith".into(),
            balance: Decimal::new(850_050, 2),
            currency: "USD".into(),
            opened_date: midnight(2021, 8, 22),
            status: "Active".into(),
            branch_id: 2,
            is_active: true,
        },
        Account {
            account_id: 3,
            account_number: "ACC1003".into(),
            account_type: "Business".into(),
            customer_name: "ABC Corporation".into(),
            balance: Decimal::new(15_000_000, 2),
            currency: "USD".into(),
            opened_date: midnight(2019, 3, 10),
            status: "Active".into(),
            branch_id: 1,
            is_active: true,
        },
    ]
}

/// Sample customers.
#[must_use]
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            customer_id: 1,
            customer_number: "CUST001".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john.doe@email.com".into(),
            phone_number: "555-0101".into(),
            date_of_birth: day(1985, 5, 15),
            address: "123 Main St".into(),
            city: "New York".into(),
            state: "NY".into(),
            zip_code: "10001".into(),
            customer_tier: "Gold".into(),
            registration_date: midnight(2020, 1, 10),
            is_active: true,
            kyc_status: "Verified".into(),
        },
        Customer {
            customer_id: 2,
            customer_number: "CUST002".into(),
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@email.com".into(),
            phone_number: "555-0102".into(),
            date_of_birth: day(1990, 8, 22),
            address: "456 Oak Ave".into(),
            city: "Los Angeles".into(),
            state: "CA".into(),
            zip_code: "90001".into(),
            customer_tier: "Silver".into(),
            registration_date: midnight(2021, 3, 15),
            is_active: true,
            kyc_status: "Verified".into(),
        },
    ]
}

/// Sample transactions, both already settled.
#[must_use]
pub fn transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    vec![
        Transaction {
            transaction_id: 1,
            transaction_number: "TXN001".into(),
            transaction_date: now - Duration::days(2),
            from_account: "ACC1001".into(),
            to_account: "ACC1002".into(),
            amount: Decimal::new(150_000, 2),
            transaction_type: "Transfer".into(),
            description: "Payment for services".into(),
            status: TransactionStatus::Completed,
            initiated_by: "John Doe".into(),
            approved_by: "Admin1".into(),
        },
        Transaction {
            transaction_id: 2,
            transaction_number: "TXN002".into(),
            transaction_date: now - Duration::days(1),
            from_account: "ACC1003".into(),
            to_account: String::new(),
            amount: Decimal::new(500_000, 2),
            transaction_type: "Withdrawal".into(),
            description: "Cash withdrawal".into(),
            status: TransactionStatus::Completed,
            initiated_by: "ABC Corporation".into(),
            approved_by: "Admin2".into(),
        },
    ]
}

/// Sample operators.
#[must_use]
pub fn users(now: DateTime<Utc>) -> Vec<SystemUser> {
    let mut admin = SystemUser {
        user_id: 1,
        username: "admin".into(),
        email: "admin@bank.com".into(),
        full_name: "System Administrator".into(),
        role: "Administrator".into(),
        department: "IT".into(),
        branch_id: None,
        created_date: midnight(2020, 1, 1),
        last_login_date: Some(now - Duration::hours(2)),
        is_active: true,
        ..SystemUser::default()
    };
    admin.set_permissions(strings(&["ALL"]));

    let mut manager = SystemUser {
        user_id: 2,
        username: "manager1".into(),
        email: "manager1@bank.com".into(),
        full_name: "Branch Manager".into(),
        role: "Manager".into(),
        department: "Operations".into(),
        branch_id: Some(1),
        created_date: midnight(2020, 6, 15),
        last_login_date: Some(now - Duration::days(1)),
        is_active: true,
        ..SystemUser::default()
    };
    manager.set_permissions(strings(&[
        "VIEW_ACCOUNTS",
        "APPROVE_TRANSACTIONS",
        "MANAGE_CUSTOMERS",
    ]));

    let mut teller = SystemUser {
        user_id: 3,
        username: "teller1".into(),
        email: "teller1@bank.com".into(),
        full_name: "Bank Teller".into(),
        role: "Teller".into(),
        department: "Customer Service".into(),
        branch_id: Some(1),
        created_date: midnight(2021, 3, 10),
        last_login_date: Some(now - Duration::hours(4)),
        is_active: true,
        ..SystemUser::default()
    };
    teller.set_permissions(strings(&["VIEW_ACCOUNTS", "CREATE_TRANSACTIONS"]));

    vec![admin, manager, teller]
}

/// Sample notifications.
#[must_use]
pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            notification_id: 1,
            title: "System Maintenance Scheduled".into(),
            message: "Scheduled system maintenance on Sunday, 2:00 AM - 4:00 AM".into(),
            notification_type: "System".into(),
            priority: "High".into(),
            created_date: now - Duration::hours(3),
            target_user_role: "All".into(),
            target_users: Vec::new(),
            is_read: false,
            read_date: None,
            is_active: true,
        },
        Notification {
            notification_id: 2,
            title: "New Compliance Policy".into(),
            message: "Updated AML compliance policy effective immediately. Please review.".into(),
            notification_type: "Compliance".into(),
            priority: "High".into(),
            created_date: now - Duration::days(1),
            target_user_role: "Manager".into(),
            target_users: strings(&["manager1", "manager2"]),
            is_read: true,
            read_date: Some(now - Duration::hours(12)),
            is_active: true,
        },
        Notification {
            notification_id: 3,
            title: "Transaction Limit Update".into(),
            message: "Daily transaction limit has been increased to $50,000".into(),
            notification_type: "Policy".into(),
            priority: "Medium".into(),
            created_date: now - Duration::days(2),
            target_user_role: "Teller".into(),
            target_users: Vec::new(),
            is_read: false,
            read_date: None,
            is_active: true,
        },
    ]
}

/// Sample audit trail. The last entry records a refused delete.
#[must_use]
pub fn audit_logs(now: DateTime<Utc>) -> Vec<AuditLog> {
    let log = |log_id, ago: Duration, user_id: &str, username: &str| AuditLog {
        log_id,
        timestamp: now - ago,
        user_id: user_id.into(),
        username: username.into(),
        is_successful: true,
        ..AuditLog::default()
    };

    vec![
        AuditLog {
            action: "CREATE".into(),
            entity_type: "Account".into(),
            entity_id: "ACC1001".into(),
            ip_address: "192.168.1.100".into(),
            details: "Created new savings account".into(),
            ..log(1, Duration::hours(2), "admin", "System Administrator")
        },
        AuditLog {
            action: "APPROVE".into(),
            entity_type: "Transaction".into(),
            entity_id: "TXN001".into(),
            ip_address: "192.168.1.101".into(),
            details: "Approved transaction for $1,500".into(),
            ..log(2, Duration::hours(1), "manager1", "Branch Manager")
        },
        AuditLog {
            action: "UPDATE".into(),
            entity_type: "Customer".into(),
            entity_id: "CUST001".into(),
            ip_address: "192.168.1.102".into(),
            details: "Updated customer phone number".into(),
            ..log(3, Duration::minutes(30), "teller1", "Bank Teller")
        },
        AuditLog {
            action: "DELETE".into(),
            entity_type: "Transaction".into(),
            entity_id: "TXN999".into(),
            ip_address: "192.168.1.102".into(),
            details: "Attempted to delete completed transaction".into(),
            is_successful: false,
            error_message: "Cannot delete completed transaction".into(),
            ..log(4, Duration::minutes(15), "teller1", "Bank Teller")
        },
    ]
}

/// Sample configuration settings.
#[must_use]
pub fn settings(now: DateTime<Utc>) -> Vec<SystemSetting> {
    let setting = |setting_id, key: &str, value: &str, category: &str| SystemSetting {
        setting_id,
        setting_key: key.into(),
        setting_value: value.into(),
        setting_category: category.into(),
        modified_by: "admin".into(),
        is_active: true,
        ..SystemSetting::default()
    };

    vec![
        SystemSetting {
            description: "Maximum daily withdrawal limit per account".into(),
            last_modified: months_ago(now, 1),
            ..setting(1, "MAX_DAILY_WITHDRAWAL_LIMIT", "50000", "Transaction Limits")
        },
        SystemSetting {
            description: "Minimum balance required for savings accounts".into(),
            last_modified: months_ago(now, 2),
            ..setting(2, "MIN_ACCOUNT_BALANCE", "1000", "Account Rules")
        },
        SystemSetting {
            description: "Percentage fee for wire transfers".into(),
            last_modified: now - Duration::weeks(1),
            ..setting(3, "TRANSACTION_FEE_PERCENTAGE", "0.5", "Fees")
        },
        SystemSetting {
            description: "User session timeout in minutes".into(),
            last_modified: now - Duration::days(10),
            ..setting(4, "SESSION_TIMEOUT_MINUTES", "30", "Security")
        },
        SystemSetting {
            description: "Enable two-factor authentication for all users".into(),
            last_modified: now - Duration::days(5),
            ..setting(5, "ENABLE_TWO_FACTOR_AUTH", "true", "Security")
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seed_sizes() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(accounts().len(), 3);
        assert_eq!(customers().len(), 2);
        assert_eq!(transactions(now).len(), 2);
        assert_eq!(users(now).len(), 3);
        assert_eq!(notifications(now).len(), 3);
        assert_eq!(audit_logs(now).len(), 4);
        assert_eq!(settings(now).len(), 5);
    }

    #[test]
    fn test_seed_times_are_relative() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let logs = audit_logs(now);
        assert_eq!(logs[0].timestamp, now - Duration::hours(2));
        assert!(!logs[3].is_successful);
        assert_eq!(
            settings(now)[1].last_modified,
            Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_seed_values() {
        assert_eq!(accounts()[1].balance, Decimal::new(850_050, 2));
        assert_eq!(accounts()[2].opened_date, midnight(2019, 3, 10));
        let users = users(Utc::now());
        assert!(users[0].permissions.contains("ALL"));
        assert_eq!(users[0].branch_id, None);
        assert_eq!(users[1].email, "manager1@bank.com");
    }
}
