//! Repository abstractions for data access.
//!
//! Each repository is a cheap-to-clone handle to one collection behind a
//! `tokio::sync::RwLock`. Reads take the read guard; every create, update or
//! delete runs its whole read-modify-write under a single write guard, so id
//! assignment and uniqueness checks cannot interleave.

pub mod account;
pub mod audit_log;
pub mod customer;
pub mod notification;
pub mod report;
pub mod setting;
pub mod transaction;
pub mod user;

pub use account::AccountRepository;
pub use audit_log::AuditLogRepository;
pub use customer::CustomerRepository;
pub use notification::NotificationRepository;
pub use report::ReportRepository;
pub use setting::SettingRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::seed;

/// Every collection the service owns.
#[derive(Debug, Clone, Default)]
pub struct Repositories {
    /// Accounts.
    pub accounts: AccountRepository,
    /// Customers.
    pub customers: CustomerRepository,
    /// Transactions.
    pub transactions: TransactionRepository,
    /// Operator users.
    pub users: UserRepository,
    /// Notifications.
    pub notifications: NotificationRepository,
    /// Audit trail.
    pub audit_logs: AuditLogRepository,
    /// Configuration settings.
    pub settings: SettingRepository,
    /// Generated reports.
    pub reports: ReportRepository,
}

impl Repositories {
    /// Empty collections.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collections holding the sample rows, timed relative to `now`.
    #[must_use]
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            accounts: AccountRepository::new(seed::accounts()),
            customers: CustomerRepository::new(seed::customers()),
            transactions: TransactionRepository::new(seed::transactions(now)),
            users: UserRepository::new(seed::users(now)),
            notifications: NotificationRepository::new(seed::notifications(now)),
            audit_logs: AuditLogRepository::new(seed::audit_logs(now)),
            settings: SettingRepository::new(seed::settings(now)),
            reports: ReportRepository::default(),
        }
    }

    /// Record count per collection, keyed by collection name.
    pub async fn record_counts(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("accounts", self.accounts.count().await),
            ("auditLogs", self.audit_logs.count().await),
            ("customers", self.customers.count().await),
            ("notifications", self.notifications.count().await),
            ("reports", self.reports.count().await),
            ("settings", self.settings.count().await),
            ("transactions", self.transactions.count().await),
            ("users", self.users.count().await),
        ])
    }
}
