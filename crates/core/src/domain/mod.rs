//! Back-office entities and their store policies.
//!
//! Each entity is a thin configuration of the generic store: which field
//! is the natural key, which fields must be unique, what is derived on
//! create, and what delete means.

pub mod account;
pub mod audit;
pub mod customer;
pub mod notification;
pub mod report;
pub mod settings;
pub mod transaction;
pub mod user;

pub use account::Account;
pub use audit::{AuditLog, AuditSearch};
pub use customer::{Customer, CustomerSearch, CustomerUpdate};
pub use notification::{ALL_ROLES, Notification};
pub use report::{REPORT_COMPLETED, Report};
pub use settings::{SettingUpdate, SystemSetting};
pub use transaction::{Transaction, TransactionStatus};
pub use user::SystemUser;
