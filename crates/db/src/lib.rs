//! Data layer for the back-office service.
//!
//! This crate provides:
//! - One repository per collection, each a shared handle to a locked store
//! - The sample rows loaded at startup

pub mod repositories;
pub mod seed;

pub use repositories::{
    AccountRepository, AuditLogRepository, CustomerRepository, NotificationRepository,
    ReportRepository, Repositories, SettingRepository, TransactionRepository, UserRepository,
};
