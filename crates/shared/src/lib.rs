//! Shared errors and configuration for the WebAdmin back-office API.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, DataConfig, ServerConfig};
pub use error::{AppError, AppResult};
