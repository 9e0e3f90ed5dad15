//! Report payloads and the canned report catalogue.
//!
//! Reports are generated on demand with a fixed data payload per report
//! kind:
//! - Transaction Summary
//! - Account Summary
//! - Customer Analytics
//! - Compliance

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::ReportService;
pub use types::*;
