//! Read-only statistics over a collection.
//!
//! This module provides pure reducers producing:
//! - total and predicate counts
//! - counts of records stamped on a given day
//! - grouped counts by a categorical field
//!
//! Empty collections yield zero counts and empty maps, never an error.

pub mod service;
pub mod types;


pub use service::StatisticsService;
pub use types::*;
