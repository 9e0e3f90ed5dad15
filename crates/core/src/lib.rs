//! Core back-office logic for WebAdmin.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All entity types, derived-field rules, and queries live here.
//!
//! # Modules
//!
//! - `store` - Generic in-memory resource store with keyed CRUD
//! - `domain` - The eight banking entities and their store policies
//! - `filter` - Search predicates shared by the entity queries
//! - `stats` - Read-only statistics over a collection
//! - `currency` - Simulated exchange rates
//! - `reports` - Report payloads and the canned report catalogue

pub mod currency;
pub mod domain;
pub mod filter;
pub mod reports;
pub mod stats;
pub mod store;
