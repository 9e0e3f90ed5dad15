//! Generic in-memory resource store.
//!
//! Every back-office collection is a [`ResourceStore`] configured by its
//! entity's [`Resource`] implementation:
//! - integer surrogate ids assigned as `max + 1`
//! - lookup by natural key (exact or case-insensitive)
//! - uniqueness constraints checked on create only
//! - derived fields stamped on create
//! - hard or soft delete, never both
//!
//! Append-only collections use [`AppendOnlyStore`], which has no update or
//! delete operation at all.

pub mod append_only;
pub mod error;
pub mod memory;
pub mod resource;

#[cfg(test)]
mod props;

pub use append_only::AppendOnlyStore;
pub use error::{StoreError, StoreResult};
pub use memory::ResourceStore;
pub use resource::{DeletePolicy, KeyMatch, Resource, Unique};
