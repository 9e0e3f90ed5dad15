//! Per-entity store configuration.

use chrono::{DateTime, Utc};

use super::error::StoreResult;
use crate::filter::eq_ignore_case;

/// How a natural key is compared during lookups and uniqueness checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMatch {
    /// Ordinal, case-sensitive comparison.
    Exact,
    /// Case-insensitive comparison.
    IgnoreCase,
}

impl KeyMatch {
    /// Returns true if the two keys are equal under this comparison.
    #[must_use]
    pub fn matches(self, left: &str, right: &str) -> bool {
        match self {
            Self::Exact => left == right,
            Self::IgnoreCase => eq_ignore_case(left, right),
        }
    }
}

/// What `delete` does for an entity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Remove the record from the collection.
    Remove,
    /// Keep the record and mark it inactive.
    Deactivate,
    /// Records of this type cannot be deleted.
    Never,
}

/// A uniqueness constraint on a string field, enforced at creation only.
pub struct Unique<T> {
    /// Reads the constrained field.
    pub field: fn(&T) -> &str,
    /// How values are compared.
    pub matching: KeyMatch,
    /// Fixed message naming the violated field.
    pub message: &'static str,
}

/// An entity that can live in a [`ResourceStore`](super::ResourceStore).
pub trait Resource: Clone + Send + Sync + 'static {
    /// Label used in not-found messages, e.g. `Account` or `Audit log`.
    const LABEL: &'static str;

    /// Delete semantics for this entity type.
    const DELETE_POLICY: DeletePolicy;

    /// Comparison used for the natural key.
    const KEY_MATCH: KeyMatch = KeyMatch::Exact;

    /// Integer surrogate id.
    fn id(&self) -> i32;

    /// Overwrites the surrogate id. Only the store calls this.
    fn set_id(&mut self, id: i32);

    /// Natural key used by `find_by_key`, if the entity is addressed by one.
    fn natural_key(&self) -> Option<&str> {
        None
    }

    /// Uniqueness constraints, checked in order on create.
    fn unique_fields() -> Vec<Unique<Self>> {
        Vec::new()
    }

    /// Rejects a candidate before it is inserted.
    fn validate(&self) -> StoreResult<()> {
        Ok(())
    }

    /// Stamps derived fields. Runs after the id has been assigned.
    fn derive_on_create(&mut self, now: DateTime<Utc>);

    /// Whether the record counts as active for `activeOnly` filters.
    fn is_active(&self) -> bool {
        true
    }

    /// Soft-delete hook for [`DeletePolicy::Deactivate`] entities.
    fn deactivate(&mut self) {}
}
