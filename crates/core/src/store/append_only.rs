//! Append-only store for historical records.

use chrono::{DateTime, Utc};

use super::error::StoreResult;
use super::memory::ResourceStore;
use super::resource::Resource;

/// A store that only grows.
///
/// Exposes create and read queries; there is no update or delete. A
/// correction to a historical record is a new compensating record.
#[derive(Debug, Clone)]
pub struct AppendOnlyStore<T> {
    inner: ResourceStore<T>,
}

impl<T: Resource> Default for AppendOnlyStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> AppendOnlyStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: ResourceStore::new(),
        }
    }

    /// Creates a store holding already-identified records.
    #[must_use]
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            inner: ResourceStore::with_records(records),
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        self.inner.list()
    }

    /// Clones the records matching `predicate`, in insertion order.
    pub fn list_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner.list_where(predicate)
    }

    /// Finds a record by surrogate id.
    pub fn find_by_id(&self, id: i32) -> StoreResult<&T> {
        self.inner.find_by_id(id)
    }

    /// Appends a new record.
    pub fn append(&mut self, candidate: T, now: DateTime<Utc>) -> StoreResult<T> {
        self.inner.create(candidate, now)
    }
}
