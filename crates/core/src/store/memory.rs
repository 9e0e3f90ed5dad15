//! Ordered in-memory collection with keyed CRUD.

use chrono::{DateTime, Utc};

use super::error::{StoreError, StoreResult};
use super::resource::{DeletePolicy, Resource};

/// Generic in-memory store.
///
/// Records are kept in insertion order. The store itself is not
/// synchronized; callers that share it across tasks wrap it in a lock and
/// hold the write guard for the whole read-modify-write.
#[derive(Debug, Clone)]
pub struct ResourceStore<T> {
    records: Vec<T>,
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ResourceStore<T> {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store holding already-identified records, e.g. seed data.
    #[must_use]
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Number of records, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Clones the records matching `predicate`, in insertion order.
    pub fn list_where(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.records
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    /// Clones every record, or only the active ones.
    #[must_use]
    pub fn list_active(&self, active_only: bool) -> Vec<T> {
        self.list_where(|record| !active_only || record.is_active())
    }

    /// The id the next created record will receive.
    #[must_use]
    pub fn next_id(&self) -> i32 {
        self.records.iter().map(T::id).max().unwrap_or(0) + 1
    }

    /// Finds a record by surrogate id.
    pub fn find_by_id(&self, id: i32) -> StoreResult<&T> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::LABEL, id))
    }

    /// Finds a record by natural key.
    pub fn find_by_key(&self, key: &str) -> StoreResult<&T> {
        self.position_by_key(key)
            .map(|index| &self.records[index])
            .ok_or_else(|| StoreError::not_found(T::LABEL, key))
    }

    /// Validates and inserts a candidate.
    ///
    /// The candidate's id is overwritten with `max + 1` and its derived
    /// fields are stamped with `now`. On error the collection is unchanged.
    pub fn create(&mut self, mut candidate: T, now: DateTime<Utc>) -> StoreResult<T> {
        candidate.validate()?;

        for unique in T::unique_fields() {
            let value = (unique.field)(&candidate);
            if self
                .records
                .iter()
                .any(|existing| unique.matching.matches((unique.field)(existing), value))
            {
                return Err(StoreError::Conflict(unique.message));
            }
        }

        candidate.set_id(self.next_id());
        candidate.derive_on_create(now);
        self.records.push(candidate.clone());
        Ok(candidate)
    }

    /// Applies a fallible patch to the record with the given id.
    pub fn try_update_by_id(
        &mut self,
        id: i32,
        patch: impl FnOnce(&mut T) -> StoreResult<()>,
    ) -> StoreResult<T> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::LABEL, id))?;
        patch(record)?;
        Ok(record.clone())
    }

    /// Applies a patch to the record with the given id.
    pub fn update_by_id(&mut self, id: i32, patch: impl FnOnce(&mut T)) -> StoreResult<T> {
        self.try_update_by_id(id, |record| {
            patch(record);
            Ok(())
        })
    }

    /// Applies a fallible patch to the record with the given natural key.
    pub fn try_update_by_key(
        &mut self,
        key: &str,
        patch: impl FnOnce(&mut T) -> StoreResult<()>,
    ) -> StoreResult<T> {
        let index = self
            .position_by_key(key)
            .ok_or_else(|| StoreError::not_found(T::LABEL, key))?;
        let record = &mut self.records[index];
        patch(record)?;
        Ok(record.clone())
    }

    /// Applies a patch to the record with the given natural key.
    pub fn update_by_key(&mut self, key: &str, patch: impl FnOnce(&mut T)) -> StoreResult<T> {
        self.try_update_by_key(key, |record| {
            patch(record);
            Ok(())
        })
    }

    /// Deletes the record with the given id according to the entity's policy.
    pub fn delete_by_id(&mut self, id: i32) -> StoreResult<()> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(T::LABEL, id))?;
        self.delete_at(index)
    }

    /// Deletes the record with the given natural key according to the entity's policy.
    pub fn delete_by_key(&mut self, key: &str) -> StoreResult<()> {
        let index = self
            .position_by_key(key)
            .ok_or_else(|| StoreError::not_found(T::LABEL, key))?;
        self.delete_at(index)
    }

    fn delete_at(&mut self, index: usize) -> StoreResult<()> {
        match T::DELETE_POLICY {
            DeletePolicy::Remove => {
                self.records.remove(index);
                Ok(())
            }
            DeletePolicy::Deactivate => {
                self.records[index].deactivate();
                Ok(())
            }
            DeletePolicy::Never => Err(StoreError::InvalidArgument(format!(
                "{} records cannot be deleted",
                T::LABEL
            ))),
        }
    }

    fn position_by_key(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|record| {
            record
                .natural_key()
                .is_some_and(|candidate| T::KEY_MATCH.matches(candidate, key))
        })
    }
}
