//! Customer repository.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use webadmin_core::domain::{Customer, CustomerSearch, CustomerUpdate};
use webadmin_core::store::{ResourceStore, StoreResult};

/// Shared handle to the customer collection.
#[derive(Debug, Clone, Default)]
pub struct CustomerRepository {
    store: Arc<RwLock<ResourceStore<Customer>>>,
}

impl CustomerRepository {
    /// Creates a repository holding the given records.
    #[must_use]
    pub fn new(records: Vec<Customer>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResourceStore::with_records(records))),
        }
    }

    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Lists customers in insertion order.
    pub async fn list(&self, active_only: bool) -> Vec<Customer> {
        self.store.read().await.list_active(active_only)
    }

    /// Customers matching every given filter, active or not.
    pub async fn search(&self, search: &CustomerSearch) -> Vec<Customer> {
        self.store
            .read()
            .await
            .list_where(|customer| search.matches(customer))
    }

    /// Finds a customer by number.
    pub async fn find(&self, customer_number: &str) -> StoreResult<Customer> {
        self.store.read().await.find_by_key(customer_number).cloned()
    }

    /// Registers a customer.
    pub async fn create(&self, customer: Customer) -> StoreResult<Customer> {
        self.store.write().await.create(customer, Utc::now())
    }

    /// Overwrites the profile fields.
    pub async fn update(
        &self,
        customer_number: &str,
        update: CustomerUpdate,
    ) -> StoreResult<Customer> {
        self.store
            .write()
            .await
            .update_by_key(customer_number, |customer| customer.apply_update(update))
    }

    /// Sets the KYC status.
    pub async fn update_kyc(
        &self,
        customer_number: &str,
        kyc_status: String,
    ) -> StoreResult<Customer> {
        self.store
            .write()
            .await
            .update_by_key(customer_number, |customer| customer.kyc_status = kyc_status)
    }

    /// Deactivates a customer.
    pub async fn deactivate(&self, customer_number: &str) -> StoreResult<()> {
        self.store.write().await.delete_by_key(customer_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[tokio::test]
    async fn test_created_customer_number_follows_max_id() {
        let repo = CustomerRepository::new(seed::customers());
        let created = repo
            .create(Customer {
                email: "new@example.com".into(),
                ..Customer::default()
            })
            .await
            .unwrap();

        assert_eq!(created.customer_number, "CUST000003");
        assert!(repo.find("CUST000003").await.is_ok());
    }

    #[tokio::test]
    async fn test_deactivate_hides_from_active_listing() {
        let repo = CustomerRepository::new(seed::customers());
        repo.deactivate("CUST001").await.unwrap();

        assert_eq!(repo.list(true).await.len(), 1);
        assert!(!repo.find("CUST001").await.unwrap().is_active);
    }

    #[tokio::test]
    async fn test_search_by_email_and_phone() {
        let repo = CustomerRepository::new(seed::customers());
        let search = CustomerSearch {
            email: Some("DOE".into()),
            phone: Some("0101".into()),
        };
        let found = repo.search(&search).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].customer_number, "CUST001");
    }

    #[tokio::test]
    async fn test_update_kyc() {
        let repo = CustomerRepository::new(seed::customers());
        let updated = repo.update_kyc("CUST002", "Pending".into()).await.unwrap();
        assert_eq!(updated.kyc_status, "Pending");
    }
}
