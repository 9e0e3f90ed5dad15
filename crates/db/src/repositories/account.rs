//! Account repository.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use webadmin_core::domain::Account;
use webadmin_core::store::{ResourceStore, StoreResult};

/// Shared handle to the account collection.
#[derive(Debug, Clone, Default)]
pub struct AccountRepository {
    store: Arc<RwLock<ResourceStore<Account>>>,
}

impl AccountRepository {
    /// Creates a repository holding the given records.
    #[must_use]
    pub fn new(records: Vec<Account>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResourceStore::with_records(records))),
        }
    }

    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Lists accounts in insertion order.
    pub async fn list(&self, active_only: bool) -> Vec<Account> {
        self.store.read().await.list_active(active_only)
    }

    /// Finds an account by number.
    pub async fn find(&self, account_number: &str) -> StoreResult<Account> {
        self.store.read().await.find_by_key(account_number).cloned()
    }

    /// Opens an account.
    pub async fn create(&self, account: Account) -> StoreResult<Account> {
        self.store.write().await.create(account, Utc::now())
    }

    /// Overwrites the balance.
    pub async fn update_balance(
        &self,
        account_number: &str,
        balance: Decimal,
    ) -> StoreResult<Account> {
        self.store
            .write()
            .await
            .update_by_key(account_number, |account| account.balance = balance)
    }

    /// Sets the status and the derived active flag.
    pub async fn update_status(
        &self,
        account_number: &str,
        status: String,
    ) -> StoreResult<Account> {
        self.store
            .write()
            .await
            .update_by_key(account_number, |account| account.set_status(status))
    }

    /// Removes an account.
    pub async fn delete(&self, account_number: &str) -> StoreResult<()> {
        self.store.write().await.delete_by_key(account_number)
    }
}
