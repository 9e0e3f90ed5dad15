//! Transaction repository.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use webadmin_core::domain::Transaction;
use webadmin_core::filter::sort_newest_first;
use webadmin_core::store::{ResourceStore, StoreResult};

/// Shared handle to the transaction collection.
#[derive(Debug, Clone, Default)]
pub struct TransactionRepository {
    store: Arc<RwLock<ResourceStore<Transaction>>>,
}

impl TransactionRepository {
    /// Creates a repository holding the given records.
    #[must_use]
    pub fn new(records: Vec<Transaction>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResourceStore::with_records(records))),
        }
    }

    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// All transactions, newest first.
    pub async fn list(&self) -> Vec<Transaction> {
        let mut transactions = self.store.read().await.list().to_vec();
        sort_newest_first(&mut transactions, |txn| txn.transaction_date);
        transactions
    }

    /// Transactions touching an account on either side, newest first.
    pub async fn list_for_account(&self, account_number: &str) -> Vec<Transaction> {
        let mut transactions = self
            .store
            .read()
            .await
            .list_where(|txn| txn.involves(account_number));
        sort_newest_first(&mut transactions, |txn| txn.transaction_date);
        transactions
    }

    /// Finds a transaction by number.
    pub async fn find(&self, transaction_number: &str) -> StoreResult<Transaction> {
        self.store.read().await.find_by_key(transaction_number).cloned()
    }

    /// Records a new pending transaction.
    pub async fn create(&self, transaction: Transaction) -> StoreResult<Transaction> {
        self.store.write().await.create(transaction, Utc::now())
    }

    /// Approves a pending transaction.
    pub async fn approve(
        &self,
        transaction_number: &str,
        approved_by: String,
    ) -> StoreResult<Transaction> {
        self.store
            .write()
            .await
            .try_update_by_key(transaction_number, |txn| txn.approve(approved_by))
    }

    /// Rejects a pending transaction.
    pub async fn reject(&self, transaction_number: &str, reason: &str) -> StoreResult<Transaction> {
        self.store
            .write()
            .await
            .try_update_by_key(transaction_number, |txn| txn.reject(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use rust_decimal_macros::dec;
    use webadmin_core::domain::TransactionStatus;

    fn candidate() -> Transaction {
        Transaction {
            from_account: "ACC1002".into(),
            to_account: "ACC1001".into(),
            amount: dec!(100),
            description: "Loan".into(),
            ..Transaction::default()
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = TransactionRepository::new(seed::transactions(Utc::now()));
        let created = repo.create(candidate()).await.unwrap();

        let numbers: Vec<_> = repo
            .list()
            .await
            .into_iter()
            .map(|txn| txn.transaction_number)
            .collect();
        assert_eq!(numbers, vec![created.transaction_number.as_str(), "TXN002", "TXN001"]);
    }

    #[tokio::test]
    async fn test_list_for_account_matches_either_side() {
        let repo = TransactionRepository::new(seed::transactions(Utc::now()));
        assert_eq!(repo.list_for_account("ACC1002").await.len(), 1);
        assert_eq!(repo.list_for_account("ACC1001").await.len(), 1);
        assert!(repo.list_for_account("ACC9999").await.is_empty());
    }

    #[tokio::test]
    async fn test_approve_and_reject() {
        let repo = TransactionRepository::default();
        let first = repo.create(candidate()).await.unwrap();
        let second = repo.create(candidate()).await.unwrap();
        assert_eq!(first.transaction_number, "TXN000001");

        let approved = repo.approve("TXN000001", "manager1".into()).await.unwrap();
        assert_eq!(approved.status, TransactionStatus::Completed);
        assert_eq!(approved.approved_by, "manager1");

        let rejected = repo.reject(&second.transaction_number, "Duplicate").await.unwrap();
        assert_eq!(rejected.status, TransactionStatus::Rejected);
        assert_eq!(rejected.description, "Loan | Rejection Reason: Duplicate");

        assert!(repo.reject("TXN000001", "late").await.is_err());
    }
}
