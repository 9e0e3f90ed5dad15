//! Audit trail repository.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use webadmin_core::domain::{AuditLog, AuditSearch};
use webadmin_core::filter::sort_newest_first;
use webadmin_core::stats::{AuditStatistics, StatisticsService};
use webadmin_core::store::{AppendOnlyStore, StoreResult};

/// Shared handle to the append-only audit trail.
#[derive(Debug, Clone, Default)]
pub struct AuditLogRepository {
    store: Arc<RwLock<AppendOnlyStore<AuditLog>>>,
}

impl AuditLogRepository {
    /// Creates a repository holding the given records.
    #[must_use]
    pub fn new(records: Vec<AuditLog>) -> Self {
        Self {
            store: Arc::new(RwLock::new(AppendOnlyStore::with_records(records))),
        }
    }

    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    async fn newest_first(&self, predicate: impl Fn(&AuditLog) -> bool) -> Vec<AuditLog> {
        let mut logs = self.store.read().await.list_where(predicate);
        sort_newest_first(&mut logs, |log| log.timestamp);
        logs
    }

    /// The newest `limit` logs.
    pub async fn list(&self, limit: usize) -> Vec<AuditLog> {
        let mut logs = self.newest_first(|_| true).await;
        logs.truncate(limit);
        logs
    }

    /// Logs written by a user, newest first.
    pub async fn list_by_user(&self, user_id: &str) -> Vec<AuditLog> {
        self.newest_first(|log| log.is_by_user(user_id)).await
    }

    /// Logs about one entity, newest first.
    pub async fn list_for_entity(&self, entity_type: &str, entity_id: &str) -> Vec<AuditLog> {
        self.newest_first(|log| log.refers_to(entity_type, entity_id))
            .await
    }

    /// Logs matching every given filter, newest first.
    pub async fn search(&self, search: &AuditSearch) -> Vec<AuditLog> {
        self.newest_first(|log| search.matches(log)).await
    }

    /// Finds a log by id.
    pub async fn find(&self, id: i32) -> StoreResult<AuditLog> {
        self.store.read().await.find_by_id(id).cloned()
    }

    /// Appends a log, stamped with the current time.
    pub async fn append(&self, log: AuditLog) -> StoreResult<AuditLog> {
        self.store.write().await.append(log, Utc::now())
    }

    /// Counts over the whole trail.
    pub async fn statistics(&self) -> AuditStatistics {
        StatisticsService::audit(self.store.read().await.list(), Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use chrono::{DateTime, Duration};
    use webadmin_core::filter::DateRange;

    fn ids(logs: &[AuditLog]) -> Vec<i32> {
        logs.iter().map(|log| log.log_id).collect()
    }

    fn repo(now: DateTime<Utc>) -> AuditLogRepository {
        AuditLogRepository::new(seed::audit_logs(now))
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_limited() {
        let repo = repo(Utc::now());
        assert_eq!(ids(&repo.list(100).await), vec![4, 3, 2, 1]);
        assert_eq!(ids(&repo.list(2).await), vec![4, 3]);
    }

    #[tokio::test]
    async fn test_user_and_entity_lookups_ignore_case() {
        let repo = repo(Utc::now());
        assert_eq!(ids(&repo.list_by_user("TELLER1").await), vec![4, 3]);
        assert_eq!(ids(&repo.list_for_entity("transaction", "txn001").await), vec![2]);
    }

    #[tokio::test]
    async fn test_search_conjunction_and_inverted_range() {
        let now = Utc::now();
        let repo = repo(now);

        let recent = AuditSearch {
            range: DateRange::new(Some(now - Duration::minutes(45)), None),
            entity_type: Some("Transaction".into()),
            ..AuditSearch::default()
        };
        assert_eq!(ids(&repo.search(&recent).await), vec![4]);

        let inverted = AuditSearch {
            range: DateRange::new(Some(now), Some(now - Duration::days(1))),
            ..AuditSearch::default()
        };
        assert!(repo.search(&inverted).await.is_empty());
    }

    #[tokio::test]
    async fn test_append_and_statistics() {
        let repo = repo(Utc::now());
        let appended = repo
            .append(AuditLog {
                action: "LOGIN".into(),
                entity_type: "User".into(),
                is_successful: true,
                ..AuditLog::default()
            })
            .await
            .unwrap();
        assert_eq!(appended.log_id, 5);

        let stats = repo.statistics().await;
        assert_eq!(stats.total_logs, 5);
        assert_eq!(stats.failed_actions, 1);
        assert_eq!(stats.successful_actions, 4);
        assert_eq!(stats.action_breakdown["LOGIN"], 1);
    }
}
