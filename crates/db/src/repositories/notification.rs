//! Notification repository.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use webadmin_core::domain::Notification;
use webadmin_core::filter::sort_newest_first;
use webadmin_core::stats::{NotificationStatistics, StatisticsService};
use webadmin_core::store::{ResourceStore, StoreResult};

/// Shared handle to the notification collection.
#[derive(Debug, Clone, Default)]
pub struct NotificationRepository {
    store: Arc<RwLock<ResourceStore<Notification>>>,
}

impl NotificationRepository {
    /// Creates a repository holding the given records.
    #[must_use]
    pub fn new(records: Vec<Notification>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResourceStore::with_records(records))),
        }
    }

    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Lists notifications, newest first.
    pub async fn list(&self, active_only: bool) -> Vec<Notification> {
        let mut notifications = self.store.read().await.list_active(active_only);
        sort_newest_first(&mut notifications, |n| n.created_date);
        notifications
    }

    /// Active notifications visible to a user, newest first.
    pub async fn list_for_user(&self, username: &str, role: Option<&str>) -> Vec<Notification> {
        let mut notifications = self
            .store
            .read()
            .await
            .list_where(|n| n.is_visible_to(username, role));
        sort_newest_first(&mut notifications, |n| n.created_date);
        notifications
    }

    /// Unread notifications visible to a user, newest first.
    pub async fn list_unread_for_user(
        &self,
        username: &str,
        role: Option<&str>,
    ) -> Vec<Notification> {
        let mut notifications = self.list_for_user(username, role).await;
        notifications.retain(|n| !n.is_read);
        notifications
    }

    /// Finds a notification by id.
    pub async fn find(&self, id: i32) -> StoreResult<Notification> {
        self.store.read().await.find_by_id(id).cloned()
    }

    /// Publishes a notification.
    pub async fn create(&self, notification: Notification) -> StoreResult<Notification> {
        self.store.write().await.create(notification, Utc::now())
    }

    /// Marks a notification read.
    pub async fn mark_read(&self, id: i32) -> StoreResult<Notification> {
        let now = Utc::now();
        self.store
            .write()
            .await
            .update_by_id(id, |n| n.mark_read(now))
    }

    /// Deactivates a notification.
    pub async fn deactivate(&self, id: i32) -> StoreResult<()> {
        self.store.write().await.delete_by_id(id)
    }

    /// Counts over active notifications.
    pub async fn statistics(&self) -> NotificationStatistics {
        StatisticsService::notifications(self.store.read().await.list())
    }
}
