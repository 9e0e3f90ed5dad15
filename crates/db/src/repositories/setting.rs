//! Configuration setting repository.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use webadmin_core::domain::{SettingUpdate, SystemSetting};
use webadmin_core::filter::eq_ignore_case;
use webadmin_core::store::{ResourceStore, StoreResult};

/// Shared handle to the settings collection. Keys compare case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct SettingRepository {
    store: Arc<RwLock<ResourceStore<SystemSetting>>>,
}

impl SettingRepository {
    /// Creates a repository holding the given records.
    #[must_use]
    pub fn new(records: Vec<SystemSetting>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResourceStore::with_records(records))),
        }
    }

    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Lists settings in insertion order.
    pub async fn list(&self, active_only: bool) -> Vec<SystemSetting> {
        self.store.read().await.list_active(active_only)
    }

    /// Settings in a category, inactive ones included.
    pub async fn list_by_category(&self, category: &str) -> Vec<SystemSetting> {
        self.store
            .read()
            .await
            .list_where(|s| eq_ignore_case(&s.setting_category, category))
    }

    /// Finds a setting by key.
    pub async fn find(&self, key: &str) -> StoreResult<SystemSetting> {
        self.store.read().await.find_by_key(key).cloned()
    }

    /// Adds a setting.
    pub async fn create(&self, setting: SystemSetting) -> StoreResult<SystemSetting> {
        self.store.write().await.create(setting, Utc::now())
    }

    /// Changes a setting's value and stamps the modification.
    pub async fn update(&self, key: &str, update: SettingUpdate) -> StoreResult<SystemSetting> {
        let now = Utc::now();
        self.store
            .write()
            .await
            .update_by_key(key, |setting| setting.apply_update(update, now))
    }

    /// Deactivates a setting.
    pub async fn deactivate(&self, key: &str) -> StoreResult<()> {
        self.store.write().await.delete_by_key(key)
    }
}
