//! Operator user repository.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use webadmin_core::domain::SystemUser;
use webadmin_core::filter::eq_ignore_case;
use webadmin_core::store::{ResourceStore, StoreResult};

/// Shared handle to the user collection.
#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    store: Arc<RwLock<ResourceStore<SystemUser>>>,
}

impl UserRepository {
    /// Creates a repository holding the given records.
    #[must_use]
    pub fn new(records: Vec<SystemUser>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResourceStore::with_records(records))),
        }
    }

    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// Lists users in insertion order.
    pub async fn list(&self, active_only: bool) -> Vec<SystemUser> {
        self.store.read().await.list_active(active_only)
    }

    /// Users holding a role, compared case-insensitively.
    pub async fn list_by_role(&self, role: &str) -> Vec<SystemUser> {
        self.store
            .read()
            .await
            .list_where(|user| eq_ignore_case(&user.role, role))
    }

    /// Finds a user by username.
    pub async fn find(&self, username: &str) -> StoreResult<SystemUser> {
        self.store.read().await.find_by_key(username).cloned()
    }

    /// Creates a user.
    pub async fn create(&self, user: SystemUser) -> StoreResult<SystemUser> {
        self.store.write().await.create(user, Utc::now())
    }

    /// Changes a user's role.
    pub async fn update_role(&self, username: &str, role: String) -> StoreResult<SystemUser> {
        self.store
            .write()
            .await
            .update_by_key(username, |user| user.role = role)
    }

    /// Replaces a user's permission set.
    pub async fn update_permissions(
        &self,
        username: &str,
        permissions: Vec<String>,
    ) -> StoreResult<SystemUser> {
        self.store
            .write()
            .await
            .update_by_key(username, |user| user.set_permissions(permissions))
    }

    /// Deactivates a user and returns the updated record.
    pub async fn deactivate(&self, username: &str) -> StoreResult<SystemUser> {
        let mut store = self.store.write().await;
        store.delete_by_key(username)?;
        store.find_by_key(username).cloned()
    }

    /// Stamps the last login time.
    pub async fn record_login(&self, username: &str) -> StoreResult<SystemUser> {
        let now = Utc::now();
        self.store
            .write()
            .await
            .update_by_key(username, |user| user.last_login_date = Some(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use webadmin_core::store::StoreError;

    #[tokio::test]
    async fn test_role_lookup_ignores_case() {
        let repo = UserRepository::new(seed::users(Utc::now()));
        let managers = repo.list_by_role("MANAGER").await;
        assert_eq!(managers.len(), 1);
        assert_eq!(managers[0].username, "manager1");
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = UserRepository::new(seed::users(Utc::now()));
        let err = repo
            .create(SystemUser {
                username: "admin2".into(),
                email: "admin@bank.com".into(),
                ..SystemUser::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::Conflict("Email already exists"));
        assert_eq!(repo.list(false).await.len(), 3);
    }

    #[tokio::test]
    async fn test_deactivate_and_login() {
        let repo = UserRepository::new(seed::users(Utc::now()));
        let before = Utc::now();

        let teller = repo.deactivate("teller1").await.unwrap();
        assert!(!teller.is_active);
        assert_eq!(repo.list(true).await.len(), 2);

        let admin = repo.record_login("admin").await.unwrap();
        assert!(admin.last_login_date.is_some_and(|at| at >= before));
    }

    #[tokio::test]
    async fn test_permissions_replace_previous_set() {
        let repo = UserRepository::new(seed::users(Utc::now()));
        let user = repo
            .update_permissions("teller1", vec!["VIEW_REPORTS".into(), "VIEW_REPORTS".into()])
            .await
            .unwrap();
        assert_eq!(user.permissions.len(), 1);
        assert!(user.permissions.contains("VIEW_REPORTS"));
    }
}
