//! Back-office staff accounts.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{DeletePolicy, KeyMatch, Resource, Unique};

/// A staff user, addressed by username.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemUser {
    /// Surrogate id.
    pub user_id: i32,
    /// Login name (natural key, unique).
    pub username: String,
    /// Email (unique).
    pub email: String,
    /// Display name.
    pub full_name: String,
    /// Administrator, Manager, Teller, ...
    pub role: String,
    /// Department.
    pub department: String,
    /// Home branch, if any.
    pub branch_id: Option<i32>,
    /// False once deactivated.
    pub is_active: bool,
    /// Set by the store on create.
    pub created_date: DateTime<Utc>,
    /// Last recorded login.
    pub last_login_date: Option<DateTime<Utc>>,
    /// Capability strings such as `VIEW_ACCOUNTS`.
    pub permissions: BTreeSet<String>,
}

impl SystemUser {
    /// Replaces the permission set.
    pub fn set_permissions(&mut self, permissions: impl IntoIterator<Item = String>) {
        self.permissions = permissions.into_iter().collect();
    }
}

fn username(user: &SystemUser) -> &str {
    &user.username
}

fn email(user: &SystemUser) -> &str {
    &user.email
}

impl Resource for SystemUser {
    const LABEL: &'static str = "User";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Deactivate;

    fn id(&self) -> i32 {
        self.user_id
    }

    fn set_id(&mut self, id: i32) {
        self.user_id = id;
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.username)
    }

    fn unique_fields() -> Vec<Unique<Self>> {
        vec![
            Unique {
                field: username,
                matching: KeyMatch::Exact,
                message: "Username already exists",
            },
            Unique {
                field: email,
                matching: KeyMatch::Exact,
                message: "Email already exists",
            },
        ]
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.created_date = now;
        self.is_active = true;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}
