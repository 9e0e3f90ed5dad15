//! Staff notifications targeted by role or by username.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::eq_ignore_case;
use crate::store::{DeletePolicy, Resource};

/// Role value that targets every user.
pub const ALL_ROLES: &str = "All";

/// A notification, addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Notification {
    /// Surrogate id.
    pub notification_id: i32,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// System, Compliance, Policy, ...
    pub notification_type: String,
    /// High, Medium, Low, ...
    pub priority: String,
    /// Set by the store on create.
    pub created_date: DateTime<Utc>,
    /// Target role, or `All`.
    pub target_user_role: String,
    /// Explicitly targeted usernames.
    pub target_users: Vec<String>,
    /// Read flag.
    pub is_read: bool,
    /// When it was read.
    pub read_date: Option<DateTime<Utc>>,
    /// False once deleted.
    pub is_active: bool,
}

impl Notification {
    /// Returns true if an active notification targets this user.
    ///
    /// A notification reaches a user when it targets all roles, targets the
    /// user's role (if given), or names the user explicitly.
    #[must_use]
    pub fn is_visible_to(&self, username: &str, role: Option<&str>) -> bool {
        self.is_active
            && (self.target_user_role == ALL_ROLES
                || role.is_some_and(|role| eq_ignore_case(&self.target_user_role, role))
                || self
                    .target_users
                    .iter()
                    .any(|target| eq_ignore_case(target, username)))
    }

    /// Marks the notification read.
    pub fn mark_read(&mut self, now: DateTime<Utc>) {
        self.is_read = true;
        self.read_date = Some(now);
    }
}

impl Resource for Notification {
    const LABEL: &'static str = "Notification";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Deactivate;

    fn id(&self) -> i32 {
        self.notification_id
    }

    fn set_id(&mut self, id: i32) {
        self.notification_id = id;
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.created_date = now;
        self.is_read = false;
        self.is_active = true;
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn notification(role: &str, users: &[&str]) -> Notification {
        Notification {
            target_user_role: role.to_string(),
            target_users: users.iter().map(ToString::to_string).collect(),
            is_active: true,
            ..Notification::default()
        }
    }

    #[rstest]
    #[case(notification("All", &[]), "anyone", None, true)]
    #[case(notification("Manager", &[]), "teller1", Some("manager"), true)]
    #[case(notification("Manager", &[]), "teller1", Some("Teller"), false)]
    #[case(notification("Manager", &[]), "teller1", None, false)]
    #[case(notification("Manager", &["manager1"]), "MANAGER1", None, true)]
    fn test_visibility(
        #[case] notification: Notification,
        #[case] username: &str,
        #[case] role: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(notification.is_visible_to(username, role), expected);
    }

    #[test]
    fn test_inactive_is_never_visible() {
        let mut n = notification("All", &[]);
        n.deactivate();
        assert!(!n.is_visible_to("admin", None));
    }

    #[test]
    fn test_mark_read_stamps_date() {
        let now = Utc::now();
        let mut n = notification("All", &[]);
        n.mark_read(now);
        assert!(n.is_read);
        assert_eq!(n.read_date, Some(now));
    }
}
