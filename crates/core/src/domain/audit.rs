//! Append-only audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::filter::{DateRange, active_filter, eq_ignore_case};
use crate::store::{DeletePolicy, Resource};

/// One audited action. Immutable once created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLog {
    /// Surrogate id.
    pub log_id: i32,
    /// Set by the store on create.
    pub timestamp: DateTime<Utc>,
    /// Acting user's login.
    pub user_id: String,
    /// Acting user's display name.
    pub username: String,
    /// CREATE, UPDATE, APPROVE, DELETE, ...
    pub action: String,
    /// Account, Customer, Transaction, ...
    pub entity_type: String,
    /// Key of the affected record.
    pub entity_id: String,
    /// Client address.
    pub ip_address: String,
    /// Free-form details.
    pub details: String,
    /// Whether the action succeeded.
    pub is_successful: bool,
    /// Failure description; empty on success.
    pub error_message: String,
}

impl AuditLog {
    /// Returns true if the log was written by the given user.
    #[must_use]
    pub fn is_by_user(&self, user_id: &str) -> bool {
        eq_ignore_case(&self.user_id, user_id)
    }

    /// Returns true if the log refers to the given entity.
    #[must_use]
    pub fn refers_to(&self, entity_type: &str, entity_id: &str) -> bool {
        eq_ignore_case(&self.entity_type, entity_type) && eq_ignore_case(&self.entity_id, entity_id)
    }
}

/// Optional narrowing filters for audit log search.
#[derive(Debug, Clone, Default)]
pub struct AuditSearch {
    /// Inclusive timestamp bounds.
    pub range: DateRange,
    /// Exact action, case-insensitive.
    pub action: Option<String>,
    /// Exact entity type, case-insensitive.
    pub entity_type: Option<String>,
}

impl AuditSearch {
    /// Returns true if the log satisfies every given filter.
    #[must_use]
    pub fn matches(&self, log: &AuditLog) -> bool {
        self.range.contains(log.timestamp)
            && active_filter(self.action.as_deref())
                .is_none_or(|action| eq_ignore_case(&log.action, action))
            && active_filter(self.entity_type.as_deref())
                .is_none_or(|entity_type| eq_ignore_case(&log.entity_type, entity_type))
    }
}

impl Resource for AuditLog {
    const LABEL: &'static str = "Audit log";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Never;

    fn id(&self) -> i32 {
        self.log_id
    }

    fn set_id(&mut self, id: i32) {
        self.log_id = id;
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.timestamp = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn log(action: &str, entity_type: &str, at: DateTime<Utc>) -> AuditLog {
        AuditLog {
            action: action.into(),
            entity_type: entity_type.into(),
            timestamp: at,
            ..AuditLog::default()
        }
    }

    #[test]
    fn test_search_conjunction() {
        let at = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let entry = log("APPROVE", "Transaction", at);

        let search = AuditSearch {
            range: DateRange::new(Some(at - Duration::days(1)), Some(at)),
            action: Some("approve".into()),
            entity_type: Some("TRANSACTION".into()),
        };
        assert!(search.matches(&entry));

        let wrong_type = AuditSearch {
            entity_type: Some("Account".into()),
            ..search.clone()
        };
        assert!(!wrong_type.matches(&entry));

        let too_late = AuditSearch {
            range: DateRange::new(Some(at + Duration::seconds(1)), None),
            ..search
        };
        assert!(!too_late.matches(&entry));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(AuditSearch::default().matches(&log("CREATE", "Account", Utc::now())));
    }

    #[test]
    fn test_refers_to_ignores_case() {
        let entry = AuditLog {
            entity_type: "Account".into(),
            entity_id: "ACC1001".into(),
            user_id: "admin".into(),
            ..AuditLog::default()
        };
        assert!(entry.refers_to("account", "acc1001"));
        assert!(!entry.refers_to("account", "ACC1002"));
        assert!(entry.is_by_user("ADMIN"));
    }
}
