//! Statistics reducers.

use chrono::{DateTime, NaiveDate, Utc};

use super::types::{AuditStatistics, GroupCounts, NotificationStatistics};
use crate::domain::{AuditLog, Notification};

/// Statistics over in-memory collections.
pub struct StatisticsService;

impl StatisticsService {
    /// Counts the records satisfying `predicate`.
    pub fn count_where<T>(records: &[T], predicate: impl Fn(&T) -> bool) -> usize {
        records.iter().filter(|record| predicate(record)).count()
    }

    /// Counts the records whose timestamp falls on `day` (UTC).
    pub fn count_on_day<T>(
        records: &[T],
        day: NaiveDate,
        timestamp: impl Fn(&T) -> DateTime<Utc>,
    ) -> usize {
        Self::count_where(records, |record| timestamp(record).date_naive() == day)
    }

    /// Groups the records by a categorical field and counts each group.
    pub fn group_counts<T>(records: &[T], category: impl Fn(&T) -> &str) -> GroupCounts {
        let mut counts = GroupCounts::new();
        for record in records {
            *counts.entry(category(record).to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Audit trail statistics. `today` selects the `logs_today` bucket.
    #[must_use]
    pub fn audit(logs: &[AuditLog], today: NaiveDate) -> AuditStatistics {
        AuditStatistics {
            total_logs: logs.len(),
            successful_actions: Self::count_where(logs, |log| log.is_successful),
            failed_actions: Self::count_where(logs, |log| !log.is_successful),
            logs_today: Self::count_on_day(logs, today, |log| log.timestamp),
            action_breakdown: Self::group_counts(logs, |log| log.action.as_str()),
            entity_type_breakdown: Self::group_counts(logs, |log| log.entity_type.as_str()),
        }
    }

    /// Notification statistics. Inactive notifications are ignored.
    #[must_use]
    pub fn notifications(notifications: &[Notification]) -> NotificationStatistics {
        let active: Vec<Notification> = notifications
            .iter()
            .filter(|n| n.is_active)
            .cloned()
            .collect();

        NotificationStatistics {
            total_active: active.len(),
            unread_count: Self::count_where(&active, |n| !n.is_read),
            read_count: Self::count_where(&active, |n| n.is_read),
            by_priority: Self::group_counts(&active, |n| n.priority.as_str()),
            by_type: Self::group_counts(&active, |n| n.notification_type.as_str()),
        }
    }
}
