//! Statistics result types.

use std::collections::BTreeMap;

use serde::Serialize;

/// Counts per category value.
pub type GroupCounts = BTreeMap<String, usize>;

/// Audit trail statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStatistics {
    /// All logs.
    pub total_logs: usize,
    /// Logs of successful actions.
    pub successful_actions: usize,
    /// Logs of failed actions.
    pub failed_actions: usize,
    /// Logs stamped today.
    pub logs_today: usize,
    /// Count per action.
    pub action_breakdown: GroupCounts,
    /// Count per entity type.
    pub entity_type_breakdown: GroupCounts,
}

/// Notification statistics, over active notifications only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationStatistics {
    /// Active notifications.
    pub total_active: usize,
    /// Active and unread.
    pub unread_count: usize,
    /// Active and read.
    pub read_count: usize,
    /// Count per priority.
    pub by_priority: GroupCounts,
    /// Count per notification type.
    pub by_type: GroupCounts,
}
