//! Runtime system settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::{DeletePolicy, KeyMatch, Resource, Unique};

/// A setting, addressed case-insensitively by its key.
///
/// Values are stored as strings whatever their logical type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSetting {
    /// Surrogate id.
    pub setting_id: i32,
    /// Key (natural key, unique ignoring case).
    pub setting_key: String,
    /// Raw value.
    pub setting_value: String,
    /// Grouping category.
    pub setting_category: String,
    /// Human-readable description.
    pub description: String,
    /// Stamped on create and on every update.
    pub last_modified: DateTime<Utc>,
    /// Who last changed it.
    pub modified_by: String,
    /// False once deleted.
    pub is_active: bool,
}

/// Value update for a setting.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingUpdate {
    /// New value.
    pub setting_value: String,
    /// New description.
    pub description: String,
    /// Who made the change.
    pub modified_by: String,
}

impl SystemSetting {
    /// Applies a value update and stamps the modification time.
    pub fn apply_update(&mut self, update: SettingUpdate, now: DateTime<Utc>) {
        self.setting_value = update.setting_value;
        self.description = update.description;
        self.modified_by = update.modified_by;
        self.last_modified = now;
    }
}

fn setting_key(setting: &SystemSetting) -> &str {
    &setting.setting_key
}

impl Resource for SystemSetting {
    const LABEL: &'static str = "Setting";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Deactivate;
    const KEY_MATCH: KeyMatch = KeyMatch::IgnoreCase;

    fn id(&self) -> i32 {
        self.setting_id
    }

    fn set_id(&mut self, id: i32) {
        self.setting_id = id;
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.setting_key)
    }

    fn unique_fields() -> Vec<Unique<Self>> {
        vec![Unique {
            field: setting_key,
            matching: KeyMatch::IgnoreCase,
            message: "Setting with this key already exists",
        }]
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.last_modified = now;
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
    use chrono::Duration;

    #[test]
    fn test_apply_update_keeps_key_and_category() {
        let before = Utc::now() - Duration::days(30);
        let now = Utc::now();
        let mut setting = SystemSetting {
            setting_key: "SESSION_TIMEOUT_MINUTES".into(),
            setting_value: "30".into(),
            setting_category: "Security".into(),
            last_modified: before,
            ..SystemSetting::default()
        };

        setting.apply_update(
            SettingUpdate {
                setting_value: "45".into(),
                description: "Longer sessions".into(),
                modified_by: "admin".into(),
            },
            now,
        );

        assert_eq!(setting.setting_key, "SESSION_TIMEOUT_MINUTES");
        assert_eq!(setting.setting_category, "Security");
        assert_eq!(setting.setting_value, "45");
        assert_eq!(setting.modified_by, "admin");
        assert_eq!(setting.last_modified, now);
    }
}
