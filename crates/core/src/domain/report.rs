//! Generated reports.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::reports::{ReportKind, ReportValue};
use crate::store::{DeletePolicy, Resource};

/// Status every generated report carries.
pub const REPORT_COMPLETED: &str = "Completed";

/// A generated report, addressed by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Surrogate id.
    pub report_id: i32,
    /// Display name.
    pub report_name: String,
    /// Report type label.
    pub report_type: String,
    /// Set by the store on create.
    pub generated_date: DateTime<Utc>,
    /// Requesting user.
    pub generated_by: String,
    /// Period start.
    pub start_date: DateTime<Utc>,
    /// Period end.
    pub end_date: DateTime<Utc>,
    /// Generation status.
    pub status: String,
    /// Typed payload.
    pub data: BTreeMap<String, ReportValue>,
}

impl Report {
    /// Builds an unsaved report of the given kind for the given period.
    #[must_use]
    pub fn generate(
        kind: ReportKind,
        generated_by: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            report_id: 0,
            report_name: kind.name().to_string(),
            report_type: kind.type_label().to_string(),
            generated_date: DateTime::<Utc>::default(),
            generated_by,
            start_date,
            end_date,
            status: REPORT_COMPLETED.to_string(),
            data: kind.payload(),
        }
    }
}

impl Resource for Report {
    const LABEL: &'static str = "Report";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::Remove;

    fn id(&self) -> i32 {
        self.report_id
    }

    fn set_id(&mut self, id: i32) {
        self.report_id = id;
    }

    fn derive_on_create(&mut self, now: DateTime<Utc>) {
        self.generated_date = now;
        self.status = REPORT_COMPLETED.to_string();
    }
}
