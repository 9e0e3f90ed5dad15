//! Generated report repository.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use webadmin_core::domain::Report;
use webadmin_core::filter::sort_newest_first;
use webadmin_core::reports::ReportKind;
use webadmin_core::store::{ResourceStore, StoreResult};

/// Shared handle to the report collection.
#[derive(Debug, Clone, Default)]
pub struct ReportRepository {
    store: Arc<RwLock<ResourceStore<Report>>>,
}

impl ReportRepository {
    /// Number of stored records, active or not.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    /// All reports, newest first.
    pub async fn list(&self) -> Vec<Report> {
        let mut reports = self.store.read().await.list().to_vec();
        sort_newest_first(&mut reports, |report| report.generated_date);
        reports
    }

    /// Finds a report by id.
    pub async fn find(&self, id: i32) -> StoreResult<Report> {
        self.store.read().await.find_by_id(id).cloned()
    }

    /// Generates and stores a report of the given kind for a period.
    pub async fn generate(
        &self,
        kind: ReportKind,
        generated_by: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> StoreResult<Report> {
        let report = Report::generate(kind, generated_by, start_date, end_date);
        self.store.write().await.create(report, Utc::now())
    }

    /// Removes a report.
    pub async fn delete(&self, id: i32) -> StoreResult<()> {
        self.store.write().await.delete_by_id(id)
    }
}
