use breast_risk::assessment::{ReportId, ReportRepository, RepositoryError, StoredReport};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local report store; records are kept in insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReportRepository {
    records: Arc<Mutex<Vec<StoredReport>>>,
}

impl InMemoryReportRepository {
    fn records(&self) -> Result<MutexGuard<'_, Vec<StoredReport>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("report store lock poisoned".to_string()))
    }
}

impl ReportRepository for InMemoryReportRepository {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError> {
        let mut guard = self.records()?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        let guard = self.records()?;
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn list_for_owner(
        &self,
        owner: &str,
        limit: usize,
    ) -> Result<Vec<StoredReport>, RepositoryError> {
        let guard = self.records()?;
        Ok(guard
            .iter()
            .rev()
            .filter(|record| record.owner.as_deref() == Some(owner))
            .take(limit)
            .cloned()
            .collect())
    }
}
