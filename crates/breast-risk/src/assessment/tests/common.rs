use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::answers::QuizAnswers;
use crate::assessment::repository::{
    ReportId, ReportRepository, RepositoryError, StoredReport,
};
use crate::assessment::{assessment_router, AssessmentService};
use crate::config::AssessmentConfig;

pub(super) const ACTIVE_TREATMENT: &str =
    "Yes, I am currently receiving treatment for breast cancer";

pub(super) fn answers(pairs: &[(&str, &str)]) -> QuizAnswers {
    pairs.iter().copied().collect()
}

pub(super) fn first_degree_family() -> QuizAnswers {
    answers(&[("family_history", "Yes, I have first-degree relative with BC")])
}

/// BRCA carrier with a first-degree family history and early chest radiation.
pub(super) fn high_risk_answers() -> QuizAnswers {
    answers(&[
        ("age", "35"),
        ("family_history", "Yes, I have first-degree relative with BC"),
        (
            "brca_status",
            "Yes, I have tested positive for a BRCA1/BRCA2 mutation",
        ),
        ("chest_radiation", "Yes, before age 30"),
    ])
}

pub(super) fn lifestyle_answers() -> QuizAnswers {
    answers(&[
        ("age", "52"),
        ("alcohol_consumption", "2 or more drinks per day"),
        ("exercise_frequency", "Rarely or never"),
        ("hormone_therapy", "Yes, combined estrogen and progestin"),
    ])
}

pub(super) fn assessment_config() -> AssessmentConfig {
    AssessmentConfig {
        trace_calculations: true,
        history_limit: 2,
    }
}

pub(super) fn build_service() -> (AssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(repository.clone(), assessment_config());
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<StoredReport>>>,
}

impl ReportRepository for MemoryRepository {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn list_for_owner(
        &self,
        owner: &str,
        limit: usize,
    ) -> Result<Vec<StoredReport>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|record| record.owner.as_deref() == Some(owner))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct ConflictRepository;

impl ReportRepository for ConflictRepository {
    fn insert(&self, _record: StoredReport) -> Result<StoredReport, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        Ok(None)
    }

    fn list_for_owner(
        &self,
        _owner: &str,
        _limit: usize,
    ) -> Result<Vec<StoredReport>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl ReportRepository for UnavailableRepository {
    fn insert(&self, _record: StoredReport) -> Result<StoredReport, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ReportId) -> Result<Option<StoredReport>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_owner(
        &self,
        _owner: &str,
        _limit: usize,
    ) -> Result<Vec<StoredReport>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assessment_router_with_service(
    service: AssessmentService<MemoryRepository>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
