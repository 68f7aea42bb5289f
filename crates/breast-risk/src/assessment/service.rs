use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use super::answers::QuizAnswers;
use super::profile::{determine_user_profile, UserProfile};
use super::report::assess;
use super::repository::{RepositoryError, ReportId, ReportRepository, StoredReport};
use super::scoring::{
    calculate_risk_score, categorize_risk, CalculationStep, RiskCategory, RiskScoreResult,
};
use crate::config::AssessmentConfig;

/// Service composing report generation with the external report store.
pub struct AssessmentService<R> {
    repository: Arc<R>,
    config: AssessmentConfig,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("rpt-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: ReportRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: AssessmentConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Generate a report for one submission and hand it to the repository.
    pub fn assess(
        &self,
        owner: Option<String>,
        answers: QuizAnswers,
    ) -> Result<StoredReport, AssessmentServiceError> {
        let assessment = assess(&answers);
        let id = next_report_id();

        if self.config.trace_calculations {
            for step in &assessment.trace {
                debug!(report_id = %id.0, "{step}");
            }
        }

        let report = assessment.report;
        info!(
            report_id = %id.0,
            risk_score = %report.risk_score,
            risk_category = report.risk_category.as_str(),
            user_profile = report.user_profile.as_str(),
            risk_factors = report.risk_factors.len(),
            "risk assessment generated"
        );

        let stored = self.repository.insert(StoredReport {
            id,
            owner,
            created_at: Utc::now(),
            report,
        })?;
        Ok(stored)
    }

    /// Score an answer set without building or storing a report.
    pub fn preview(&self, answers: &QuizAnswers) -> ScorePreview {
        let calculation = calculate_risk_score(answers);
        ScorePreview {
            scores: calculation.result,
            risk_category: categorize_risk(calculation.result.total_score),
            user_profile: determine_user_profile(answers),
            trace: calculation
                .trace
                .iter()
                .map(CalculationStep::describe)
                .collect(),
        }
    }

    pub fn get(&self, id: &ReportId) -> Result<StoredReport, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// An owner's most recent reports, capped by the configured history limit.
    pub fn history(&self, owner: &str) -> Result<Vec<StoredReport>, AssessmentServiceError> {
        let records = self
            .repository
            .list_for_owner(owner, self.config.history_limit)?;
        Ok(records)
    }
}

/// Scores plus a readable calculation trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePreview {
    pub scores: RiskScoreResult,
    pub risk_category: RiskCategory,
    pub user_profile: UserProfile,
    pub trace: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
