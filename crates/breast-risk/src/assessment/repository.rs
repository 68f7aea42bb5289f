use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::profile::UserProfile;
use super::report::views::HealthReport;
use super::scoring::RiskCategory;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ReportId(pub String);

/// A generated report as handed to storage, with the identity the store tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    pub id: ReportId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
    pub report: HealthReport,
}

impl StoredReport {
    pub fn history_view(&self) -> ReportHistoryView {
        ReportHistoryView {
            id: self.id.clone(),
            created_at: self.created_at,
            risk_score: self.report.risk_score.clone(),
            risk_category: self.report.risk_category,
            user_profile: self.report.user_profile,
            risk_factor_count: self.report.risk_factors.len(),
        }
    }
}

/// Storage abstraction; the relational store lives outside this crate.
pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: StoredReport) -> Result<StoredReport, RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<StoredReport>, RepositoryError>;
    /// Newest first, at most `limit` records.
    fn list_for_owner(&self, owner: &str, limit: usize)
        -> Result<Vec<StoredReport>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("report already exists")]
    Conflict,
    #[error("report not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Compact listing entry for an owner's assessment history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportHistoryView {
    pub id: ReportId,
    pub created_at: DateTime<Utc>,
    pub risk_score: String,
    pub risk_category: RiskCategory,
    pub user_profile: UserProfile,
    pub risk_factor_count: usize,
}
