//! Breast-health risk assessment: questionnaire answers in, scored report out.
//!
//! Scoring, profiling, and report assembly are pure functions over [`QuizAnswers`].
//! [`AssessmentService`] adds identity and storage around them, and
//! [`assessment_router`] exposes the service over HTTP.

pub mod answers;
pub mod catalog;
pub mod factors;
pub mod profile;
pub mod report;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use answers::QuizAnswers;
pub use catalog::{CatalogEntry, FactorCategory, FactorChain, RiskFactor};
pub use factors::{
    identify_protective_factors, identify_risk_factors, is_unchangeable_factor, FactorBuckets,
    FactorSplit,
};
pub use profile::{determine_user_profile, ProfileCharacteristics, UserProfile};
pub use report::views::{
    ActionPlan, DailyPlan, FollowUpPlan, HealthReport, ReportData, ReportSummary, RiskAnalysis,
};
pub use report::{
    assess, create_daily_plan, generate_comprehensive_report, generate_recommendations,
    ComprehensiveAssessment,
};
pub use repository::{
    ReportHistoryView, ReportId, ReportRepository, RepositoryError, StoredReport,
};
pub use router::{assessment_router, AssessmentRequest};
pub use scoring::{
    calculate_risk_score, categorize_risk, normalize_score, CalculationStep, RiskCategory,
    RiskScoreResult, ScoreCalculation,
};
pub use service::{AssessmentService, AssessmentServiceError, ScorePreview};
