//! Deterministic breast-health risk scoring with life-stage profiling and personalized
//! action plans.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;

pub use assessment::{
    assess, calculate_risk_score, categorize_risk, determine_user_profile,
    generate_comprehensive_report, generate_recommendations, HealthReport, QuizAnswers,
    RiskCategory, RiskScoreResult, UserProfile,
};
pub use config::{AppConfig, AppEnvironment, AssessmentConfig, ServerConfig, TelemetryConfig};
pub use error::AppError;
