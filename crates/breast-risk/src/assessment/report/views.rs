use super::super::answers::QuizAnswers;
use super::super::factors::{FactorBuckets, FactorSplit};
use super::super::profile::UserProfile;
use super::super::scoring::RiskCategory;
use serde::{Deserialize, Serialize};

/// Immutable record handed to persistence and rendering collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub quiz_answers: QuizAnswers,
    /// Total score formatted with exactly one decimal.
    pub risk_score: String,
    pub risk_category: RiskCategory,
    pub user_profile: UserProfile,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub daily_plan: DailyPlan,
    pub report_data: ReportData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportData {
    pub summary: ReportSummary,
    pub risk_analysis: RiskAnalysis,
    pub action_plan: ActionPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_score: f64,
    pub unchangeable_score: f64,
    pub changeable_score: f64,
    pub risk_category: RiskCategory,
    pub risk_level: String,
    pub user_profile: UserProfile,
    pub profile_label: String,
    pub profile_description: String,
    pub age_range: String,
    pub risk_factor_count: usize,
    pub protective_factor_count: usize,
    pub headline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub identified_factors: Vec<String>,
    pub protective_factors: Vec<String>,
    pub factor_categories: FactorBuckets,
    pub unchangeable_vs_changeable: FactorSplit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub immediate: Vec<String>,
    pub ongoing: Vec<String>,
    pub follow_up: FollowUpPlan,
}

/// Follow-up checkpoints keyed by time offset from the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    #[serde(
        rename = "2_weeks",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub two_weeks: Option<String>,
    #[serde(rename = "1_month")]
    pub one_month: String,
    #[serde(rename = "3_months")]
    pub three_months: String,
    #[serde(rename = "6_months")]
    pub six_months: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub morning: MorningRoutine,
    pub afternoon: AfternoonRoutine,
    pub evening: EveningRoutine,
    pub weekly: WeeklyRoutine,
    pub monthly: Vec<String>,
    pub supplements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorningRoutine {
    pub exercise: String,
    pub nutrition: String,
    pub mindfulness: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AfternoonRoutine {
    pub nutrition: String,
    pub hydration: String,
    pub movement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EveningRoutine {
    pub nutrition: String,
    pub relaxation: String,
    pub sleep: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyRoutine {
    pub self_exam: String,
    pub exercise: String,
    pub strength: String,
    pub meal_prep: String,
}
