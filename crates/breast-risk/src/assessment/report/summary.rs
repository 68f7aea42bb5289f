use super::super::answers::QuizAnswers;
use super::super::factors::{
    identify_protective_factors, identify_risk_factors, FactorBuckets, FactorSplit,
};
use super::super::profile::{determine_user_profile, UserProfile};
use super::super::scoring::{
    calculate_risk_score, categorize_risk, CalculationStep, RiskCategory, RiskScoreResult,
};
use super::daily_plan::create_daily_plan;
use super::recommendations::generate_recommendations;
use super::views::{
    ActionPlan, FollowUpPlan, HealthReport, ReportData, ReportSummary, RiskAnalysis,
};
use serde::Serialize;

const IMMEDIATE_ACTIONS: usize = 3;

/// A report together with the calculation trace that produced its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComprehensiveAssessment {
    pub report: HealthReport,
    pub scores: RiskScoreResult,
    pub trace: Vec<CalculationStep>,
}

/// Runs every stage of the assessment and keeps the calculation trace.
pub fn assess(answers: &QuizAnswers) -> ComprehensiveAssessment {
    let calculation = calculate_risk_score(answers);
    let scores = calculation.result;
    let category = categorize_risk(scores.total_score);
    let profile = determine_user_profile(answers);
    let risk_factors = identify_risk_factors(answers);
    let protective_factors = identify_protective_factors(answers);
    let recommendations = generate_recommendations(profile, category, &risk_factors);
    let daily_plan = create_daily_plan(profile, category);

    let characteristics = profile.characteristics();
    let summary = ReportSummary {
        total_score: scores.total_score,
        unchangeable_score: scores.unchangeable_score,
        changeable_score: scores.changeable_score,
        risk_category: category,
        risk_level: category.label().to_string(),
        user_profile: profile,
        profile_label: profile.label().to_string(),
        profile_description: characteristics.description.to_string(),
        age_range: characteristics.age_range.to_string(),
        risk_factor_count: risk_factors.len(),
        protective_factor_count: protective_factors.len(),
        headline: format!(
            "Your overall risk score is {:.1} out of 100 ({})",
            scores.total_score,
            category.label()
        ),
    };

    let risk_analysis = RiskAnalysis {
        identified_factors: risk_factors.clone(),
        protective_factors,
        factor_categories: FactorBuckets::from_explanations(&risk_factors),
        unchangeable_vs_changeable: FactorSplit::from_explanations(&risk_factors),
    };

    let action_plan = ActionPlan {
        immediate: recommendations
            .iter()
            .take(IMMEDIATE_ACTIONS)
            .cloned()
            .collect(),
        ongoing: recommendations
            .iter()
            .skip(IMMEDIATE_ACTIONS)
            .cloned()
            .collect(),
        follow_up: build_follow_up(profile, category),
    };

    let report = HealthReport {
        quiz_answers: answers.clone(),
        risk_score: format!("{:.1}", scores.total_score),
        risk_category: category,
        user_profile: profile,
        risk_factors,
        recommendations,
        daily_plan,
        report_data: ReportData {
            summary,
            risk_analysis,
            action_plan,
        },
    };

    ComprehensiveAssessment {
        report,
        scores,
        trace: calculation.trace,
    }
}

/// Builds the full report for one questionnaire submission.
///
/// Total over any answer set: unknown answers are ignored and missing numbers use defaults.
pub fn generate_comprehensive_report(answers: &QuizAnswers) -> HealthReport {
    assess(answers).report
}

/// Category overrides apply first so that profile-specific wording wins when both apply.
pub(crate) fn build_follow_up(profile: UserProfile, category: RiskCategory) -> FollowUpPlan {
    let mut plan = FollowUpPlan {
        two_weeks: None,
        one_month: "Review how well you are keeping up with your daily plan and adjust habits"
            .to_string(),
        three_months: "Retake this assessment to track changes in your risk factors".to_string(),
        six_months: "Schedule a routine check-up and clinical breast exam".to_string(),
    };

    if category == RiskCategory::High {
        plan.two_weeks = Some(
            "Book an appointment with your healthcare provider to discuss these results"
                .to_string(),
        );
        plan.one_month =
            "Discuss a personalized screening plan, such as mammography or MRI, with your doctor"
                .to_string();
    }

    if matches!(profile, UserProfile::CurrentPatient | UserProfile::Survivor) {
        plan.one_month =
            "Check in with your oncology team about treatment progress and side effects"
                .to_string();
        plan.three_months =
            "Review your surveillance imaging and follow-up schedule with your care team"
                .to_string();
    }

    plan
}
