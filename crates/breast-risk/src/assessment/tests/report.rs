use super::common::*;
use crate::assessment::profile::UserProfile;
use crate::assessment::report::{
    assess, build_follow_up, generate_comprehensive_report, ALCOHOL_RECOMMENDATION,
};
use crate::assessment::scoring::RiskCategory;
use serde_json::json;

#[test]
fn empty_answers_produce_a_complete_low_risk_report() {
    let report = generate_comprehensive_report(&answers(&[]));

    assert_eq!(report.risk_score, "12.5");
    assert_eq!(report.risk_category, RiskCategory::Low);
    assert_eq!(report.user_profile, UserProfile::Premenopausal);
    assert!(report.risk_factors.is_empty());
    assert_eq!(report.recommendations.len(), 7);
    assert_eq!(report.daily_plan.supplements.len(), 3);

    let summary = &report.report_data.summary;
    assert_eq!(summary.risk_level, "Low Risk");
    assert_eq!(summary.profile_label, UserProfile::Premenopausal.label());
    assert_eq!(
        summary.headline,
        "Your overall risk score is 12.5 out of 100 (Low Risk)"
    );

    let plan = &report.report_data.action_plan;
    assert_eq!(plan.immediate, report.recommendations[..3].to_vec());
    assert_eq!(plan.ongoing, report.recommendations[3..].to_vec());
    assert!(plan.follow_up.two_weeks.is_none());
}

#[test]
fn risk_score_string_matches_total_with_one_decimal() {
    for input in [
        answers(&[]),
        first_degree_family(),
        high_risk_answers(),
        lifestyle_answers(),
    ] {
        let assessment = assess(&input);
        assert_eq!(
            assessment.report.risk_score,
            format!("{:.1}", assessment.scores.total_score)
        );
        assert_eq!(
            assessment.report.report_data.summary.total_score,
            assessment.scores.total_score
        );
    }
}

#[test]
fn high_risk_premenopausal_report_escalates_screening() {
    let report = generate_comprehensive_report(&high_risk_answers());

    assert_eq!(report.risk_category, RiskCategory::High);
    assert_eq!(report.user_profile, UserProfile::Premenopausal);
    assert_eq!(report.risk_factors.len(), 3);
    assert!(report.recommendations[0].contains("screening early"));
    assert_eq!(report.recommendations.len(), 8);
    assert_eq!(report.daily_plan.supplements.len(), 4);
    assert!(report.report_data.action_plan.follow_up.two_weeks.is_some());

    let analysis = &report.report_data.risk_analysis;
    assert_eq!(analysis.factor_categories.genetic.len(), 2);
    assert_eq!(analysis.factor_categories.medical.len(), 1);
    assert!(analysis.factor_categories.hormonal.is_empty());
    assert_eq!(analysis.unchangeable_vs_changeable.unchangeable.len(), 3);
    assert!(analysis.unchangeable_vs_changeable.changeable.is_empty());
}

#[test]
fn lifestyle_factors_trigger_targeted_advice() {
    let report = generate_comprehensive_report(&lifestyle_answers());

    assert_eq!(report.user_profile, UserProfile::Postmenopausal);
    assert_eq!(report.risk_category, RiskCategory::Moderate);
    assert_eq!(report.risk_score, "17.8");
    assert!(report
        .recommendations
        .iter()
        .any(|item| item == ALCOHOL_RECOMMENDATION));
    assert_eq!(report.recommendations.len(), 4 + 1 + 2 + 2 + 4);

    let analysis = &report.report_data.risk_analysis;
    assert_eq!(analysis.factor_categories.lifestyle.len(), 2);
    assert_eq!(analysis.factor_categories.hormonal.len(), 1);
    assert_eq!(analysis.factor_categories.medical.len(), 1);
    assert_eq!(analysis.unchangeable_vs_changeable.changeable.len(), 3);
}

#[test]
fn one_drink_a_day_also_triggers_alcohol_advice() {
    let report =
        generate_comprehensive_report(&answers(&[("alcohol_consumption", "1 drink per day")]));
    assert!(report
        .recommendations
        .contains(&ALCOHOL_RECOMMENDATION.to_string()));
}

#[test]
fn protective_habits_are_reported_separately() {
    let report = generate_comprehensive_report(&answers(&[
        ("breastfeeding", "yes"),
        ("exercise_frequency", "daily"),
        ("diet_quality", "Excellent"),
    ]));

    let analysis = &report.report_data.risk_analysis;
    assert_eq!(analysis.protective_factors.len(), 2);
    assert_eq!(report.report_data.summary.protective_factor_count, 2);
    assert!(report.risk_factors.is_empty());
}

#[test]
fn survivors_get_care_team_follow_up() {
    let report = generate_comprehensive_report(&answers(&[("personal_bc_history", "yes")]));

    assert_eq!(report.user_profile, UserProfile::Survivor);
    assert_eq!(report.recommendations.len(), 4);
    let plan = &report.report_data.action_plan;
    assert_eq!(plan.immediate.len(), 3);
    assert_eq!(plan.ongoing.len(), 1);
    assert!(plan.follow_up.one_month.starts_with("Check in with your oncology team"));
    assert_eq!(
        report.daily_plan.monthly,
        UserProfile::Survivor
            .characteristics()
            .key_focus_areas
            .iter()
            .map(|area| area.to_string())
            .collect::<Vec<_>>()
    );
}

#[test]
fn profile_follow_up_overrides_category_follow_up() {
    let plan = build_follow_up(UserProfile::CurrentPatient, RiskCategory::High);

    assert!(plan.two_weeks.is_some());
    assert!(plan.one_month.starts_with("Check in with your oncology team"));
    assert!(plan.three_months.starts_with("Review your surveillance imaging"));

    let high = build_follow_up(UserProfile::Postmenopausal, RiskCategory::High);
    assert!(high.one_month.contains("screening plan"));

    let low = build_follow_up(UserProfile::Postmenopausal, RiskCategory::Low);
    assert!(low.two_weeks.is_none());
}

#[test]
fn follow_up_serializes_with_interval_keys() {
    let report = generate_comprehensive_report(&high_risk_answers());
    let value = serde_json::to_value(&report).expect("report serializes");
    let follow_up = &value["report_data"]["action_plan"]["follow_up"];

    assert!(follow_up.get("2_weeks").is_some());
    assert!(follow_up.get("1_month").is_some());
    assert!(follow_up.get("3_months").is_some());
    assert!(follow_up.get("6_months").is_some());
    assert_eq!(value["risk_category"], json!("high"));
    assert_eq!(value["user_profile"], json!("premenopausal"));

    let low = serde_json::to_value(generate_comprehensive_report(&answers(&[])))
        .expect("report serializes");
    assert!(low["report_data"]["action_plan"]["follow_up"]
        .get("2_weeks")
        .is_none());
}

#[test]
fn teenagers_get_awareness_guidance() {
    let report = generate_comprehensive_report(&answers(&[("age", "16")]));

    assert_eq!(report.user_profile, UserProfile::Teenager);
    assert!(report.recommendations[0].contains("normally look and feel"));
    assert_ne!(
        report.daily_plan.weekly.self_exam,
        generate_comprehensive_report(&answers(&[])).daily_plan.weekly.self_exam
    );
}

#[test]
fn report_echoes_the_submitted_answers() {
    let input = lifestyle_answers();
    let report = generate_comprehensive_report(&input);
    assert_eq!(report.quiz_answers, input);
}
