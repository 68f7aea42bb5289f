use super::super::profile::UserProfile;
use super::super::scoring::RiskCategory;
use super::views::{AfternoonRoutine, DailyPlan, EveningRoutine, MorningRoutine, WeeklyRoutine};

const BREAST_AWARENESS: &str =
    "Practice breast awareness by noticing how your breasts normally look and feel";
const SELF_EXAM: &str = "Perform a thorough breast self-exam and note any changes";

const SUPPLEMENTS: &[&str] = &[
    "Vitamin D (ask your doctor to check your levels first)",
    "Omega-3 fatty acids from fish oil or algae",
    "Calcium for bone health",
];
const HIGH_RISK_SUPPLEMENT: &str =
    "Ask your healthcare provider about additional support such as folate or a multivitamin";

pub fn create_daily_plan(profile: UserProfile, category: RiskCategory) -> DailyPlan {
    let self_exam = match profile {
        UserProfile::Teenager => BREAST_AWARENESS,
        _ => SELF_EXAM,
    };

    let mut supplements: Vec<String> = SUPPLEMENTS.iter().map(|item| item.to_string()).collect();
    if category == RiskCategory::High {
        supplements.push(HIGH_RISK_SUPPLEMENT.to_string());
    }

    DailyPlan {
        morning: MorningRoutine {
            exercise: "30 minutes of brisk walking, cycling, or yoga".to_string(),
            nutrition: "Breakfast with fiber, fresh fruit, and whole grains".to_string(),
            mindfulness: "Five minutes of deep breathing or meditation".to_string(),
        },
        afternoon: AfternoonRoutine {
            nutrition: "Lunch built around vegetables, legumes, and lean protein".to_string(),
            hydration: "Drink water steadily, about eight glasses across the day".to_string(),
            movement: "A 10-minute walk or stretch break after lunch".to_string(),
        },
        evening: EveningRoutine {
            nutrition: "A light dinner that includes cruciferous vegetables".to_string(),
            relaxation: "Screen-free wind-down for 30 minutes before bed".to_string(),
            sleep: "Seven to nine hours of sleep in a dark, cool room".to_string(),
        },
        weekly: WeeklyRoutine {
            self_exam: self_exam.to_string(),
            exercise: "150 minutes of moderate aerobic activity".to_string(),
            strength: "Two strength-training sessions".to_string(),
            meal_prep: "Plan meals around plant-based foods and limit processed meat".to_string(),
        },
        monthly: profile
            .characteristics()
            .key_focus_areas
            .iter()
            .map(|area| area.to_string())
            .collect(),
        supplements,
    }
}
