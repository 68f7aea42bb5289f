use super::answers::QuizAnswers;
use serde::{Deserialize, Serialize};

const DEFAULT_AGE: i64 = 30;
const TEENAGE_CEILING: i64 = 20;
const POSTMENOPAUSAL_AGE: i64 = 50;

/// Life-stage cohort used to tailor recommendations and the daily plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserProfile {
    Teenager,
    Premenopausal,
    Postmenopausal,
    CurrentPatient,
    Survivor,
}

impl UserProfile {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Teenager,
            Self::Premenopausal,
            Self::Postmenopausal,
            Self::CurrentPatient,
            Self::Survivor,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Teenager => "teenager",
            Self::Premenopausal => "premenopausal",
            Self::Postmenopausal => "postmenopausal",
            Self::CurrentPatient => "current_patient",
            Self::Survivor => "survivor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Teenager => "Teenager",
            Self::Premenopausal => "Premenopausal",
            Self::Postmenopausal => "Postmenopausal",
            Self::CurrentPatient => "Current Patient",
            Self::Survivor => "Survivor",
        }
    }

    pub fn characteristics(self) -> &'static ProfileCharacteristics {
        match self {
            Self::Teenager => &TEENAGER,
            Self::Premenopausal => &PREMENOPAUSAL,
            Self::Postmenopausal => &POSTMENOPAUSAL,
            Self::CurrentPatient => &CURRENT_PATIENT,
            Self::Survivor => &SURVIVOR,
        }
    }
}

/// Static descriptor for a life-stage profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileCharacteristics {
    pub age_range: &'static str,
    pub description: &'static str,
    pub key_focus_areas: &'static [&'static str],
    pub prevention_priorities: &'static [&'static str],
}

static TEENAGER: ProfileCharacteristics = ProfileCharacteristics {
    age_range: "13-19",
    description: "Building lifelong healthy habits and early breast awareness",
    key_focus_areas: &[
        "Healthy lifestyle habits",
        "Breast awareness education",
        "Physical activity",
        "Nutrition",
    ],
    prevention_priorities: &[
        "Establish regular exercise routines",
        "Avoid alcohol and smoking",
        "Maintain a healthy weight",
    ],
};

static PREMENOPAUSAL: ProfileCharacteristics = ProfileCharacteristics {
    age_range: "20-49",
    description: "Active reproductive years with a focus on prevention and early detection",
    key_focus_areas: &[
        "Monthly self-exams",
        "Hormonal health",
        "Stress management",
        "Regular screening",
    ],
    prevention_priorities: &[
        "Know your family history",
        "Limit alcohol intake",
        "Stay physically active",
        "Discuss screening timelines with your doctor",
    ],
};

static POSTMENOPAUSAL: ProfileCharacteristics = ProfileCharacteristics {
    age_range: "50+",
    description: "Post-menopause years when age-related risk rises and regular screening matters most",
    key_focus_areas: &[
        "Annual mammograms",
        "Weight management",
        "Bone health",
        "Hormone therapy review",
    ],
    prevention_priorities: &[
        "Keep up with annual mammography",
        "Maintain a healthy weight after menopause",
        "Review hormone replacement therapy with your doctor",
    ],
};

static CURRENT_PATIENT: ProfileCharacteristics = ProfileCharacteristics {
    age_range: "Any age",
    description: "Currently undergoing breast cancer treatment and focused on recovery support",
    key_focus_areas: &[
        "Treatment support",
        "Side-effect management",
        "Nutrition during treatment",
        "Emotional wellbeing",
    ],
    prevention_priorities: &[
        "Follow your oncology team's treatment plan",
        "Report new symptoms promptly",
        "Lean on support networks",
    ],
};

static SURVIVOR: ProfileCharacteristics = ProfileCharacteristics {
    age_range: "Any age",
    description: "Life after breast cancer treatment with a focus on surveillance and recurrence prevention",
    key_focus_areas: &[
        "Recurrence prevention",
        "Surveillance imaging",
        "Long-term wellness",
        "Survivorship care",
    ],
    prevention_priorities: &[
        "Keep every surveillance appointment",
        "Stay active and maintain a healthy weight",
        "Limit alcohol",
    ],
};

/// Classifies answers into a life-stage profile; the first matching guard wins.
///
/// Treatment and history flags outrank age, and anyone not explicitly reporting a
/// postmenopausal menstrual status is treated as still menstruating.
pub fn determine_user_profile(answers: &QuizAnswers) -> UserProfile {
    let age = answers.whole_number_or("age", DEFAULT_AGE);
    let is_menstruating = answers.get("menstrual_status") != Some("postmenopausal");

    if answers.is("current_treatment", "yes") {
        UserProfile::CurrentPatient
    } else if answers.is("personal_bc_history", "yes") {
        UserProfile::Survivor
    } else if age < TEENAGE_CEILING {
        UserProfile::Teenager
    } else if age >= POSTMENOPAUSAL_AGE || !is_menstruating {
        UserProfile::Postmenopausal
    } else {
        UserProfile::Premenopausal
    }
}
