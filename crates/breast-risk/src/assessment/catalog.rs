use super::answers::QuizAnswers;
use serde::Serialize;

/// Broad grouping reported alongside each catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    Genetic,
    Hormonal,
    Lifestyle,
    Medical,
}

impl FactorCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Genetic => "Genetic",
            Self::Hormonal => "Hormonal",
            Self::Lifestyle => "Lifestyle",
            Self::Medical => "Medical",
        }
    }
}

/// Which multiplier chain a catalog entry feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorChain {
    Unchangeable,
    Changeable,
}

impl FactorChain {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unchangeable => "unchangeable",
            Self::Changeable => "changeable",
        }
    }

    pub fn factors(self) -> &'static [RiskFactor] {
        match self {
            Self::Unchangeable => UNCHANGEABLE_FACTORS,
            Self::Changeable => CHANGEABLE_FACTORS,
        }
    }
}

/// One questionnaire answer and the relative risk it carries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskFactor {
    pub question: &'static str,
    pub answer: &'static str,
    pub relative_risk: f64,
    pub category: FactorCategory,
    pub explanation: &'static str,
}

impl RiskFactor {
    pub fn matches(&self, answers: &QuizAnswers) -> bool {
        answers.is(self.question, self.answer)
    }

    pub fn raises_risk(&self) -> bool {
        self.relative_risk > 1.0
    }
}

/// Factors a person cannot modify: inheritance, reproductive history, prior findings.
pub static UNCHANGEABLE_FACTORS: &[RiskFactor] = &[
    RiskFactor {
        question: "family_history",
        answer: "Yes, I have first-degree relative with BC",
        relative_risk: 2.0,
        category: FactorCategory::Genetic,
        explanation: "A family history of breast cancer in a first-degree relative (mother, sister, or daughter) roughly doubles your risk.",
    },
    RiskFactor {
        question: "family_history",
        answer: "Yes, I have second-degree relative with BC",
        relative_risk: 1.5,
        category: FactorCategory::Genetic,
        explanation: "A family history of breast cancer in a second-degree relative (grandmother, aunt, or half-sister) moderately raises your risk.",
    },
    RiskFactor {
        question: "brca_status",
        answer: "Yes, I have tested positive for a BRCA1/BRCA2 mutation",
        relative_risk: 5.0,
        category: FactorCategory::Genetic,
        explanation: "Carrying a BRCA1 or BRCA2 gene mutation greatly increases lifetime breast cancer risk.",
    },
    RiskFactor {
        question: "ashkenazi_ancestry",
        answer: "Yes",
        relative_risk: 1.2,
        category: FactorCategory::Genetic,
        explanation: "Ashkenazi Jewish ancestry is associated with a higher rate of inherited BRCA mutations.",
    },
    RiskFactor {
        question: "menarche_age",
        answer: "Before age 12",
        relative_risk: 1.2,
        category: FactorCategory::Hormonal,
        explanation: "Starting your first period before age 12 lengthens lifetime exposure to estrogen.",
    },
    RiskFactor {
        question: "menopause",
        answer: "Yes, after age 55",
        relative_risk: 1.3,
        category: FactorCategory::Hormonal,
        explanation: "Reaching menopause after age 55 extends the years your breast tissue is exposed to estrogen.",
    },
    RiskFactor {
        question: "first_pregnancy",
        answer: "No children or first child after age 30",
        relative_risk: 1.3,
        category: FactorCategory::Hormonal,
        explanation: "Having no full-term pregnancy, or a first one after 30, means longer uninterrupted estrogen exposure.",
    },
    RiskFactor {
        question: "first_pregnancy",
        answer: "Before age 30",
        relative_risk: 0.9,
        category: FactorCategory::Hormonal,
        explanation: "A first full-term pregnancy before age 30 slightly lowers lifetime risk.",
    },
    RiskFactor {
        question: "breast_density",
        answer: "Yes, I have dense breasts",
        relative_risk: 1.5,
        category: FactorCategory::Medical,
        explanation: "High breast density on a mammogram raises risk and can make tumors harder to see.",
    },
    RiskFactor {
        question: "chest_radiation",
        answer: "Yes, before age 30",
        relative_risk: 2.0,
        category: FactorCategory::Medical,
        explanation: "Radiation therapy to the chest before age 30 substantially raises later breast cancer risk.",
    },
    RiskFactor {
        question: "precancerous_condition",
        answer: "Yes, atypical hyperplasia or LCIS",
        relative_risk: 2.5,
        category: FactorCategory::Medical,
        explanation: "A previous biopsy showing atypical hyperplasia or LCIS signals markedly higher risk.",
    },
    RiskFactor {
        question: "precancerous_condition",
        answer: "Yes, benign breast disease",
        relative_risk: 1.2,
        category: FactorCategory::Medical,
        explanation: "Some benign breast conditions found on biopsy are linked to slightly higher risk.",
    },
];

/// Factors that respond to behavior or treatment choices.
pub static CHANGEABLE_FACTORS: &[RiskFactor] = &[
    RiskFactor {
        question: "alcohol_consumption",
        answer: "1 drink per day",
        relative_risk: 1.1,
        category: FactorCategory::Lifestyle,
        explanation: "Drinking one alcoholic drink a day raises risk by roughly 7 to 10 percent.",
    },
    RiskFactor {
        question: "alcohol_consumption",
        answer: "2 or more drinks per day",
        relative_risk: 1.3,
        category: FactorCategory::Lifestyle,
        explanation: "Drinking two or more alcoholic drinks a day raises risk by about 30 percent.",
    },
    RiskFactor {
        question: "exercise_frequency",
        answer: "Rarely or never",
        relative_risk: 1.2,
        category: FactorCategory::Lifestyle,
        explanation: "Getting little or no regular exercise is linked to higher risk.",
    },
    RiskFactor {
        question: "weight_gain",
        answer: "Yes, more than 20 lbs since age 18",
        relative_risk: 1.2,
        category: FactorCategory::Lifestyle,
        explanation: "Significant weight gain in adulthood raises estrogen produced by fat tissue.",
    },
    RiskFactor {
        question: "hormone_therapy",
        answer: "Yes, combined estrogen and progestin",
        relative_risk: 1.3,
        category: FactorCategory::Medical,
        explanation: "Combined hormone replacement therapy (estrogen plus progestin) raises risk the longer it is used.",
    },
    RiskFactor {
        question: "hormone_therapy",
        answer: "Yes, estrogen only",
        relative_risk: 1.1,
        category: FactorCategory::Medical,
        explanation: "Estrogen-only hormone replacement therapy slightly raises risk with long-term use.",
    },
    RiskFactor {
        question: "birth_control",
        answer: "Yes, I currently use hormonal birth control",
        relative_risk: 1.1,
        category: FactorCategory::Hormonal,
        explanation: "Current use of hormonal contraceptives slightly raises risk while in use.",
    },
    RiskFactor {
        question: "smoking",
        answer: "Yes, I currently smoke",
        relative_risk: 1.1,
        category: FactorCategory::Lifestyle,
        explanation: "Smoking, especially starting young, is linked to modestly higher risk.",
    },
    RiskFactor {
        question: "breastfeeding",
        answer: "No",
        relative_risk: 1.1,
        category: FactorCategory::Hormonal,
        explanation: "Never breastfeeding forgoes a small protective effect.",
    },
    RiskFactor {
        question: "breastfeeding",
        answer: "Yes, 12 months or more in total",
        relative_risk: 0.9,
        category: FactorCategory::Hormonal,
        explanation: "Breastfeeding for a year or more in total lowers risk.",
    },
    RiskFactor {
        question: "diet_quality",
        answer: "Poor",
        relative_risk: 1.1,
        category: FactorCategory::Lifestyle,
        explanation: "A diet high in processed foods and low in fiber is linked to higher risk and weight gain.",
    },
];

pub fn unchangeable() -> &'static [RiskFactor] {
    UNCHANGEABLE_FACTORS
}

pub fn changeable() -> &'static [RiskFactor] {
    CHANGEABLE_FACTORS
}

/// Every entry tagged with its chain, unchangeable entries first.
pub fn all() -> impl Iterator<Item = (FactorChain, &'static RiskFactor)> {
    UNCHANGEABLE_FACTORS
        .iter()
        .map(|factor| (FactorChain::Unchangeable, factor))
        .chain(
            CHANGEABLE_FACTORS
                .iter()
                .map(|factor| (FactorChain::Changeable, factor)),
        )
}

/// Flat, serializable listing of the catalog for API and CLI output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogEntry {
    pub chain: FactorChain,
    #[serde(flatten)]
    pub factor: &'static RiskFactor,
}

pub fn entries() -> Vec<CatalogEntry> {
    all()
        .map(|(chain, factor)| CatalogEntry { chain, factor })
        .collect()
}
