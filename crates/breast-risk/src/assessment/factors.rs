use super::answers::QuizAnswers;
use super::catalog::{FactorChain, UNCHANGEABLE_FACTORS};
use serde::{Deserialize, Serialize};

const GENETIC_MARKERS: [&str; 3] = ["family", "BRCA", "mutation"];
const HORMONAL_MARKERS: [&str; 3] = ["estrogen", "hormone", "period"];
const LIFESTYLE_MARKERS: [&str; 3] = ["alcohol", "exercise", "weight"];
const MEDICAL_MARKERS: [&str; 3] = ["therapy", "density", "biopsy"];

/// Explanations of every matching catalog entry that raises risk, in catalog order with
/// unchangeable entries first.
pub fn identify_risk_factors(answers: &QuizAnswers) -> Vec<String> {
    [FactorChain::Unchangeable, FactorChain::Changeable]
        .into_iter()
        .flat_map(FactorChain::factors)
        .filter(|factor| factor.matches(answers) && factor.raises_risk())
        .map(|factor| factor.explanation.to_string())
        .collect()
}

/// Fixed encouragement for habits known to lower risk. Independent of the catalog.
pub fn identify_protective_factors(answers: &QuizAnswers) -> Vec<String> {
    let mut protective = Vec::new();

    if answers.is("breastfeeding", "yes") {
        protective
            .push("Breastfeeding provides protective benefits against breast cancer".to_string());
    }
    if answers.is_any("exercise_frequency", &["daily", "most_days"]) {
        protective
            .push("Regular physical activity helps lower your breast cancer risk".to_string());
    }
    if answers.is_any("alcohol_consumption", &["never", "rarely"]) {
        protective.push("Minimal alcohol consumption keeps this risk factor low".to_string());
    }
    if answers.is_any("diet_quality", &["excellent", "good"]) {
        protective.push("A healthy, balanced diet supports overall breast health".to_string());
    }

    protective
}

/// Whether an explanation belongs to an unchangeable catalog entry.
pub fn is_unchangeable_factor(explanation: &str) -> bool {
    UNCHANGEABLE_FACTORS
        .iter()
        .any(|factor| factor.explanation == explanation)
}

/// Identified factors grouped by keywords found in their explanations.
///
/// A factor lands in every bucket whose keywords it mentions, or in none at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorBuckets {
    pub genetic: Vec<String>,
    pub hormonal: Vec<String>,
    pub lifestyle: Vec<String>,
    pub medical: Vec<String>,
}

impl FactorBuckets {
    pub fn from_explanations(explanations: &[String]) -> Self {
        let pick = |markers: &[&str]| -> Vec<String> {
            explanations
                .iter()
                .filter(|explanation| markers.iter().any(|marker| explanation.contains(marker)))
                .cloned()
                .collect()
        };

        Self {
            genetic: pick(&GENETIC_MARKERS),
            hormonal: pick(&HORMONAL_MARKERS),
            lifestyle: pick(&LIFESTYLE_MARKERS),
            medical: pick(&MEDICAL_MARKERS),
        }
    }
}

/// Identified factors split by the chain their catalog entry feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorSplit {
    pub unchangeable: Vec<String>,
    pub changeable: Vec<String>,
}

impl FactorSplit {
    pub fn from_explanations(explanations: &[String]) -> Self {
        let (unchangeable, changeable): (Vec<String>, Vec<String>) = explanations
            .iter()
            .cloned()
            .partition(|explanation| is_unchangeable_factor(explanation));
        Self {
            unchangeable,
            changeable,
        }
    }
}
