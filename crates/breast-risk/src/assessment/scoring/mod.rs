mod category;
mod normalize;
mod rules;

pub use category::{categorize_risk, RiskCategory};
pub use normalize::{normalize_score, round_to_tenth};

use super::answers::QuizAnswers;
use super::catalog::FactorChain;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized scores for each chain and their combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskScoreResult {
    pub unchangeable_score: f64,
    pub changeable_score: f64,
    pub total_score: f64,
}

/// Score result together with the ordered audit trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCalculation {
    pub result: RiskScoreResult,
    pub trace: Vec<CalculationStep>,
}

/// Single auditable step of a score calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum CalculationStep {
    ActiveTreatment {
        stage: Option<String>,
        score: f64,
    },
    FactorApplied {
        chain: FactorChain,
        question: String,
        answer: String,
        relative_risk: f64,
        before: f64,
        after: f64,
    },
    BmiAdjustment {
        bmi: f64,
        multiplier: f64,
        before: f64,
        after: f64,
    },
    ChainScored {
        chain: FactorChain,
        multiplier: f64,
        dampened: f64,
        normalized: f64,
    },
    TotalScored {
        combined_multiplier: f64,
        dampened: f64,
        normalized: f64,
    },
}

impl CalculationStep {
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalculationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationStep::ActiveTreatment { stage, score } => write!(
                f,
                "active treatment override ({}): flat score {:.1}",
                stage.as_deref().unwrap_or("stage not reported"),
                score
            ),
            CalculationStep::FactorApplied {
                chain,
                question,
                answer,
                relative_risk,
                before,
                after,
            } => write!(
                f,
                "{} {question} = \"{answer}\" (RR {relative_risk:.2}): {before:.4} -> {after:.4}",
                chain.label()
            ),
            CalculationStep::BmiAdjustment {
                bmi,
                multiplier,
                before,
                after,
            } => write!(
                f,
                "postmenopausal BMI {bmi:.1} (x{multiplier:.2}): {before:.4} -> {after:.4}"
            ),
            CalculationStep::ChainScored {
                chain,
                multiplier,
                dampened,
                normalized,
            } => write!(
                f,
                "{} multiplier {multiplier:.4}, sqrt {dampened:.4}, normalized {normalized:.1}",
                chain.label()
            ),
            CalculationStep::TotalScored {
                combined_multiplier,
                dampened,
                normalized,
            } => write!(
                f,
                "total multiplier {combined_multiplier:.4}, sqrt {dampened:.4}, normalized {normalized:.1}"
            ),
        }
    }
}

/// Scores an answer set on two independent relative-risk chains.
///
/// Unchangeable and changeable factors each compound from 1.0. Every chain is dampened with
/// a square root before normalization, and the total recombines the two raw multipliers
/// rather than the normalized chain scores. Someone in active treatment bypasses all of
/// this and receives a flat stage score.
pub fn calculate_risk_score(answers: &QuizAnswers) -> ScoreCalculation {
    let mut trace = Vec::new();

    if let Some((stage, score)) = rules::active_treatment_score(answers) {
        trace.push(CalculationStep::ActiveTreatment { stage, score });
        return ScoreCalculation {
            result: RiskScoreResult {
                unchangeable_score: score,
                changeable_score: 0.0,
                total_score: score,
            },
            trace,
        };
    }

    let unchangeable = rules::apply_chain(FactorChain::Unchangeable, answers, &mut trace);
    let changeable = rules::apply_chain(FactorChain::Changeable, answers, &mut trace);
    let changeable = rules::apply_bmi_adjustment(answers, changeable, &mut trace);

    let unchangeable_score = score_chain(FactorChain::Unchangeable, unchangeable, &mut trace);
    let changeable_score = score_chain(FactorChain::Changeable, changeable, &mut trace);

    let combined_multiplier = unchangeable * changeable;
    let dampened = combined_multiplier.sqrt();
    let total_score = normalize_score(dampened);
    trace.push(CalculationStep::TotalScored {
        combined_multiplier,
        dampened,
        normalized: total_score,
    });

    ScoreCalculation {
        result: RiskScoreResult {
            unchangeable_score: round_to_tenth(unchangeable_score),
            changeable_score: round_to_tenth(changeable_score),
            total_score: round_to_tenth(total_score),
        },
        trace,
    }
}

fn score_chain(chain: FactorChain, multiplier: f64, trace: &mut Vec<CalculationStep>) -> f64 {
    let dampened = multiplier.sqrt();
    let normalized = normalize_score(dampened);
    trace.push(CalculationStep::ChainScored {
        chain,
        multiplier,
        dampened,
        normalized,
    });
    normalized
}
