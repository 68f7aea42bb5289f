use super::super::answers::QuizAnswers;
use super::super::catalog::FactorChain;
use super::CalculationStep;

const ACTIVE_TREATMENT_ANSWER: &str =
    "Yes, I am currently receiving treatment for breast cancer";
const POSTMENOPAUSAL_ANSWERS: [&str; 2] = ["Yes, before age 55", "Yes, after age 55"];

const DEFAULT_BMI: f64 = 25.0;
const OBESITY_BMI: f64 = 30.0;
const POSTMENOPAUSAL_OBESITY_MULTIPLIER: f64 = 1.3;
const UNMAPPED_STAGE_SCORE: f64 = 35.0;

/// Flat score for someone in active treatment, or `None` when the override does not apply.
pub(crate) fn active_treatment_score(answers: &QuizAnswers) -> Option<(Option<String>, f64)> {
    if !answers.is("precancerous_condition", ACTIVE_TREATMENT_ANSWER) {
        return None;
    }

    let stage = answers.get("cancer_stage");
    let score = match stage {
        Some("Stage 1") => 15.0,
        Some("Stage 2") => 25.0,
        Some("Stage 3") => 35.0,
        Some("Stage 4") => 45.0,
        _ => UNMAPPED_STAGE_SCORE,
    };

    Some((stage.map(str::to_string), score))
}

/// Multiplies the relative risk of every matching entry in `chain`, starting from 1.0.
pub(crate) fn apply_chain(
    chain: FactorChain,
    answers: &QuizAnswers,
    trace: &mut Vec<CalculationStep>,
) -> f64 {
    let mut multiplier = 1.0;

    for factor in chain.factors() {
        if !factor.matches(answers) {
            continue;
        }

        let before = multiplier;
        multiplier *= factor.relative_risk;
        trace.push(CalculationStep::FactorApplied {
            chain,
            question: factor.question.to_string(),
            answer: factor.answer.to_string(),
            relative_risk: factor.relative_risk,
            before,
            after: multiplier,
        });
    }

    multiplier
}

/// Obesity after menopause compounds the changeable chain once more.
pub(crate) fn apply_bmi_adjustment(
    answers: &QuizAnswers,
    multiplier: f64,
    trace: &mut Vec<CalculationStep>,
) -> f64 {
    let bmi = answers.number_or("bmi", DEFAULT_BMI);
    let postmenopausal = answers.is_any("menopause", &POSTMENOPAUSAL_ANSWERS);

    if bmi >= OBESITY_BMI && postmenopausal {
        let adjusted = multiplier * POSTMENOPAUSAL_OBESITY_MULTIPLIER;
        trace.push(CalculationStep::BmiAdjustment {
            bmi,
            multiplier: POSTMENOPAUSAL_OBESITY_MULTIPLIER,
            before: multiplier,
            after: adjusted,
        });
        adjusted
    } else {
        multiplier
    }
}
