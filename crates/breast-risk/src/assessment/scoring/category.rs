use serde::{Deserialize, Serialize};

const MODERATE_THRESHOLD: f64 = 15.0;
const HIGH_THRESHOLD: f64 = 30.0;

/// Coarse bucket derived from the normalized total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Low,
    Moderate,
    High,
}

impl RiskCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Low, Self::Moderate, Self::High]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }
}

/// Strict thresholds: below 15 is low, below 30 is moderate, everything else is high.
pub fn categorize_risk(total_score: f64) -> RiskCategory {
    if total_score < MODERATE_THRESHOLD {
        RiskCategory::Low
    } else if total_score < HIGH_THRESHOLD {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}
