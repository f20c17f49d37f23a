use serde::{Deserialize, Serialize};

use crate::models::{FactorKind, RiskCategory};

use super::messages::FactorMessages;

// ---------------------------------------------------------------------------
// RiskFactor
// ---------------------------------------------------------------------------

/// One contributing factor surfaced alongside a prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: FactorKind,
    pub category: RiskCategory,
    /// Patient-facing text.
    pub message: String,
}

impl RiskFactor {
    pub fn new(kind: FactorKind) -> Self {
        Self {
            kind,
            category: kind.category(),
            message: FactorMessages::for_kind(kind).to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// FactorCounts
// ---------------------------------------------------------------------------

/// Per-category tally of emitted factors, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FactorCounts {
    pub bmi: usize,
    pub blood_pressure: usize,
    pub cholesterol: usize,
    pub glucose: usize,
    pub lifestyle: usize,
    pub age: usize,
}

impl FactorCounts {
    pub fn from_factors(factors: &[RiskFactor]) -> Self {
        let mut counts = Self::default();
        for factor in factors {
            match factor.category {
                RiskCategory::Bmi => counts.bmi += 1,
                RiskCategory::BloodPressure => counts.blood_pressure += 1,
                RiskCategory::Cholesterol => counts.cholesterol += 1,
                RiskCategory::Glucose => counts.glucose += 1,
                RiskCategory::Lifestyle => counts.lifestyle += 1,
                RiskCategory::Age => counts.age += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.bmi + self.blood_pressure + self.cholesterol + self.glucose + self.lifestyle + self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_carries_category_and_text() {
        let factor = RiskFactor::new(FactorKind::Hypertension);
        assert_eq!(factor.category, RiskCategory::BloodPressure);
        assert_eq!(factor.message, "Elevated blood pressure (Hypertension)");
    }

    #[test]
    fn counts_total() {
        let factors = [
            RiskFactor::new(FactorKind::Obesity),
            RiskFactor::new(FactorKind::Smoking),
            RiskFactor::new(FactorKind::Sedentary),
        ];
        let counts = FactorCounts::from_factors(&factors);
        assert_eq!(counts.bmi, 1);
        assert_eq!(counts.lifestyle, 2);
        assert_eq!(counts.total(), 3);
    }
}
