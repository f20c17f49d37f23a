use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::enums::RiskLevel;
use crate::intelligence::RiskFactor;

/// Successful outcome of one risk assessment.
#[derive(Debug, Clone, Serialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub assessed_at: DateTime<Utc>,
    /// Classifier label: 0 = low risk, 1 = high risk.
    pub label: u8,
    pub risk_level: RiskLevel,
    pub headline: String,
    /// Ordered contributing factors. Empty when no rule fired.
    pub risk_factors: Vec<RiskFactor>,
    /// Body-mass index rounded to 2 decimals.
    pub bmi: f64,
    /// Max class probability as a percentage, 1 decimal.
    /// `None` when the classifier has no probability capability.
    pub confidence: Option<f64>,
}

impl RiskAssessment {
    pub fn is_high_risk(&self) -> bool {
        self.risk_level == RiskLevel::High
    }

    /// Rendered factor strings, in emission order.
    pub fn factor_messages(&self) -> Vec<&str> {
        self.risk_factors.iter().map(|f| f.message.as_str()).collect()
    }
}

/// Round to `places` decimals from the exact binary value, ties to even.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_two_places() {
        assert_eq!(round_to(24.221_453, 2), 24.22);
        assert_eq!(round_to(31.249_9, 2), 31.25);
    }

    #[test]
    fn round_one_place() {
        assert_eq!(round_to(87.345, 1), 87.3);
        assert_eq!(round_to(50.0, 1), 50.0);
    }

    #[test]
    fn exact_halves_round_to_even() {
        assert_eq!(round_to(15.625, 2), 15.62);
        assert_eq!(round_to(78.125, 2), 78.12);
        assert_eq!(round_to(0.25, 1), 0.2);
    }
}
