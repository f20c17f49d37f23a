//! Risk predictor: wraps the trained classifier behind explicit capabilities.
//!
//! Two capability levels:
//! - `Classifier`: label only.
//! - `ProbabilisticClassifier`: label plus a two-class probability distribution.
//!
//! The capability is fixed when the model is loaded (`RiskModel` variant),
//! never probed per request.

use serde::Serialize;

use crate::models::assessment::round_to;
use crate::models::RiskLevel;

use super::error::{ClassifierError, PredictionError};
use super::features::FeatureVector;

/// Tolerance for a probability distribution summing to 1.
const PROBABILITY_SUM_TOLERANCE: f64 = 1e-6;

/// Binary classifier producing a label in {0, 1}.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError>;

    /// Identifier of the trained artifact, if it carries one.
    fn model_id(&self) -> Option<&str> {
        None
    }
}

/// Classifier that can also estimate class probabilities `[p_low, p_high]`.
pub trait ProbabilisticClassifier: Classifier {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError>;
}

/// A loaded model with its capability resolved.
pub enum RiskModel {
    LabelOnly(Box<dyn Classifier>),
    Probabilistic(Box<dyn ProbabilisticClassifier>),
}

impl std::fmt::Debug for RiskModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LabelOnly(_) => f.write_str("RiskModel::LabelOnly"),
            Self::Probabilistic(_) => f.write_str("RiskModel::Probabilistic"),
        }
    }
}

/// Result of one inference call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionOutcome {
    pub risk_level: RiskLevel,
    /// `[p_low, p_high]` when the model supports probability estimation.
    pub probability: Option<[f64; 2]>,
}

impl PredictionOutcome {
    pub fn label(&self) -> u8 {
        self.risk_level.label()
    }

    /// Max class probability as a percentage rounded to one decimal.
    pub fn confidence(&self) -> Option<f64> {
        self.probability
            .map(|[low, high]| round_to(low.max(high) * 100.0, 1))
    }
}

impl RiskModel {
    pub fn label_only(classifier: impl Classifier + 'static) -> Self {
        Self::LabelOnly(Box::new(classifier))
    }

    pub fn probabilistic(classifier: impl ProbabilisticClassifier + 'static) -> Self {
        Self::Probabilistic(Box::new(classifier))
    }

    pub fn supports_probability(&self) -> bool {
        matches!(self, Self::Probabilistic(_))
    }

    pub fn model_id(&self) -> Option<&str> {
        match self {
            Self::LabelOnly(model) => model.model_id(),
            Self::Probabilistic(model) => model.model_id(),
        }
    }

    /// Single best-effort inference. Classifier failures are not retried.
    pub fn predict(&self, features: &FeatureVector) -> Result<PredictionOutcome, PredictionError> {
        let x = features.as_slice();
        let (label, probability) = match self {
            Self::LabelOnly(model) => (model.predict(x)?, None),
            Self::Probabilistic(model) => {
                let label = model.predict(x)?;
                let proba = model.predict_proba(x)?;
                check_distribution(proba)?;
                (label, Some(proba))
            }
        };

        let risk_level = RiskLevel::from_label(label).ok_or(PredictionError::InvalidLabel(label))?;

        Ok(PredictionOutcome {
            risk_level,
            probability,
        })
    }
}

fn check_distribution(proba: [f64; 2]) -> Result<(), ClassifierError> {
    let valid = proba.iter().all(|p| p.is_finite() && (0.0..=1.0).contains(p))
        && ((proba[0] + proba[1]) - 1.0).abs() <= PROBABILITY_SUM_TOLERANCE;
    if valid {
        Ok(())
    } else {
        Err(ClassifierError::Inference(format!(
            "invalid probability distribution [{}, {}]",
            proba[0], proba[1]
        )))
    }
}
