use serde::{Deserialize, Serialize};

use crate::config::{FEATURE_COUNT, FEATURE_NAMES};

use super::error::ClassifierError;
use super::predictor::{Classifier, ProbabilisticClassifier};

/// Serializable logistic-regression weights over the 12-feature layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    /// Training run name, reported when the assessor starts.
    #[serde(default)]
    pub model_id: String,
    /// Weight vector (length = FEATURE_COUNT).
    pub weights: Vec<f64>,
    /// Bias (intercept) term.
    pub bias: f64,
    /// Decision threshold: p(high) ≥ threshold → label 1.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Feature names (for validation; must match FEATURE_NAMES order when present).
    #[serde(default)]
    pub feature_names: Vec<String>,
}

fn default_threshold() -> f64 {
    0.5
}

impl LogisticModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> Result<Self, ClassifierError> {
        let model = Self {
            model_id: String::new(),
            weights,
            bias,
            threshold: default_threshold(),
            feature_names: Vec::new(),
        };
        model.validate()?;
        Ok(model)
    }

    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let model: Self =
            serde_json::from_str(json).map_err(|e| ClassifierError::Parse(e.to_string()))?;
        model.validate()?;
        Ok(model)
    }

    /// Validate that the model is structurally sound.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        validate_linear(&self.weights, self.bias)?;
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ClassifierError::InvalidThreshold(self.threshold));
        }
        if !self.feature_names.is_empty()
            && self
                .feature_names
                .iter()
                .map(String::as_str)
                .ne(FEATURE_NAMES.iter().copied())
        {
            return Err(ClassifierError::Parse(format!(
                "feature order mismatch: expected {FEATURE_NAMES:?}, got {:?}",
                self.feature_names
            )));
        }
        Ok(())
    }

    /// Probability of the high-risk class.
    fn p_high(&self, features: &[f64]) -> Result<f64, ClassifierError> {
        let z = linear_score(&self.weights, self.bias, features)?;
        Ok(sigmoid(z))
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        let p = self.p_high(features)?;
        Ok(u8::from(p >= self.threshold))
    }

    fn model_id(&self) -> Option<&str> {
        (!self.model_id.is_empty()).then_some(self.model_id.as_str())
    }
}

impl ProbabilisticClassifier for LogisticModel {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], ClassifierError> {
        let p = self.p_high(features)?;
        Ok([1.0 - p, p])
    }
}

/// Label-only linear decision rule: `w·x + b ≥ 0` → high risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearThresholdModel {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl LinearThresholdModel {
    pub fn new(weights: Vec<f64>, bias: f64) -> Result<Self, ClassifierError> {
        validate_linear(&weights, bias)?;
        Ok(Self { weights, bias })
    }
}

impl Classifier for LinearThresholdModel {
    fn predict(&self, features: &[f64]) -> Result<u8, ClassifierError> {
        let z = linear_score(&self.weights, self.bias, features)?;
        Ok(u8::from(z >= 0.0))
    }
}

fn validate_linear(weights: &[f64], bias: f64) -> Result<(), ClassifierError> {
    if weights.len() != FEATURE_COUNT {
        return Err(ClassifierError::DimensionMismatch {
            expected: FEATURE_COUNT,
            got: weights.len(),
        });
    }
    for (index, &value) in weights.iter().enumerate() {
        if !value.is_finite() {
            return Err(ClassifierError::NonFiniteWeight { index, value });
        }
    }
    if !bias.is_finite() {
        return Err(ClassifierError::NonFiniteBias(bias));
    }
    Ok(())
}

fn linear_score(weights: &[f64], bias: f64, features: &[f64]) -> Result<f64, ClassifierError> {
    if features.len() != weights.len() {
        return Err(ClassifierError::DimensionMismatch {
            expected: weights.len(),
            got: features.len(),
        });
    }
    let z = weights.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + bias;
    if z.is_finite() {
        Ok(z)
    } else {
        Err(ClassifierError::Inference(format!("non-finite score {z}")))
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let ez = z.exp();
        ez / (1.0 + ez)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights_on(index: usize, w: f64) -> Vec<f64> {
        let mut weights = vec![0.0; FEATURE_COUNT];
        weights[index] = w;
        weights
    }

    #[test]
    fn sigmoid_is_symmetric() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) + sigmoid(-2.0) - 1.0).abs() < 1e-12);
        assert!(sigmoid(-800.0) >= 0.0);
        assert!(sigmoid(800.0) <= 1.0);
    }

    #[test]
    fn logistic_predicts_and_estimates() {
        // Only the standardized systolic feature (index 9) matters.
        let model = LogisticModel::new(weights_on(9, 2.0), 0.0).unwrap();
        let mut x = vec![0.0; FEATURE_COUNT];
        x[9] = 1.0;
        assert_eq!(model.predict(&x).unwrap(), 1);
        let [low, high] = model.predict_proba(&x).unwrap();
        assert!(high > 0.88 && high < 0.89);
        assert!((low + high - 1.0).abs() < 1e-12);

        x[9] = -1.0;
        assert_eq!(model.predict(&x).unwrap(), 0);
    }

    #[test]
    fn wrong_weight_count_rejected() {
        assert_eq!(
            LogisticModel::new(vec![1.0; 3], 0.0).unwrap_err(),
            ClassifierError::DimensionMismatch {
                expected: FEATURE_COUNT,
                got: 3
            }
        );
    }

    #[test]
    fn non_finite_weight_rejected() {
        let err = LogisticModel::new(weights_on(4, f64::INFINITY), 0.0).unwrap_err();
        assert!(matches!(err, ClassifierError::NonFiniteWeight { index: 4, .. }));
        let err = LinearThresholdModel::new(vec![0.0; FEATURE_COUNT], f64::NAN).unwrap_err();
        assert!(matches!(err, ClassifierError::NonFiniteBias(_)));
    }

    #[test]
    fn feature_dimension_checked_at_inference() {
        let model = LinearThresholdModel::new(vec![0.0; FEATURE_COUNT], 0.0).unwrap();
        assert!(matches!(
            model.predict(&[1.0, 2.0]),
            Err(ClassifierError::DimensionMismatch { expected: 12, got: 2 })
        ));
    }

    #[test]
    fn from_json_with_defaults() {
        let json = format!(
            r#"{{"model_id":"cardio-lr","weights":{:?},"bias":-0.25}}"#,
            vec![0.1; FEATURE_COUNT]
        );
        let model = LogisticModel::from_json(&json).unwrap();
        assert_eq!(model.model_id, "cardio-lr");
        assert_eq!(model.threshold, 0.5);
        assert!(model.feature_names.is_empty());
        assert_eq!(
            crate::pipeline::predictor::RiskModel::probabilistic(model).model_id(),
            Some("cardio-lr")
        );
    }

    #[test]
    fn unnamed_model_has_no_id() {
        let model = LogisticModel::new(vec![0.0; FEATURE_COUNT], 0.0).unwrap();
        assert_eq!(Classifier::model_id(&model), None);
    }

    #[test]
    fn from_json_rejects_reordered_features() {
        let mut names: Vec<String> = FEATURE_NAMES.iter().map(|s| s.to_string()).collect();
        names.swap(6, 7);
        let json = serde_json::json!({
            "weights": vec![0.0; FEATURE_COUNT],
            "bias": 0.0,
            "feature_names": names,
        })
        .to_string();
        assert!(matches!(
            LogisticModel::from_json(&json),
            Err(ClassifierError::Parse(_))
        ));
    }

    #[test]
    fn from_json_rejects_bad_threshold() {
        let json = serde_json::json!({
            "weights": vec![0.0; FEATURE_COUNT],
            "bias": 0.0,
            "threshold": 1.5,
        })
        .to_string();
        assert_eq!(
            LogisticModel::from_json(&json).unwrap_err(),
            ClassifierError::InvalidThreshold(1.5)
        );
    }

    #[test]
    fn threshold_model_is_label_only() {
        let model = LinearThresholdModel::new(weights_on(6, 1.0), -0.5).unwrap();
        let mut x = vec![0.0; FEATURE_COUNT];
        x[6] = 1.0;
        assert_eq!(model.predict(&x).unwrap(), 1);
        x[6] = 0.0;
        assert_eq!(model.predict(&x).unwrap(), 0);
    }
}
