//! Feature transformation: BMI derivation, standardization, and assembly of
//! the ordered model input vector.
//!
//! Layout (12 values):
//! ```text
//! gender, cholesterol, gluc, smoke, alco, active,   (categorical, unscaled)
//! age, height, weight, ap_hi, ap_lo, bmi            (standardized)
//! ```
//! The order is shared with the trained classifier and its scaling
//! parameters and must not change on one side only.

use serde::{Deserialize, Serialize};

use crate::config::{CATEGORICAL_FEATURE_COUNT, CONTINUOUS_FEATURE_COUNT, FEATURE_COUNT};
use crate::models::ClinicalInput;

use super::error::FeatureError;

/// Per-feature mean and standard deviation for the continuous features,
/// aligned to [age, height, weight, systolic, diastolic, BMI].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingParams {
    mean: Vec<f64>,
    std: Vec<f64>,
}

impl ScalingParams {
    pub fn new(mean: Vec<f64>, std: Vec<f64>) -> Result<Self, FeatureError> {
        let params = Self { mean, std };
        params.validate()?;
        Ok(params)
    }

    /// Parse from JSON text: `{"mean": [...], "std": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, FeatureError> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| FeatureError::Parse(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn std(&self) -> &[f64] {
        &self.std
    }

    fn validate(&self) -> Result<(), FeatureError> {
        if self.mean.len() != CONTINUOUS_FEATURE_COUNT || self.std.len() != CONTINUOUS_FEATURE_COUNT
        {
            return Err(FeatureError::DimensionMismatch {
                expected: CONTINUOUS_FEATURE_COUNT,
                mean: self.mean.len(),
                std: self.std.len(),
            });
        }
        for (index, &value) in self.std.iter().enumerate() {
            if !value.is_finite() || value == 0.0 {
                return Err(FeatureError::InvalidScaling { index, value });
            }
        }
        Ok(())
    }
}

/// Values derived from validated input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFeatures {
    pub bmi: f64,
}

/// Model-ready feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn categorical(&self) -> &[f64] {
        &self.values[..CATEGORICAL_FEATURE_COUNT]
    }

    pub fn standardized(&self) -> &[f64] {
        &self.values[CATEGORICAL_FEATURE_COUNT..]
    }
}

/// Derive BMI and assemble the standardized feature vector.
pub fn transform(
    input: &ClinicalInput,
    scaling: &ScalingParams,
) -> Result<(DerivedFeatures, FeatureVector), FeatureError> {
    // Direct serde deserialization bypasses the constructors.
    scaling.validate()?;

    let derived = DerivedFeatures { bmi: input.bmi() };
    let continuous = [
        input.age,
        input.height,
        input.weight,
        input.systolic,
        input.diastolic,
        derived.bmi,
    ];

    let mut values = [0.0; FEATURE_COUNT];
    values[..CATEGORICAL_FEATURE_COUNT].copy_from_slice(&input.categorical());
    for (i, raw) in continuous.iter().enumerate() {
        values[CATEGORICAL_FEATURE_COUNT + i] = (raw - scaling.mean[i]) / scaling.std[i];
    }

    tracing::debug!(bmi = derived.bmi, "Feature vector assembled");

    Ok((derived, FeatureVector { values }))
}
