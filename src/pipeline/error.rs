//! Error types for the assessment pipeline.
//!
//! One enum per stage, aggregated by `AssessmentError`. Every variant is
//! terminal for the request that produced it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: '{value}'")]
    Parse { field: String, value: String },

    #[error("{field} out of range: {value} not in [{min}, {max}]")]
    Range {
        field: &'static str,
        label: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },

    #[error("Systolic BP ({systolic}) must be higher than diastolic BP ({diastolic})")]
    InconsistentInput { systolic: f64, diastolic: f64 },
}

impl ValidationError {
    /// Field the error refers to, when it concerns a single field.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field) => Some(field.as_str()),
            Self::Parse { field, .. } => Some(field.as_str()),
            Self::Range { field, .. } => Some(*field),
            Self::InconsistentInput { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::Parse { .. } => "parse",
            Self::Range { .. } => "range",
            Self::InconsistentInput { .. } => "inconsistent_input",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("Scaling vectors must have length {expected} (mean: {mean}, std: {std})")]
    DimensionMismatch {
        expected: usize,
        mean: usize,
        std: usize,
    },

    #[error("Scaling std at index {index} must be finite and non-zero, got {value}")]
    InvalidScaling { index: usize, value: f64 },

    #[error("Scaling parameters parse failed: {0}")]
    Parse(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("Expected {expected} features, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("Non-finite weight at index {index}: {value}")]
    NonFiniteWeight { index: usize, value: f64 },

    #[error("Non-finite bias: {0}")]
    NonFiniteBias(f64),

    #[error("Invalid decision threshold: {0}")]
    InvalidThreshold(f64),

    #[error("Model parse failed: {0}")]
    Parse(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("Classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(u8),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessmentError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Feature transformation failed: {0}")]
    Features(#[from] FeatureError),

    #[error("Prediction failed: {0}")]
    Prediction(#[from] PredictionError),
}

impl AssessmentError {
    /// Single user-facing message describing the violated field or condition.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(ValidationError::MissingField(field)) => {
                format!("Error: Missing required field - '{field}'")
            }
            Self::Validation(ValidationError::Parse { field, value }) => {
                format!("Error: Invalid data format - could not parse {field}: '{value}'")
            }
            Self::Validation(ValidationError::Range {
                label, min, max, unit, ..
            }) => {
                let unit = if unit.is_empty() {
                    String::new()
                } else {
                    format!(" {unit}")
                };
                format!("Error: Invalid {label} (must be between {min}-{max}{unit})")
            }
            Self::Validation(ValidationError::InconsistentInput { .. }) => {
                "Error: Systolic BP must be higher than diastolic BP".to_string()
            }
            Self::Features(e) => format!("Error processing data: {e}"),
            Self::Prediction(e) => format!("Error processing data: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AGE_BOUNDS, HEIGHT_BOUNDS, SYSTOLIC_BOUNDS};

    fn range(bounds: crate::config::FieldBounds, value: f64) -> AssessmentError {
        AssessmentError::Validation(ValidationError::Range {
            field: bounds.field,
            label: bounds.label,
            value,
            min: bounds.min,
            max: bounds.max,
            unit: bounds.unit,
        })
    }

    #[test]
    fn range_messages_match_bounds() {
        assert_eq!(
            range(AGE_BOUNDS, 121.0).user_message(),
            "Error: Invalid age (must be between 0-120)"
        );
        assert_eq!(
            range(HEIGHT_BOUNDS, 10.0).user_message(),
            "Error: Invalid height (must be between 50-250 cm)"
        );
        assert_eq!(
            range(SYSTOLIC_BOUNDS, 300.0).user_message(),
            "Error: Invalid systolic BP (must be between 70-250 mmHg)"
        );
    }

    #[test]
    fn missing_field_message_names_field() {
        let err: AssessmentError = ValidationError::MissingField("gluc".into()).into();
        assert_eq!(err.user_message(), "Error: Missing required field - 'gluc'");
    }

    #[test]
    fn inconsistent_message() {
        let err: AssessmentError = ValidationError::InconsistentInput {
            systolic: 80.0,
            diastolic: 80.0,
        }
        .into();
        assert_eq!(
            err.user_message(),
            "Error: Systolic BP must be higher than diastolic BP"
        );
    }

    #[test]
    fn prediction_errors_are_processing_errors() {
        let err: AssessmentError =
            PredictionError::from(ClassifierError::Inference("boom".into())).into();
        assert!(err.user_message().starts_with("Error processing data:"));
        assert!(err.user_message().contains("boom"));
    }

    #[test]
    fn validation_error_field_and_kind() {
        let err = ValidationError::Parse {
            field: "weight".into(),
            value: "abc".into(),
        };
        assert_eq!(err.field(), Some("weight"));
        assert_eq!(err.kind(), "parse");
        let err = ValidationError::InconsistentInput {
            systolic: 80.0,
            diastolic: 90.0,
        };
        assert_eq!(err.field(), None);
    }
}
