// Input validation for raw clinical submissions.
// Parses every required field, then applies physiological range checks and the
// systolic/diastolic relation. Stops at the first violation.

use crate::config::{
    FieldBounds, AGE_BOUNDS, DIASTOLIC_BOUNDS, HEIGHT_BOUNDS, SYSTOLIC_BOUNDS, WEIGHT_BOUNDS,
};
use crate::models::{ClinicalInput, RawSubmission};

use super::error::ValidationError;

/// Required submission keys, in parse order.
pub const REQUIRED_FIELDS: [&str; 11] = [
    "age",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "gender",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
];

/// Parse and validate a raw submission.
///
/// Continuous fields are checked against their inclusive bounds in the order
/// age, height, weight, systolic, diastolic; then systolic must exceed
/// diastolic. Categorical fields are parsed as integers but not range-checked.
pub fn validate_submission(raw: &RawSubmission) -> Result<ClinicalInput, ValidationError> {
    let age = parse_float(raw, "age")?;
    let height = parse_float(raw, "height")?;
    let weight = parse_float(raw, "weight")?;
    let systolic = parse_float(raw, "ap_hi")?;
    let diastolic = parse_float(raw, "ap_lo")?;

    let gender = parse_int(raw, "gender")?;
    let cholesterol = parse_int(raw, "cholesterol")?;
    let glucose = parse_int(raw, "gluc")?;
    let smoke = parse_int(raw, "smoke")?;
    let alcohol = parse_int(raw, "alco")?;
    let active = parse_int(raw, "active")?;

    check_range(&AGE_BOUNDS, age)?;
    check_range(&HEIGHT_BOUNDS, height)?;
    check_range(&WEIGHT_BOUNDS, weight)?;
    check_range(&SYSTOLIC_BOUNDS, systolic)?;
    check_range(&DIASTOLIC_BOUNDS, diastolic)?;

    if systolic <= diastolic {
        return Err(ValidationError::InconsistentInput {
            systolic,
            diastolic,
        });
    }

    Ok(ClinicalInput {
        age,
        height,
        weight,
        systolic,
        diastolic,
        gender,
        cholesterol,
        glucose,
        smoke,
        alcohol,
        active,
    })
}

fn require<'a>(raw: &'a RawSubmission, field: &str) -> Result<&'a str, ValidationError> {
    raw.get(field)
        .map(str::trim)
        .ok_or_else(|| ValidationError::MissingField(field.to_string()))
}

fn parse_error(field: &str, value: &str) -> ValidationError {
    ValidationError::Parse {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_float(raw: &RawSubmission, field: &str) -> Result<f64, ValidationError> {
    let text = require(raw, field)?;
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(parse_error(field, text)),
    }
}

fn parse_int(raw: &RawSubmission, field: &str) -> Result<i64, ValidationError> {
    let text = require(raw, field)?;
    text.parse::<i64>().map_err(|_| parse_error(field, text))
}

fn check_range(bounds: &FieldBounds, value: f64) -> Result<(), ValidationError> {
    if bounds.contains(value) {
        return Ok(());
    }
    Err(ValidationError::Range {
        field: bounds.field,
        label: bounds.label,
        value,
        min: bounds.min,
        max: bounds.max,
        unit: bounds.unit,
    })
}
