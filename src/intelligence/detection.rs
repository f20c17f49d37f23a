use crate::models::{ClinicalInput, FactorKind};

use super::types::RiskFactor;

const BMI_OBESE: f64 = 30.0;
const BMI_OVERWEIGHT: f64 = 25.0;

const SYSTOLIC_HYPERTENSION: f64 = 140.0;
const DIASTOLIC_HYPERTENSION: f64 = 90.0;
const SYSTOLIC_ELEVATED: f64 = 130.0;
const DIASTOLIC_ELEVATED: f64 = 85.0;

const BAND_HIGH: i64 = 3;
const BAND_ELEVATED: i64 = 2;

const ADVANCED_AGE_YEARS: f64 = 60.0;

/// Explain a prediction: run every rule in fixed order and collect factors.
///
/// Pure and deterministic. At most one factor per banded category, the
/// higher band winning. Returns an empty list when nothing fires.
pub fn detect_risk_factors(input: &ClinicalInput, bmi: f64) -> Vec<RiskFactor> {
    [
        detect_bmi(bmi),
        detect_blood_pressure(input.systolic, input.diastolic),
        detect_band(input.cholesterol, FactorKind::HighCholesterol, FactorKind::ElevatedCholesterol),
        detect_band(input.glucose, FactorKind::HighGlucose, FactorKind::ElevatedGlucose),
        input.is_smoker().then_some(FactorKind::Smoking),
        input.drinks_alcohol().then_some(FactorKind::Alcohol),
        (!input.is_active()).then_some(FactorKind::Sedentary),
        (input.age > ADVANCED_AGE_YEARS).then_some(FactorKind::AdvancedAge),
    ]
    .into_iter()
    .flatten()
    .map(RiskFactor::new)
    .collect()
}

// ---------------------------------------------------------------------------
// Individual rules
// ---------------------------------------------------------------------------

fn detect_bmi(bmi: f64) -> Option<FactorKind> {
    if bmi > BMI_OBESE {
        Some(FactorKind::Obesity)
    } else if bmi > BMI_OVERWEIGHT {
        Some(FactorKind::Overweight)
    } else {
        None
    }
}

fn detect_blood_pressure(systolic: f64, diastolic: f64) -> Option<FactorKind> {
    if systolic > SYSTOLIC_HYPERTENSION || diastolic > DIASTOLIC_HYPERTENSION {
        Some(FactorKind::Hypertension)
    } else if systolic > SYSTOLIC_ELEVATED || diastolic > DIASTOLIC_ELEVATED {
        Some(FactorKind::ElevatedBloodPressure)
    } else {
        None
    }
}

/// Ordinal band: 3 → `high`, 2 → `elevated`, anything else → nothing.
fn detect_band(band: i64, high: FactorKind, elevated: FactorKind) -> Option<FactorKind> {
    match band {
        BAND_HIGH => Some(high),
        BAND_ELEVATED => Some(elevated),
        _ => None,
    }
}
