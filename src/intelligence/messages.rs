use crate::models::FactorKind;

/// Patient-facing wording for each risk factor.
/// Band thresholds are quoted in the text so the reader can see why a
/// factor was raised.
pub struct FactorMessages;

impl FactorMessages {
    pub fn for_kind(kind: FactorKind) -> &'static str {
        match kind {
            FactorKind::Obesity => "BMI indicates obesity (BMI > 30)",
            FactorKind::Overweight => "BMI indicates overweight (BMI 25-30)",
            FactorKind::Hypertension => "Elevated blood pressure (Hypertension)",
            FactorKind::ElevatedBloodPressure => "Above normal blood pressure",
            FactorKind::HighCholesterol => "High cholesterol levels (≥ 240 mg/dL)",
            FactorKind::ElevatedCholesterol => "Above normal cholesterol (200-239 mg/dL)",
            FactorKind::HighGlucose => "High glucose levels (≥ 126 mg/dL)",
            FactorKind::ElevatedGlucose => "Above normal glucose (100-125 mg/dL)",
            FactorKind::Smoking => "Current smoking habit",
            FactorKind::Alcohol => "Regular alcohol consumption",
            FactorKind::Sedentary => "Sedentary lifestyle / Low physical activity",
            FactorKind::AdvancedAge => "Advanced age (> 60 years)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_wording() {
        assert!(FactorMessages::for_kind(FactorKind::Obesity).contains("obesity"));
        assert!(FactorMessages::for_kind(FactorKind::Overweight).contains("overweight"));
        assert!(FactorMessages::for_kind(FactorKind::HighGlucose).contains("126"));
    }

    #[test]
    fn lifestyle_wording() {
        assert_eq!(
            FactorMessages::for_kind(FactorKind::Smoking),
            "Current smoking habit"
        );
        assert_eq!(
            FactorMessages::for_kind(FactorKind::Alcohol),
            "Regular alcohol consumption"
        );
    }
}
