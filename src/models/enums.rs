use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid {field} value: {value}")]
pub struct InvalidEnum {
    pub field: String,
    pub value: String,
}

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = InvalidEnum;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(RiskLevel {
    Low => "low",
    High => "high",
});

str_enum!(RiskCategory {
    Bmi => "bmi",
    BloodPressure => "blood_pressure",
    Cholesterol => "cholesterol",
    Glucose => "glucose",
    Lifestyle => "lifestyle",
    Age => "age",
});

str_enum!(FactorKind {
    Obesity => "obesity",
    Overweight => "overweight",
    Hypertension => "hypertension",
    ElevatedBloodPressure => "elevated_blood_pressure",
    HighCholesterol => "high_cholesterol",
    ElevatedCholesterol => "elevated_cholesterol",
    HighGlucose => "high_glucose",
    ElevatedGlucose => "elevated_glucose",
    Smoking => "smoking",
    Alcohol => "alcohol",
    Sedentary => "sedentary",
    AdvancedAge => "advanced_age",
});

impl RiskLevel {
    /// Map a classifier label to a risk level. Only `0` and `1` are valid.
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Self::Low),
            1 => Some(Self::High),
            _ => None,
        }
    }

    pub fn label(&self) -> u8 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    /// Headline shown to the user above the assessment.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk of Cardiovascular Disease",
            Self::High => "High Risk of Cardiovascular Disease",
        }
    }
}

impl FactorKind {
    pub fn category(&self) -> RiskCategory {
        match self {
            Self::Obesity | Self::Overweight => RiskCategory::Bmi,
            Self::Hypertension | Self::ElevatedBloodPressure => RiskCategory::BloodPressure,
            Self::HighCholesterol | Self::ElevatedCholesterol => RiskCategory::Cholesterol,
            Self::HighGlucose | Self::ElevatedGlucose => RiskCategory::Glucose,
            Self::Smoking | Self::Alcohol | Self::Sedentary => RiskCategory::Lifestyle,
            Self::AdvancedAge => RiskCategory::Age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn risk_level_round_trip() {
        for (variant, s) in [(RiskLevel::Low, "low"), (RiskLevel::High, "high")] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(RiskLevel::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn risk_level_from_label() {
        assert_eq!(RiskLevel::from_label(0), Some(RiskLevel::Low));
        assert_eq!(RiskLevel::from_label(1), Some(RiskLevel::High));
        assert_eq!(RiskLevel::from_label(2), None);
        assert_eq!(RiskLevel::High.label(), 1);
    }

    #[test]
    fn headlines() {
        assert_eq!(
            RiskLevel::High.headline(),
            "High Risk of Cardiovascular Disease"
        );
        assert_eq!(RiskLevel::Low.headline(), "Low Risk of Cardiovascular Disease");
    }

    #[test]
    fn serde_matches_as_str() {
        let json = serde_json::to_string(&FactorKind::ElevatedBloodPressure).unwrap();
        assert_eq!(json, "\"elevated_blood_pressure\"");
        let json = serde_json::to_string(&RiskCategory::BloodPressure).unwrap();
        assert_eq!(json, "\"blood_pressure\"");
    }

    #[test]
    fn factor_categories() {
        assert_eq!(FactorKind::Overweight.category(), RiskCategory::Bmi);
        assert_eq!(FactorKind::Sedentary.category(), RiskCategory::Lifestyle);
        assert_eq!(FactorKind::AdvancedAge.category(), RiskCategory::Age);
    }

    #[test]
    fn unknown_variant_rejected() {
        let err = RiskLevel::from_str("medium").unwrap_err();
        assert_eq!(err.field, "RiskLevel");
        assert_eq!(err.value, "medium");
    }
}
