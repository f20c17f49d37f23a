/// Application-level constants
pub const APP_NAME: &str = "CardioRisk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of continuous features standardized before inference:
/// age, height, weight, systolic, diastolic, BMI.
pub const CONTINUOUS_FEATURE_COUNT: usize = 6;

/// Number of categorical features passed through unscaled:
/// gender, cholesterol, gluc, smoke, alco, active.
pub const CATEGORICAL_FEATURE_COUNT: usize = 6;

/// Length of the assembled model input vector.
pub const FEATURE_COUNT: usize = CATEGORICAL_FEATURE_COUNT + CONTINUOUS_FEATURE_COUNT;

/// Feature names in model input order. Must match the column order used
/// when the classifier and its scaling parameters were produced.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "gender",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
    "age",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "bmi",
];

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "cardiorisk_lib=info,warn"
}

// ═══════════════════════════════════════════════════════════
// Physiological bounds
// ═══════════════════════════════════════════════════════════

/// Inclusive plausibility range for one continuous clinical field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    /// Submission key (`age`, `ap_hi`, ...).
    pub field: &'static str,
    /// Human label used in user-facing messages.
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    /// Unit suffix for messages; empty for age.
    pub unit: &'static str,
}

impl FieldBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const AGE_BOUNDS: FieldBounds = FieldBounds {
    field: "age",
    label: "age",
    min: 0.0,
    max: 120.0,
    unit: "",
};

pub const HEIGHT_BOUNDS: FieldBounds = FieldBounds {
    field: "height",
    label: "height",
    min: 50.0,
    max: 250.0,
    unit: "cm",
};

pub const WEIGHT_BOUNDS: FieldBounds = FieldBounds {
    field: "weight",
    label: "weight",
    min: 20.0,
    max: 300.0,
    unit: "kg",
};

pub const SYSTOLIC_BOUNDS: FieldBounds = FieldBounds {
    field: "ap_hi",
    label: "systolic BP",
    min: 70.0,
    max: 250.0,
    unit: "mmHg",
};

pub const DIASTOLIC_BOUNDS: FieldBounds = FieldBounds {
    field: "ap_lo",
    label: "diastolic BP",
    min: 40.0,
    max: 180.0,
    unit: "mmHg",
};
