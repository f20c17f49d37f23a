use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw form submission: field name → raw textual value.
///
/// The presentation layer builds one of these per request. Values are kept
/// as strings so that parsing (and its failures) happen in one place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    fields: HashMap<String, String>,
}

impl RawSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build from a JSON object. Numbers and booleans are rendered to text
    /// (`true` → `"1"`); `null` entries are treated as absent. Non-object
    /// values yield an empty submission.
    pub fn from_json(value: &serde_json::Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let fields = map
            .iter()
            .filter_map(|(k, v)| {
                let text = match v {
                    serde_json::Value::Null => return None,
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Bool(b) => (if *b { "1" } else { "0" }).to_string(),
                    other => other.to_string(),
                };
                Some((k.clone(), text))
            })
            .collect();

        Self { fields }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A validated clinical submission.
///
/// Continuous fields are range-checked and `systolic > diastolic` holds.
/// Categorical fields are carried exactly as parsed: bands and flags are
/// not range-validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInput {
    /// Years.
    pub age: f64,
    /// Centimetres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    /// Systolic blood pressure (ap_hi), mmHg.
    pub systolic: f64,
    /// Diastolic blood pressure (ap_lo), mmHg.
    pub diastolic: f64,
    pub gender: i64,
    /// 1 = normal, 2 = above normal, 3 = well above normal.
    pub cholesterol: i64,
    /// 1 = normal, 2 = above normal, 3 = well above normal.
    pub glucose: i64,
    pub smoke: i64,
    pub alcohol: i64,
    pub active: i64,
}

impl ClinicalInput {
    pub fn is_smoker(&self) -> bool {
        self.smoke == 1
    }

    pub fn drinks_alcohol(&self) -> bool {
        self.alcohol == 1
    }

    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    /// Body-mass index: kg / m².
    pub fn bmi(&self) -> f64 {
        let height_m = self.height / 100.0;
        self.weight / (height_m * height_m)
    }

    /// Categorical fields in model input order.
    pub fn categorical(&self) -> [f64; 6] {
        [
            self.gender as f64,
            self.cholesterol as f64,
            self.glucose as f64,
            self.smoke as f64,
            self.alcohol as f64,
            self.active as f64,
        ]
    }
}
