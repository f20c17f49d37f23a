//! Assessment orchestrator: Validate → Transform → Predict → Record → Explain.
//!
//! Model and scaling parameters are read-only after construction and shared
//! across concurrent requests. The statistics aggregator is the only
//! mutable state and is touched once, after a successful prediction.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::intelligence::{detect_risk_factors, FactorCounts};
use crate::models::assessment::round_to;
use crate::models::{RawSubmission, RiskAssessment};
use crate::stats::{StatsAggregator, StatsSnapshot};

use super::error::AssessmentError;
use super::features::{transform, ScalingParams};
use super::predictor::RiskModel;
use super::validation::validate_submission;

/// Entry point for the presentation layer.
#[derive(Debug)]
pub struct RiskAssessor {
    model: RiskModel,
    scaling: ScalingParams,
    stats: Arc<StatsAggregator>,
}

impl RiskAssessor {
    pub fn new(model: RiskModel, scaling: ScalingParams, stats: Arc<StatsAggregator>) -> Self {
        tracing::info!(
            model_id = model.model_id().unwrap_or("unnamed"),
            probability = model.supports_probability(),
            "Risk assessor initialized"
        );
        Self {
            model,
            scaling,
            stats,
        }
    }

    /// Assess one submission. Errors are terminal and leave statistics untouched.
    pub fn assess(&self, raw: &RawSubmission) -> Result<RiskAssessment, AssessmentError> {
        let start = Instant::now();
        let id = Uuid::new_v4();

        let result = self.run(id, raw);

        match &result {
            Ok(assessment) => {
                let counts = FactorCounts::from_factors(&assessment.risk_factors);
                tracing::info!(
                    assessment_id = %id,
                    risk_level = assessment.risk_level.as_str(),
                    risk_factors = counts.total(),
                    confidence = ?assessment.confidence,
                    processing_ms = start.elapsed().as_millis() as u64,
                    "Risk assessment complete"
                );
            }
            Err(AssessmentError::Validation(e)) => {
                tracing::warn!(
                    assessment_id = %id,
                    kind = e.kind(),
                    field = e.field().unwrap_or("-"),
                    "Submission rejected"
                );
            }
            Err(e) => {
                tracing::warn!(assessment_id = %id, error = %e, "Risk assessment failed");
            }
        }

        result
    }

    fn run(&self, id: Uuid, raw: &RawSubmission) -> Result<RiskAssessment, AssessmentError> {
        let input = validate_submission(raw)?;
        tracing::debug!(assessment_id = %id, "Submission validated");

        let (derived, features) = transform(&input, &self.scaling)?;
        let outcome = self.model.predict(&features)?;
        tracing::debug!(
            assessment_id = %id,
            label = outcome.label(),
            "Prediction obtained"
        );

        self.stats.record(outcome.risk_level);

        let risk_factors = detect_risk_factors(&input, derived.bmi);

        Ok(RiskAssessment {
            id,
            assessed_at: Utc::now(),
            label: outcome.label(),
            risk_level: outcome.risk_level,
            headline: outcome.risk_level.headline().to_string(),
            risk_factors,
            bmi: round_to(derived.bmi, 2),
            confidence: outcome.confidence(),
        })
    }

    /// Current prediction tally.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    pub fn supports_probability(&self) -> bool {
        self.model.supports_probability()
    }
}
