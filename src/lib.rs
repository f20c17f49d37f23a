pub mod config;
pub mod models;
pub mod pipeline;
pub mod intelligence; // Risk-factor explanation rules
pub mod stats;

pub use models::{ClinicalInput, RawSubmission, RiskAssessment, RiskLevel};
pub use pipeline::{AssessmentError, RiskAssessor, RiskModel, ScalingParams};
pub use stats::{StatsAggregator, StatsSnapshot};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Honors `RUST_LOG`, falling back to `config::default_log_filter()`.
/// Returns `false` if a subscriber was already installed.
pub fn init_tracing() -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
    }
    installed
}
