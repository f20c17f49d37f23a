//! Risk-factor explanation: a fixed-order rule engine that turns validated
//! measurements into patient-facing contributing factors.

pub mod detection;
pub mod messages;
pub mod types;

pub use detection::detect_risk_factors;
pub use messages::FactorMessages;
pub use types::{FactorCounts, RiskFactor};
