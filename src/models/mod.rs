pub mod assessment;
pub mod clinical;
pub mod enums;

pub use assessment::RiskAssessment;
pub use clinical::{ClinicalInput, RawSubmission};
pub use enums::{FactorKind, InvalidEnum, RiskCategory, RiskLevel};
