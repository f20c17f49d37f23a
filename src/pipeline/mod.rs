pub mod error;
pub mod validation;
pub mod features;
pub mod predictor;
pub mod model; // Concrete linear classifiers (logistic, threshold)
pub mod orchestrator;

pub use error::{
    AssessmentError, ClassifierError, FeatureError, PredictionError, ValidationError,
};
pub use features::{transform, DerivedFeatures, FeatureVector, ScalingParams};
pub use model::{LinearThresholdModel, LogisticModel};
pub use orchestrator::RiskAssessor;
pub use predictor::{Classifier, PredictionOutcome, ProbabilisticClassifier, RiskModel};
pub use validation::{validate_submission, REQUIRED_FIELDS};
