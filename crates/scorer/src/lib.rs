// Rust guideline compliant 2026-02-23

//! Scorer component for the underwriting pipeline.
//!
//! [`Scorer`] implements the `domain::RiskScorer` port by delegating
//! classification to an injected `domain::RiskModel` adapter and mapping the
//! predicted class to a fixed risk score. [`TrainingSetModel`] is the default
//! adapter, built on the [`tree::DecisionTree`] classifier.

pub mod training_set;
pub mod tree;

pub use training_set::TrainingSetModel;

use domain::{ApplicantProfile, RiskClass, RiskFeatures, RiskModel, RiskScore};

/// Fixed class-to-score mapping.
#[must_use]
pub fn score_for(class: RiskClass) -> RiskScore {
    match class {
        RiskClass::Low => RiskScore(0.1),
        RiskClass::Medium => RiskScore(0.5),
        RiskClass::High => RiskScore(0.9),
    }
}

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Pipeline component that implements the `domain::RiskScorer` port.
///
/// Generic over any `RiskModel` adapter; carries no model-specific logic.
#[derive(Debug, Clone)]
pub struct Scorer<M: RiskModel> {
    model: M,
}

impl<M: RiskModel> Scorer<M> {
    /// Create a new scorer wrapping `model`.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M: RiskModel> domain::RiskScorer for Scorer<M> {
    fn score(&self, profile: &ApplicantProfile) -> RiskScore {
        let features = RiskFeatures::from(profile);
        let class = self.model.predict(&features);
        let score = score_for(class);
        tracing::debug!(
            model = self.model.name(),
            ?class,
            risk_score = score.value(),
            "scorer.score"
        );
        score
    }
}
