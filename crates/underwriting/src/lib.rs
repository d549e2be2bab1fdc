// Rust guideline compliant 2026-02-23

//! Underwriting coordinator -- validates an application, checks the age rule,
//! scores risk, decides, and formats exactly one result.
//!
//! Entry points: [`UnderwritingSystem::process_application`],
//! [`UnderwritingSystem::with_default_model`]. Thresholds via
//! [`DeciderConfig::builder`].

pub mod decider;
pub mod formatter;

pub use decider::{DeciderConfig, DeciderConfigBuilder, DecisionEngine};
pub use formatter::ResultFormatter;

use domain::{Application, Decision, ModelError, RiskScorer, UnderwritingResult};
use scorer::{Scorer, TrainingSetModel};
use validator::ApplicationValidator;

// ---------------------------------------------------------------------------
// UnderwritingError
// ---------------------------------------------------------------------------

/// Errors raised while assembling the pipeline.
///
/// Processing an application never fails; these only arise at construction.
#[derive(Debug, thiserror::Error)]
pub enum UnderwritingError {
    /// The supplied configuration is invalid.
    #[error("invalid underwriting configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// The risk model could not be fitted.
    #[error("risk model error: {0}")]
    Model(#[from] ModelError),
}

// ---------------------------------------------------------------------------
// UnderwritingSystem
// ---------------------------------------------------------------------------

/// Scorer type wired by [`UnderwritingSystem::with_default_model`].
pub type DefaultScorer = Scorer<&'static TrainingSetModel>;

/// Runs the validate -> rule -> score -> decide -> format chain.
///
/// Generic over the `RiskScorer` port for zero-cost static dispatch. Holds no
/// mutable state, so repeated calls with the same application agree.
#[derive(Debug)]
pub struct UnderwritingSystem<S: RiskScorer> {
    validator: ApplicationValidator,
    scorer: S,
    engine: DecisionEngine,
    formatter: ResultFormatter,
}

impl UnderwritingSystem<DefaultScorer> {
    /// Wire the shared training-set model with default thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`UnderwritingError::Model`] if the one-time model fit failed.
    pub fn with_default_model() -> Result<Self, UnderwritingError> {
        let model = TrainingSetModel::shared()?;
        Ok(Self::new(Scorer::new(model), DeciderConfig::default()))
    }
}

impl<S: RiskScorer> UnderwritingSystem<S> {
    /// Create a system around `scorer` using the thresholds in `config`.
    #[must_use]
    pub fn new(scorer: S, config: DeciderConfig) -> Self {
        Self {
            validator: ApplicationValidator::new(),
            scorer,
            engine: DecisionEngine::new(config),
            formatter: ResultFormatter::new(),
        }
    }

    /// Produce the result for one application.
    ///
    /// Short-circuits on the first failure: missing or malformed fields yield
    /// "Additional Information Needed", an out-of-range age yields "Reject".
    /// The scorer is only consulted for applications that pass both checks.
    #[must_use]
    pub fn process_application(&self, application: &Application) -> UnderwritingResult {
        let profile = match self.validator.validate(application) {
            Ok(profile) => profile,
            Err(failure) => {
                tracing::info!(reason = %failure, "underwriting.validation.failed");
                return self
                    .formatter
                    .generate(Decision::AdditionalInformationNeeded, failure.to_string());
            }
        };

        if let Err(failure) = self.validator.handle_conflicts(&profile) {
            tracing::info!(reason = %failure, "underwriting.rule.failed");
            return self.formatter.generate(Decision::Reject, failure.to_string());
        }

        let risk_score = self.scorer.score(&profile);
        let (decision, reason) = self.engine.decide(risk_score);
        tracing::info!(%decision, %risk_score, "underwriting.decided");
        self.formatter.generate(decision, reason)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
