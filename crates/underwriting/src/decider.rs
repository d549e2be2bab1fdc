// Rust guideline compliant 2026-02-23

//! Decider -- maps a risk score to a [`Decision`] through two thresholds.
//!
//! Configuration via [`DeciderConfig::builder`].

use domain::{Decision, RiskScore};

use crate::UnderwritingError;

// ---------------------------------------------------------------------------
// DeciderConfig + builder
// ---------------------------------------------------------------------------

/// Thresholds used by a [`DecisionEngine`].
///
/// Construct via [`DeciderConfig::builder`] or [`Default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeciderConfig {
    /// Scores at or below this value are accepted.
    pub accept_threshold: f64,
    /// Scores at or above this value are rejected.
    pub reject_threshold: f64,
}

/// Builder for [`DeciderConfig`].
///
/// Obtain via [`DeciderConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct DeciderConfigBuilder {
    accept_threshold: f64,
    reject_threshold: f64,
}

impl DeciderConfig {
    /// Create a builder.
    ///
    /// Default values: `accept_threshold = 0.3`, `reject_threshold = 0.7`.
    #[must_use]
    pub fn builder() -> DeciderConfigBuilder {
        DeciderConfigBuilder { accept_threshold: 0.3, reject_threshold: 0.7 }
    }
}

impl Default for DeciderConfig {
    fn default() -> Self {
        Self { accept_threshold: 0.3, reject_threshold: 0.7 }
    }
}

impl DeciderConfigBuilder {
    /// Override the accept threshold.
    #[must_use]
    pub fn accept_threshold(mut self, threshold: f64) -> Self {
        self.accept_threshold = threshold;
        self
    }

    /// Override the reject threshold.
    #[must_use]
    pub fn reject_threshold(mut self, threshold: f64) -> Self {
        self.reject_threshold = threshold;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UnderwritingError::InvalidConfig`] when a threshold is not a
    /// finite value in `[0, 1]`, or when `accept_threshold > reject_threshold`.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<DeciderConfig, UnderwritingError> {
        for (name, value) in [
            ("accept_threshold", self.accept_threshold),
            ("reject_threshold", self.reject_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(UnderwritingError::InvalidConfig {
                    reason: format!("{name} must be within [0, 1], got {value}"),
                });
            }
        }
        if self.accept_threshold > self.reject_threshold {
            return Err(UnderwritingError::InvalidConfig {
                reason: "accept_threshold must not exceed reject_threshold".to_owned(),
            });
        }
        Ok(DeciderConfig {
            accept_threshold: self.accept_threshold,
            reject_threshold: self.reject_threshold,
        })
    }
}

// ---------------------------------------------------------------------------
// DecisionEngine
// ---------------------------------------------------------------------------

/// Two-threshold policy. Checks run accept first, then reject, so a score
/// equal to either threshold resolves toward that threshold's decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine {
    config: DeciderConfig,
}

impl DecisionEngine {
    /// Create an engine from `config`.
    #[must_use]
    pub fn new(config: DeciderConfig) -> Self {
        Self { config }
    }

    /// Active thresholds.
    #[must_use]
    pub fn config(&self) -> &DeciderConfig {
        &self.config
    }

    /// Map `risk_score` to a decision and its reason.
    #[must_use]
    pub fn decide(&self, risk_score: RiskScore) -> (Decision, String) {
        let value = risk_score.value();
        if value <= self.config.accept_threshold {
            (Decision::Accept, format!("Low risk score ({risk_score})"))
        } else if value >= self.config.reject_threshold {
            (Decision::Reject, format!("High risk score ({risk_score})"))
        } else {
            (
                Decision::AdditionalInformationNeeded,
                format!("Moderate risk score ({risk_score})"),
            )
        }
    }
}
