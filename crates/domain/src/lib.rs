// Rust guideline compliant 2026-02-23

//! Shared domain types for the underwriting pipeline.
//!
//! Defines `Application`, `ApplicantProfile`, `RiskScore`, `Decision`,
//! `UnderwritingResult`, the error enums, and the hexagonal port traits
//! `RiskModel` and `RiskScorer`. Every pipeline crate depends on this one.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Application input
// ---------------------------------------------------------------------------

/// One input field as received from the caller.
///
/// `Missing` and `Malformed` are kept apart so callers can tell an absent
/// field from one that was supplied with the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field<T> {
    /// The field was not supplied.
    #[default]
    Missing,
    /// The field was supplied but could not be read as `T`.
    Malformed {
        /// Raw textual form of the rejected value.
        raw: String,
    },
    /// The field was supplied with a well-typed value.
    Present(T),
}

impl<T> Field<T> {
    /// Return the value when present.
    #[must_use]
    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing | Self::Malformed { .. } => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Present(value)
    }
}

/// An insurance application as submitted, before validation.
///
/// Exists only for the duration of one pipeline call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Application {
    /// Applicant age in whole years.
    pub age: Field<i64>,
    /// Whether the applicant smokes.
    pub smoker: Field<bool>,
    /// Whether the applicant has a chronic illness.
    pub chronic_illness: Field<bool>,
}

impl Application {
    /// Build an application with every required field present.
    #[must_use]
    pub fn new(age: i64, smoker: bool, chronic_illness: bool) -> Self {
        Self {
            age: Field::Present(age),
            smoker: Field::Present(smoker),
            chronic_illness: Field::Present(chronic_illness),
        }
    }

    /// Replace the `age` field.
    #[must_use]
    pub fn with_age(mut self, age: impl Into<Field<i64>>) -> Self {
        self.age = age.into();
        self
    }

    /// Replace the `smoker` field.
    #[must_use]
    pub fn with_smoker(mut self, smoker: impl Into<Field<bool>>) -> Self {
        self.smoker = smoker.into();
        self
    }

    /// Replace the `chronic_illness` field.
    #[must_use]
    pub fn with_chronic_illness(mut self, chronic_illness: impl Into<Field<bool>>) -> Self {
        self.chronic_illness = chronic_illness.into();
        self
    }
}

/// A structurally valid application: every required field present and typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicantProfile {
    /// Applicant age in whole years.
    pub age: i64,
    /// Whether the applicant smokes.
    pub smoker: bool,
    /// Whether the applicant has a chronic illness.
    pub chronic_illness: bool,
}

/// Feature vector fed to a [`RiskModel`]: `[age, smoker, chronic_illness]`,
/// flags encoded as `0.0` / `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskFeatures(pub [f64; 3]);

impl From<&ApplicantProfile> for RiskFeatures {
    #[expect(
        clippy::cast_precision_loss,
        reason = "validated ages are far below 2^53"
    )]
    fn from(profile: &ApplicantProfile) -> Self {
        Self([
            profile.age as f64,
            f64::from(u8::from(profile.smoker)),
            f64::from(u8::from(profile.chronic_illness)),
        ])
    }
}

// ---------------------------------------------------------------------------
// Risk classes and scores
// ---------------------------------------------------------------------------

/// Discrete risk class predicted by a [`RiskModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskClass {
    /// Class 0.
    Low,
    /// Class 1.
    Medium,
    /// Class 2.
    High,
}

/// Scalar risk in `[0, 1]` derived from a [`RiskClass`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RiskScore(pub f64);

impl RiskScore {
    /// Underlying value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for RiskScore {
    // Debug formatting keeps a trailing `.0` on whole numbers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Decisions and results
// ---------------------------------------------------------------------------

/// Terminal verdict of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Decision {
    /// Issue the policy.
    Accept,
    /// Decline the policy.
    Reject,
    /// Ask the applicant for more information.
    #[serde(rename = "Additional Information Needed")]
    AdditionalInformationNeeded,
}

impl Decision {
    /// Literal tag used in results.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::AdditionalInformationNeeded => "Additional Information Needed",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single output record produced per application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnderwritingResult {
    /// Verdict.
    pub decision: Decision,
    /// Human-readable justification.
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why an application failed validation or a business rule.
///
/// These are ordinary outcomes, not faults; the coordinator turns each into
/// a normal [`UnderwritingResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    /// One or more required fields are absent or unusable.
    #[error("Missing required fields: [{}]", quoted_list(.fields))]
    MissingFields {
        /// Field names in declaration order.
        fields: Vec<&'static str>,
    },
    /// Age lies outside the insurable range.
    #[error("Age out of allowed range (18-100).")]
    AgeOutOfRange {
        /// The rejected age.
        age: i64,
    },
}

fn quoted_list(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| format!("'{f}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while fitting a risk model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// No training samples were supplied.
    #[error("training set is empty")]
    EmptyTrainingSet,
    /// Sample and label counts differ.
    #[error("training set has {samples} samples but {labels} labels")]
    LengthMismatch {
        /// Number of feature rows.
        samples: usize,
        /// Number of labels.
        labels: usize,
    },
    /// A feature value is NaN or infinite.
    #[error("non-finite value in sample {sample}, feature {feature}")]
    NonFiniteFeature {
        /// Row index.
        sample: usize,
        /// Column index.
        feature: usize,
    },
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: a fitted classifier mapping features to a risk class.
///
/// Implementations must be read-only at inference time so a single fitted
/// instance can be shared across threads.
pub trait RiskModel {
    /// Predict the risk class for `features`.
    fn predict(&self, features: &RiskFeatures) -> RiskClass;

    /// Name of this model (e.g. `"training-set-cart"`).
    fn name(&self) -> &str;
}

impl<M: RiskModel + ?Sized> RiskModel for &M {
    fn predict(&self, features: &RiskFeatures) -> RiskClass {
        (**self).predict(features)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Hexagonal port: produce a risk score for a validated applicant.
///
/// The coordinator depends exclusively on this trait, never on a concrete
/// scorer.
pub trait RiskScorer {
    /// Score `profile`.
    fn score(&self, profile: &ApplicantProfile) -> RiskScore;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------
    // Application and fields
    // ------------------------------------------------------------------

    #[test]
    fn default_application_has_every_field_missing() {
        let app = Application::default();
        assert_eq!(app.age, Field::Missing);
        assert_eq!(app.smoker, Field::Missing);
        assert_eq!(app.chronic_illness, Field::Missing);
    }

    #[test]
    fn setters_accept_plain_values_and_fields() {
        let app = Application::default()
            .with_age(30)
            .with_smoker(Field::Malformed { raw: "\"yes\"".to_owned() });
        assert_eq!(app.age.present(), Some(&30));
        assert!(app.smoker.present().is_none());
        assert_eq!(app.chronic_illness, Field::Missing);
    }

    #[test]
    fn features_encode_flags_as_zero_or_one() {
        let profile = ApplicantProfile { age: 40, smoker: true, chronic_illness: false };
        assert_eq!(RiskFeatures::from(&profile), RiskFeatures([40.0, 1.0, 0.0]));
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    #[test]
    fn risk_score_display_matches_reference_format() {
        assert_eq!(RiskScore(0.1).to_string(), "0.1");
        assert_eq!(RiskScore(0.9).to_string(), "0.9");
        assert_eq!(RiskScore(1.0).to_string(), "1.0");
    }

    #[test]
    fn decision_tags_are_literal() {
        assert_eq!(Decision::Accept.to_string(), "Accept");
        assert_eq!(Decision::Reject.as_str(), "Reject");
        assert_eq!(
            Decision::AdditionalInformationNeeded.to_string(),
            "Additional Information Needed"
        );
    }

    #[test]
    fn result_serializes_to_decision_and_reason() {
        let result = UnderwritingResult {
            decision: Decision::AdditionalInformationNeeded,
            reason: "Moderate risk score (0.5)".to_owned(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"decision":"Additional Information Needed","reason":"Moderate risk score (0.5)"}"#
        );
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    #[test]
    fn missing_fields_message_lists_names_in_brackets() {
        let one = ValidationFailure::MissingFields { fields: vec!["chronic_illness"] };
        assert_eq!(one.to_string(), "Missing required fields: ['chronic_illness']");
        let two = ValidationFailure::MissingFields { fields: vec!["age", "smoker"] };
        assert_eq!(two.to_string(), "Missing required fields: ['age', 'smoker']");
    }

    #[test]
    fn age_out_of_range_message_is_fixed() {
        let e = ValidationFailure::AgeOutOfRange { age: 17 };
        assert_eq!(e.to_string(), "Age out of allowed range (18-100).");
    }

    #[test]
    fn model_error_variants() {
        let e = ModelError::LengthMismatch { samples: 4, labels: 3 };
        assert_eq!(e.to_string(), "training set has 4 samples but 3 labels");
        assert_eq!(ModelError::EmptyTrainingSet.to_string(), "training set is empty");
    }

    // ------------------------------------------------------------------
    // Ports
    // ------------------------------------------------------------------

    /// Verify that a minimal `RiskModel` works through the reference blanket impl.
    #[test]
    fn risk_model_usable_through_reference() {
        struct Constant;

        impl RiskModel for Constant {
            fn predict(&self, _features: &RiskFeatures) -> RiskClass {
                RiskClass::Medium
            }

            fn name(&self) -> &str {
                "constant"
            }
        }

        fn classify<M: RiskModel>(model: M) -> RiskClass {
            model.predict(&RiskFeatures([0.0; 3]))
        }

        let model = Constant;
        assert_eq!(classify(&model), RiskClass::Medium);
        assert_eq!((&model).name(), "constant");
    }
}
