// Rust guideline compliant 2026-02-23

//! Validator component -- checks that an application carries every required
//! field and that it satisfies the age business rule.
//!
//! Entry points: [`ApplicationValidator::validate`],
//! [`ApplicationValidator::handle_conflicts`].

use domain::{ApplicantProfile, Application, Field, ValidationFailure};

/// Required field names, in declaration order.
pub const REQUIRED_FIELDS: [&str; 3] = ["age", "smoker", "chronic_illness"];

/// Youngest insurable age (inclusive).
pub const MIN_AGE: i64 = 18;

/// Oldest insurable age (inclusive).
pub const MAX_AGE: i64 = 100;

// ---------------------------------------------------------------------------
// ApplicationValidator
// ---------------------------------------------------------------------------

/// Stateless field-presence and business-rule checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationValidator;

impl ApplicationValidator {
    /// Create a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Check that every required field is present and well-typed.
    ///
    /// A malformed field is reported exactly like a missing one; the raw value
    /// is only logged.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure::MissingFields`] naming every unusable
    /// field in [`REQUIRED_FIELDS`] order.
    pub fn validate(&self, application: &Application) -> Result<ApplicantProfile, ValidationFailure> {
        let mut missing = Vec::new();
        let age = take(REQUIRED_FIELDS[0], &application.age, &mut missing);
        let smoker = take(REQUIRED_FIELDS[1], &application.smoker, &mut missing);
        let chronic_illness = take(REQUIRED_FIELDS[2], &application.chronic_illness, &mut missing);

        match (age, smoker, chronic_illness) {
            (Some(age), Some(smoker), Some(chronic_illness)) => {
                Ok(ApplicantProfile { age, smoker, chronic_illness })
            }
            _ => {
                tracing::debug!(fields = ?missing, "validator.fields.missing");
                Err(ValidationFailure::MissingFields { fields: missing })
            }
        }
    }

    /// Enforce `MIN_AGE <= age <= MAX_AGE`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationFailure::AgeOutOfRange`] when the age is outside
    /// the inclusive range.
    pub fn handle_conflicts(&self, profile: &ApplicantProfile) -> Result<(), ValidationFailure> {
        if (MIN_AGE..=MAX_AGE).contains(&profile.age) {
            Ok(())
        } else {
            tracing::debug!(age = profile.age, "validator.age.out_of_range");
            Err(ValidationFailure::AgeOutOfRange { age: profile.age })
        }
    }
}

fn take<T: Copy>(name: &'static str, field: &Field<T>, missing: &mut Vec<&'static str>) -> Option<T> {
    match field {
        Field::Present(v) => Some(*v),
        Field::Missing => {
            missing.push(name);
            None
        }
        Field::Malformed { raw } => {
            tracing::warn!(field = name, raw = %raw, "validator.field.malformed");
            missing.push(name);
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
