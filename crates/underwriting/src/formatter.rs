// Rust guideline compliant 2026-02-23

//! Formatter -- packages a decision and reason into an [`UnderwritingResult`].

use domain::{Decision, UnderwritingResult};

/// Pure packaging; performs no checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultFormatter;

impl ResultFormatter {
    /// Create a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Wrap `decision` and `reason` into a result record.
    #[must_use]
    pub fn generate(&self, decision: Decision, reason: impl Into<String>) -> UnderwritingResult {
        UnderwritingResult { decision, reason: reason.into() }
    }
}
