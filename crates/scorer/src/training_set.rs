// Rust guideline compliant 2026-02-23

//! Fixed training-set adapter for the `RiskModel` port.
//!
//! Fits a [`DecisionTree`] once on four hand-labelled applicants. The fitted
//! model is immutable and shared process-wide through [`TrainingSetModel::shared`].

use std::sync::LazyLock;

use domain::{ModelError, RiskClass, RiskFeatures, RiskModel};

use crate::tree::DecisionTree;

/// Rows are `[age, smoker, chronic_illness]`.
const TRAINING_SAMPLES: [[f64; 3]; 4] = [
    [25.0, 0.0, 0.0],
    [45.0, 1.0, 0.0],
    [60.0, 1.0, 1.0],
    [35.0, 0.0, 1.0],
];

const TRAINING_LABELS: [RiskClass; 4] = [
    RiskClass::Low,
    RiskClass::Medium,
    RiskClass::High,
    RiskClass::High,
];

static SHARED: LazyLock<Result<TrainingSetModel, ModelError>> =
    LazyLock::new(TrainingSetModel::fit);

/// Concrete adapter for the `domain::RiskModel` port backed by a CART tree.
#[derive(Debug, Clone)]
pub struct TrainingSetModel {
    tree: DecisionTree<RiskClass, 3>,
}

impl TrainingSetModel {
    /// Fit a fresh model on the fixed training set.
    ///
    /// Prefer [`shared`](Self::shared); fitting is deterministic so every
    /// instance predicts identically.
    ///
    /// # Errors
    ///
    /// Propagates [`ModelError`] from the tree fit.
    pub fn fit() -> Result<Self, ModelError> {
        let tree = DecisionTree::fit(&TRAINING_SAMPLES, &TRAINING_LABELS)?;
        tracing::info!(
            samples = TRAINING_SAMPLES.len(),
            depth = tree.depth(),
            leaves = tree.leaf_count(),
            "scorer.model.fitted"
        );
        Ok(Self { tree })
    }

    /// The process-wide instance, fitted on first access.
    ///
    /// # Errors
    ///
    /// Returns the fit error if the one-time fit failed.
    pub fn shared() -> Result<&'static Self, ModelError> {
        SHARED.as_ref().map_err(Clone::clone)
    }
}

impl RiskModel for TrainingSetModel {
    fn predict(&self, features: &RiskFeatures) -> RiskClass {
        self.tree.predict(&features.0)
    }

    fn name(&self) -> &str {
        "training-set-cart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict(age: f64, smoker: f64, chronic: f64) -> RiskClass {
        TrainingSetModel::shared()
            .unwrap()
            .predict(&RiskFeatures([age, smoker, chronic]))
    }

    #[test]
    fn training_tuples_are_reproduced() {
        for (row, label) in TRAINING_SAMPLES.iter().zip(TRAINING_LABELS) {
            assert_eq!(predict(row[0], row[1], row[2]), label, "mismatch for {row:?}");
        }
    }

    #[test]
    fn reference_scenarios_classify_as_expected() {
        assert_eq!(predict(30.0, 0.0, 0.0), RiskClass::Low);
        assert_eq!(predict(50.0, 1.0, 1.0), RiskClass::High);
        assert_eq!(predict(40.0, 1.0, 0.0), RiskClass::Medium);
    }

    #[test]
    fn chronic_illness_alone_is_high_risk() {
        assert_eq!(predict(20.0, 0.0, 1.0), RiskClass::High);
        assert_eq!(predict(90.0, 1.0, 1.0), RiskClass::High);
    }

    #[test]
    fn shared_instance_is_fitted_once() {
        let a = TrainingSetModel::shared().unwrap();
        let b = TrainingSetModel::shared().unwrap();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.name(), "training-set-cart");
    }

    #[test]
    fn shared_model_is_usable_across_threads() {
        let model = TrainingSetModel::shared().unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || model.predict(&RiskFeatures([30.0, 0.0, 0.0]))))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), RiskClass::Low);
        }
    }
}
