// Rust guideline compliant 2026-02-23

//! Greedy CART decision tree over fixed-width `f64` feature rows.
//!
//! Splits minimize weighted Gini impurity. Candidate thresholds are the
//! midpoints between consecutive distinct values of a feature. Equal-impurity
//! candidates keep the one found first (lower feature index, then lower
//! threshold), so fitting is fully deterministic.

use std::collections::BTreeMap;

use domain::ModelError;

/// A fitted classification tree.
#[derive(Debug, Clone)]
pub struct DecisionTree<L, const N: usize> {
    root: Node<L>,
}

#[derive(Debug, Clone)]
enum Node<L> {
    Leaf {
        label: L,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node<L>>,
        right: Box<Node<L>>,
    },
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    feature: usize,
    threshold: f64,
    impurity: f64,
}

impl<L: Copy + Ord, const N: usize> DecisionTree<L, N> {
    /// Fit a tree on `samples` and their `labels`.
    ///
    /// Nodes keep splitting until they are pure or no feature separates them;
    /// leaves predict their majority label, ties going to the smallest label.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyTrainingSet`], [`ModelError::LengthMismatch`],
    /// or [`ModelError::NonFiniteFeature`] for unusable training data.
    pub fn fit(samples: &[[f64; N]], labels: &[L]) -> Result<Self, ModelError> {
        if samples.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }
        if samples.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                samples: samples.len(),
                labels: labels.len(),
            });
        }
        for (sample, row) in samples.iter().enumerate() {
            if let Some(feature) = row.iter().position(|v| !v.is_finite()) {
                return Err(ModelError::NonFiniteFeature { sample, feature });
            }
        }

        let indices: Vec<usize> = (0..samples.len()).collect();
        Ok(Self { root: grow(samples, labels, &indices) })
    }

    /// Predict the label for `x`. Rows go left when `x[feature] <= threshold`.
    #[must_use]
    pub fn predict(&self, x: &[f64; N]) -> L {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { label } => return *label,
                Node::Split { feature, threshold, left, right } => {
                    node = if x[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    /// Number of split levels; a single leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

impl<L> Node<L> {
    fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Split { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

fn grow<L: Copy + Ord, const N: usize>(
    samples: &[[f64; N]],
    labels: &[L],
    indices: &[usize],
) -> Node<L> {
    let counts = class_counts(labels, indices);
    if counts.len() <= 1 {
        return Node::Leaf { label: majority(&counts, labels[indices[0]]) };
    }
    let Some(best) = best_split(samples, labels, indices) else {
        return Node::Leaf { label: majority(&counts, labels[indices[0]]) };
    };

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .partition(|&&i| samples[i][best.feature] <= best.threshold);
    Node::Split {
        feature: best.feature,
        threshold: best.threshold,
        left: Box::new(grow(samples, labels, &left)),
        right: Box::new(grow(samples, labels, &right)),
    }
}

fn best_split<L: Copy + Ord, const N: usize>(
    samples: &[[f64; N]],
    labels: &[L],
    indices: &[usize],
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for feature in 0..N {
        let mut values: Vec<f64> = indices.iter().map(|&i| samples[i][feature]).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();

        for pair in values.windows(2) {
            let mut threshold = f64::midpoint(pair[0], pair[1]);
            // Adjacent floats can round the midpoint up onto the larger value.
            if threshold >= pair[1] {
                threshold = pair[0];
            }
            let (left, right): (Vec<usize>, Vec<usize>) =
                indices.iter().partition(|&&i| samples[i][feature] <= threshold);
            let impurity = weighted_gini(labels, &left, &right);
            if best.is_none_or(|b| impurity < b.impurity) {
                best = Some(Candidate { feature, threshold, impurity });
            }
        }
    }
    best
}

fn class_counts<L: Copy + Ord>(labels: &[L], indices: &[usize]) -> BTreeMap<L, usize> {
    let mut counts = BTreeMap::new();
    for &i in indices {
        *counts.entry(labels[i]).or_insert(0) += 1;
    }
    counts
}

/// Most frequent label; iteration is ascending so ties keep the smallest.
fn majority<L: Copy + Ord>(counts: &BTreeMap<L, usize>, fallback: L) -> L {
    let mut best = (fallback, 0usize);
    for (&label, &count) in counts {
        if count > best.1 {
            best = (label, count);
        }
    }
    best.0
}

#[expect(clippy::cast_precision_loss, reason = "training sets are tiny")]
fn gini<L: Copy + Ord>(labels: &[L], indices: &[usize]) -> f64 {
    let n = indices.len() as f64;
    let sum_sq: f64 = class_counts(labels, indices)
        .values()
        .map(|&c| {
            let p = c as f64 / n;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

#[expect(clippy::cast_precision_loss, reason = "training sets are tiny")]
fn weighted_gini<L: Copy + Ord>(labels: &[L], left: &[usize], right: &[usize]) -> f64 {
    let n = (left.len() + right.len()) as f64;
    (left.len() as f64 * gini(labels, left) + right.len() as f64 * gini(labels, right)) / n
}
