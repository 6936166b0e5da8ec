//! k-nearest-neighbors classification.
//!
//! For a query point: measure the distance to every training point, keep
//! the `k` closest, and return the most frequent label among them.
//!
//! Two tie rules make the vote deterministic:
//! - equal distances keep training order (stable sort), so the earlier
//!   training row wins a place among the `k`;
//! - equal label counts go to the numerically smallest label.

use super::validation;
use crate::dataset;
use crate::distance::Metric;
use crate::error::{Error, Result};
use crate::metrics::accuracy;
use std::collections::BTreeMap;

/// Distance from `query` to every training point.
pub fn distances(train: &[Vec<f64>], query: &[f64], metric: Metric) -> Vec<f64> {
    train.iter().map(|p| metric.distance(p, query)).collect()
}

/// Majority label among the `k` smallest `distances`.
///
/// `distances` and `labels` are parallel to the training set. Count ties
/// resolve to the smallest label.
pub fn majority_vote(distances: &[f64], labels: &[usize], k: usize) -> Result<usize> {
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if labels.len() != distances.len() {
        return Err(Error::ShapeMismatch {
            expected: format!("{} labels", distances.len()),
            actual: format!("{} labels", labels.len()),
        });
    }
    if k > distances.len() {
        return Err(Error::InvalidNeighborCount {
            k,
            n_train: distances.len(),
        });
    }

    let mut order: Vec<usize> = (0..distances.len()).collect();
    order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));

    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for &i in order.iter().take(k) {
        *counts.entry(labels[i]).or_insert(0) += 1;
    }

    // Ascending label order, strict comparison: the smallest label keeps a tie.
    let mut best: Option<(usize, usize)> = None;
    for (&label, &count) in &counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label).ok_or(Error::EmptyInput)
}

/// k-NN classifier configuration.
#[derive(Debug, Clone)]
pub struct Knn {
    /// Number of neighbors that vote.
    k: usize,
    /// Distance metric.
    metric: Metric,
}

impl Knn {
    /// Create a classifier voting over `k` neighbors with L2 distance.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            metric: Metric::L2,
        }
    }

    /// Set distance metric.
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    /// Number of neighbors that vote.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Configured distance metric.
    pub fn metric(&self) -> Metric {
        self.metric
    }

    fn check_training(&self, train: &[Vec<f64>], labels: &[usize]) -> Result<usize> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }
        let d = dataset::dimension(train)?;
        dataset::check_labels(train, labels)?;
        if self.k > train.len() {
            return Err(Error::InvalidNeighborCount {
                k: self.k,
                n_train: train.len(),
            });
        }
        Ok(d)
    }

    fn vote(&self, train: &[Vec<f64>], labels: &[usize], query: &[f64]) -> Result<usize> {
        majority_vote(&distances(train, query, self.metric), labels, self.k)
    }

    /// Predict the label of one query point.
    pub fn predict(&self, train: &[Vec<f64>], labels: &[usize], query: &[f64]) -> Result<usize> {
        let d = self.check_training(train, labels)?;
        if query.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: query.len(),
            });
        }
        self.vote(train, labels, query)
    }

    /// Fraction of `test` points whose predicted label equals `test_labels`.
    pub fn accuracy(
        &self,
        train: &[Vec<f64>],
        labels: &[usize],
        test: &[Vec<f64>],
        test_labels: &[usize],
    ) -> Result<f64> {
        let d = self.check_training(train, labels)?;
        let test_d = dataset::dimension(test)?;
        if test_d != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: test_d,
            });
        }
        dataset::check_labels(test, test_labels)?;

        let predicted: Vec<usize> = test
            .iter()
            .map(|query| self.vote(train, labels, query))
            .collect::<Result<_>>()?;
        Ok(accuracy(&predicted, test_labels))
    }

    /// Mean held-out accuracy over `k_fold` contiguous folds.
    pub fn cross_validate(
        &self,
        data: &[Vec<f64>],
        labels: &[usize],
        k_fold: usize,
    ) -> Result<f64> {
        validation::cross_validate(data, labels, k_fold, self)
    }
}
