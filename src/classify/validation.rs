//! Contiguous k-fold cross-validation.
//!
//! The dataset is cut into `k_fold` equal, contiguous folds:
//!
//! ```text
//! rows:  [ fold 0 | fold 1 | ... | fold k-1 ]
//! round i: validate on fold i, train on the other folds in order
//! ```
//!
//! The score is the mean held-out accuracy over all rounds. Rows are never
//! shuffled, so the result depends on input order.

use super::knn::Knn;
use crate::dataset;
use crate::error::{Error, Result};
use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Training and held-out parts of one cross-validation round.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    /// Rows of every fold except the held-out one, in order.
    pub train_data: Vec<Vec<f64>>,
    /// Labels parallel to `train_data`.
    pub train_labels: Vec<usize>,
    /// Rows of the held-out fold.
    pub validation_data: Vec<Vec<f64>>,
    /// Labels parallel to `validation_data`.
    pub validation_labels: Vec<usize>,
}

/// Size of one fold, after checking that `k_fold` evenly divides the data.
fn fold_size(n: usize, k_fold: usize) -> Result<usize> {
    if k_fold < 2 {
        return Err(Error::InvalidParameter {
            name: "k_fold",
            message: "need at least two folds",
        });
    }
    if n % k_fold != 0 {
        return Err(Error::ShapeMismatch {
            expected: format!("a multiple of {k_fold} rows"),
            actual: format!("{n} rows"),
        });
    }
    Ok(n / k_fold)
}

/// Hold out fold `validation_index` of `k_fold` contiguous folds.
pub fn split(
    data: &[Vec<f64>],
    labels: &[usize],
    validation_index: usize,
    k_fold: usize,
) -> Result<Split> {
    dataset::dimension(data)?;
    dataset::check_labels(data, labels)?;
    let size = fold_size(data.len(), k_fold)?;
    if validation_index >= k_fold {
        return Err(Error::InvalidParameter {
            name: "validation_index",
            message: "must be smaller than k_fold",
        });
    }

    let start = validation_index * size;
    let end = start + size;

    let mut train_data = Vec::with_capacity(data.len() - size);
    train_data.extend_from_slice(&data[..start]);
    train_data.extend_from_slice(&data[end..]);

    let mut train_labels = Vec::with_capacity(labels.len() - size);
    train_labels.extend_from_slice(&labels[..start]);
    train_labels.extend_from_slice(&labels[end..]);

    Ok(Split {
        train_data,
        train_labels,
        validation_data: data[start..end].to_vec(),
        validation_labels: labels[start..end].to_vec(),
    })
}

fn score_fold(
    data: &[Vec<f64>],
    labels: &[usize],
    fold: usize,
    k_fold: usize,
    knn: &Knn,
) -> Result<f64> {
    let s = split(data, labels, fold, k_fold)?;
    let acc = knn.accuracy(
        &s.train_data,
        &s.train_labels,
        &s.validation_data,
        &s.validation_labels,
    )?;
    debug!(
        "cross-validation: fold {}/{} k={} metric={} accuracy {}",
        fold + 1,
        k_fold,
        knn.k(),
        knn.metric(),
        acc
    );
    Ok(acc)
}

/// Mean held-out accuracy of `knn` over `k_fold` contiguous folds.
pub fn cross_validate(
    data: &[Vec<f64>],
    labels: &[usize],
    k_fold: usize,
    knn: &Knn,
) -> Result<f64> {
    dataset::dimension(data)?;
    dataset::check_labels(data, labels)?;
    fold_size(data.len(), k_fold)?;

    #[cfg(feature = "parallel")]
    let scores: Vec<f64> = (0..k_fold)
        .into_par_iter()
        .map(|fold| score_fold(data, labels, fold, k_fold, knn))
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let scores: Vec<f64> = (0..k_fold)
        .map(|fold| score_fold(data, labels, fold, k_fold, knn))
        .collect::<Result<_>>()?;

    Ok(scores.iter().sum::<f64>() / k_fold as f64)
}
