//! Shape checks shared by every engine entry point.

use crate::error::{Error, Result};

/// Validate a dataset and return its dimensionality.
///
/// Fails on an empty dataset, zero-dimensional points, rows whose length
/// differs from the first row, and NaN or infinite coordinates.
pub fn dimension(data: &[Vec<f64>]) -> Result<usize> {
    let first = data.first().ok_or(Error::EmptyInput)?;
    let d = first.len();
    if d == 0 {
        return Err(Error::InvalidParameter {
            name: "data",
            message: "points must have at least one coordinate",
        });
    }

    for (index, p) in data.iter().enumerate() {
        if p.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: p.len(),
            });
        }
        if p.iter().any(|x| !x.is_finite()) {
            return Err(Error::NonFinite { index });
        }
    }

    Ok(d)
}

/// Check that `labels` has one entry per row of `data`.
pub(crate) fn check_labels(data: &[Vec<f64>], labels: &[usize]) -> Result<()> {
    if data.len() != labels.len() {
        return Err(Error::ShapeMismatch {
            expected: format!("{} labels", data.len()),
            actual: format!("{} labels", labels.len()),
        });
    }
    Ok(())
}
