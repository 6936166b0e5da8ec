//! Evaluation metrics.

/// Fraction of positions where `pred` equals `truth`.
///
/// Returns a value in [0, 1]. Empty or length-mismatched inputs score 0.
///
/// # Example
///
/// ```rust
/// use huddle::metrics::accuracy;
///
/// assert_eq!(accuracy(&[0, 1, 1, 0], &[0, 1, 0, 0]), 0.75);
/// assert_eq!(accuracy(&[], &[]), 0.0);
/// ```
pub fn accuracy(pred: &[usize], truth: &[usize]) -> f64 {
    if pred.len() != truth.len() || pred.is_empty() {
        return 0.0;
    }

    let correct = pred.iter().zip(truth).filter(|(p, t)| p == t).count();
    correct as f64 / pred.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_perfect() {
        assert_eq!(accuracy(&[3, 1, 2], &[3, 1, 2]), 1.0);
    }

    #[test]
    fn test_accuracy_none() {
        assert_eq!(accuracy(&[0, 0], &[1, 1]), 0.0);
    }

    #[test]
    fn test_accuracy_mismatched_lengths() {
        assert_eq!(accuracy(&[0, 1], &[0]), 0.0);
    }
}
