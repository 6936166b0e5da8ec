//! Point-to-point distances.
//!
//! | Metric | Formula |
//! |--------|---------|
//! | L2 (Euclidean) | sqrt(Σ (aᵢ - bᵢ)²) |
//! | L1 (Manhattan) | Σ \|aᵢ - bᵢ\| |
//!
//! The free functions assume both points have the same dimension. That is a
//! dataset invariant checked once by [`crate::dataset::dimension`], not on
//! every call.

use crate::error::Error;
use core::fmt;
use core::str::FromStr;

/// Euclidean distance between two points.
#[inline]
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Manhattan distance between two points.
#[inline]
pub fn manhattan(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum()
}

/// Distance metric used by the k-NN engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Manhattan distance.
    L1,
    /// Euclidean distance.
    #[default]
    L2,
}

impl Metric {
    /// Distance between `a` and `b` under this metric.
    #[inline]
    pub fn distance(self, a: &[f64], b: &[f64]) -> f64 {
        match self {
            Metric::L1 => manhattan(a, b),
            Metric::L2 => euclidean(a, b),
        }
    }
}

impl FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L1" => Ok(Metric::L1),
            "L2" => Ok(Metric::L2),
            other => Err(Error::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::L1 => write!(f, "L1"),
            Metric::L2 => write!(f, "L2"),
        }
    }
}
