//! K-means clustering.
//!
//! Partitions data into k clusters by minimizing the sum of squared
//! distances from each point to its assigned center:
//!
//! ```text
//! J = Σᵢ ||xᵢ - μ_{a(i)}||²
//! ```
//!
//! # Lloyd's Algorithm
//!
//! 1. Draw k centers uniformly from `[min·2/3, max·2/3]` in every
//!    coordinate, where min and max run over the whole dataset
//! 2. **Assign**: each point → nearest center (lowest index on ties)
//! 3. **Update**: each center → mean of its points; a center that received
//!    no points keeps its previous position
//! 4. Repeat until J stops changing
//!
//! J never increases: step 2 can only lower each point's term and step 3
//! replaces each center by the minimizer of its own terms.
//!
//! # Stopping
//!
//! The default tolerance is `0.0`, meaning J must repeat bit-for-bit
//! between two consecutive iterations. Under floating-point drift that may
//! take a while, so `max_iter` bounds the loop; a fit that hits the cap is
//! still returned with [`KmeansFit::converged`] set to `false`.

use super::traits::Clustering;
use crate::dataset;
use crate::distance::squared_euclidean;
use crate::error::{Error, Result};
use log::{debug, warn};
use ndarray::{Array2, ArrayView1, ArrayView2};
use rand::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Largest objective change still treated as "unchanged".
    tol: f64,
    /// Random seed.
    seed: Option<u64>,
}

/// Result of a k-means run.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Final centers, one row per cluster (K × D).
    pub centers: Array2<f64>,
    /// Final objective value.
    pub objective: f64,
    /// Center index for every input row.
    pub labels: Vec<usize>,
    /// Iterations performed.
    pub iterations: usize,
    /// Whether the objective settled before `max_iter`.
    pub converged: bool,
    /// Objective after each iteration.
    pub history: Vec<f64>,
}

impl Kmeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 300,
            tol: 0.0,
            seed: None,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance on the objective change.
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self, n: usize) -> Result<()> {
        if self.k == 0 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_items: n,
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be finite and non-negative",
            });
        }
        Ok(())
    }

    /// Draw the initial K × D centers.
    pub fn init_centers(&self, data: &[Vec<f64>]) -> Result<Array2<f64>> {
        let d = dataset::dimension(data)?;
        self.validate(data.len())?;

        let (min, max) = data
            .iter()
            .flatten()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        // Divide first: `max * 2.0` overflows for coordinates near f64::MAX.
        let low = min / 3.0 * 2.0;
        let high = max / 3.0 * 2.0;
        if !(high - low).is_finite() {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "coordinate range too wide to sample initial centers",
            });
        }

        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        Ok(Array2::from_shape_fn((self.k, d), |_| {
            rng.random_range(low..=high)
        }))
    }

    /// Initialize centers, then run Lloyd iterations.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<KmeansFit> {
        let centers = self.init_centers(data)?;
        self.fit_from(data, centers)
    }

    /// Run Lloyd iterations from caller-supplied centers.
    pub fn fit_from(&self, data: &[Vec<f64>], initial_centers: Array2<f64>) -> Result<KmeansFit> {
        let d = dataset::dimension(data)?;
        let n = data.len();
        self.validate(n)?;

        if initial_centers.dim() != (self.k, d) {
            return Err(Error::ShapeMismatch {
                expected: format!("{}x{} centers", self.k, d),
                actual: format!(
                    "{}x{} centers",
                    initial_centers.nrows(),
                    initial_centers.ncols()
                ),
            });
        }
        if initial_centers.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "initial_centers",
                message: "must be finite",
            });
        }

        let data_arr = to_array(data, d)?;
        let mut centers = initial_centers;
        let mut labels = vec![0usize; n];
        let mut history = Vec::new();
        let mut previous: Option<f64> = None;
        let mut converged = false;

        for iter in 0..self.max_iter {
            labels = assign(data_arr.view(), centers.view());
            update_centers(data_arr.view(), &labels, &mut centers);
            let current = objective(data_arr.view(), centers.view(), &labels);
            history.push(current);
            debug!("kmeans: iteration {} objective {}", iter + 1, current);

            if previous.is_some_and(|p| (p - current).abs() <= self.tol) {
                converged = true;
                break;
            }
            previous = Some(current);
        }

        if !converged {
            warn!(
                "kmeans: objective still changing after {} iterations",
                self.max_iter
            );
        }

        Ok(KmeansFit {
            objective: history.last().copied().unwrap_or(0.0),
            iterations: history.len(),
            centers,
            labels,
            converged,
            history,
        })
    }
}

fn to_array(data: &[Vec<f64>], d: usize) -> Result<Array2<f64>> {
    let n = data.len();
    let flat: Vec<f64> = data.iter().flatten().copied().collect();
    Array2::from_shape_vec((n, d), flat).map_err(|e| Error::ShapeMismatch {
        expected: format!("{n}x{d} data"),
        actual: e.to_string(),
    })
}

/// Squared Euclidean distance between two rows.
#[inline]
fn squared_distance(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> f64 {
    match (a.as_slice(), b.as_slice()) {
        (Some(a), Some(b)) => squared_euclidean(a, b),
        _ => {
            let diff = a - b;
            diff.dot(&diff)
        }
    }
}

fn nearest_center(point: &ArrayView1<'_, f64>, centers: &ArrayView2<'_, f64>) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;
    for (k, center) in centers.rows().into_iter().enumerate() {
        let dist = squared_distance(point, &center);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = k;
        }
    }
    best_cluster
}

/// Index of the nearest center for every row of `data`.
///
/// Ties go to the lowest center index.
#[cfg(not(feature = "parallel"))]
pub fn assign(data: ArrayView2<'_, f64>, centers: ArrayView2<'_, f64>) -> Vec<usize> {
    data.rows()
        .into_iter()
        .map(|point| nearest_center(&point, &centers))
        .collect()
}

/// Index of the nearest center for every row of `data`.
///
/// Ties go to the lowest center index. Rows are scored in parallel.
#[cfg(feature = "parallel")]
pub fn assign(data: ArrayView2<'_, f64>, centers: ArrayView2<'_, f64>) -> Vec<usize> {
    (0..data.nrows())
        .into_par_iter()
        .map(|i| nearest_center(&data.row(i), &centers))
        .collect()
}

/// Move each center to the mean of the rows assigned to it.
///
/// Centers with no assigned rows are left where they are.
pub fn update_centers(data: ArrayView2<'_, f64>, labels: &[usize], centers: &mut Array2<f64>) {
    let (k, d) = centers.dim();
    let mut sums = Array2::<f64>::zeros((k, d));
    let mut counts = vec![0usize; k];

    for (i, &label) in labels.iter().enumerate() {
        for j in 0..d {
            sums[[label, j]] += data[[i, j]];
        }
        counts[label] += 1;
    }

    for (c, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        for j in 0..d {
            centers[[c, j]] = sums[[c, j]] / count as f64;
        }
    }
}

/// Sum of squared distances from each row to its assigned center.
pub fn objective(data: ArrayView2<'_, f64>, centers: ArrayView2<'_, f64>, labels: &[usize]) -> f64 {
    labels
        .iter()
        .enumerate()
        .map(|(i, &label)| squared_distance(&data.row(i), &centers.row(label)))
        .sum()
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        self.fit(data).map(|fit| fit.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
