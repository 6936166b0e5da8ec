//! Hierarchical (agglomerative) clustering.
//!
//! Bottom-up: every point starts as its own cluster, then the two closest
//! clusters are merged, one pair per step, until `stop_length` clusters
//! remain.
//!
//! # One Merge Step
//!
//! ```text
//! D[i][j] = linkage(C_i, C_j)          for every i, j
//! p(i)    = argmin_{j != i} D[i][j]    nearest distinct cluster of row i
//! r       = argmin_i D[i][p(i)]        globally closest row
//! C_r     = C_r ++ C_p(r)              r absorbs its partner
//! ```
//!
//! The diagonal is skipped outright rather than taking the second-smallest
//! entry of each row, so two clusters at distance zero (duplicate points)
//! still merge with each other and never with themselves.
//!
//! Ties resolve to the lowest index met first, at both the row and the
//! global level, so a run is fully determined by the input order.
//!
//! # Cost
//!
//! The full M×M matrix is recomputed every step: O(n³) linkage evaluations
//! over a run, each O(|C_i|·|C_j|) for single, complete and average linkage.
//! Fine for hundreds of points, not for tens of thousands.

use super::linkage::Linkage;
use super::traits::Clustering;
use crate::dataset;
use crate::error::{Error, Result};
use log::{debug, trace};

/// One cluster of a finished run.
///
/// Points keep the order in which they were absorbed: a merge appends the
/// absorbed cluster's points after the absorbing cluster's.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    members: Vec<usize>,
    points: Vec<Vec<f64>>,
}

impl Cluster {
    /// Row indices into the input dataset, parallel to [`Cluster::points`].
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// The points of this cluster.
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// Take ownership of the points.
    pub fn into_points(self) -> Vec<Vec<f64>> {
        self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for clusters produced by [`Hac`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A single merge step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    /// Position of the absorbing cluster before the merge.
    pub into: usize,
    /// Position of the absorbed (removed) cluster before the merge.
    pub from: usize,
    /// Linkage distance that selected this pair.
    pub distance: f64,
    /// Size of the resulting cluster.
    pub size: usize,
}

/// Result of [`Hac::fit`].
#[derive(Debug, Clone)]
pub struct HacFit {
    /// Final clusters, exactly `stop_length` of them.
    pub clusters: Vec<Cluster>,
    /// Merge history in execution order (`n - stop_length` entries).
    pub merges: Vec<Merge>,
}

impl HacFit {
    /// Cluster index for every input row.
    pub fn labels(&self) -> Vec<usize> {
        let n = self.clusters.iter().map(Cluster::len).sum();
        let mut labels = vec![0; n];
        for (label, cluster) in self.clusters.iter().enumerate() {
            for &row in &cluster.members {
                labels[row] = label;
            }
        }
        labels
    }
}

/// Hierarchical agglomerative clustering down to a fixed cluster count.
#[derive(Debug, Clone)]
pub struct Hac {
    /// Number of clusters at which merging stops.
    stop_length: usize,
    /// Linkage criterion.
    linkage: Linkage,
}

/// Cluster inside a running merge loop; points are borrowed from the input.
#[derive(Debug, Clone)]
struct Group<'a> {
    members: Vec<usize>,
    points: Vec<&'a [f64]>,
}

impl<'a> Group<'a> {
    fn singleton(row: usize, point: &'a [f64]) -> Self {
        Self {
            members: vec![row],
            points: vec![point],
        }
    }

    fn absorb(&mut self, other: Group<'a>) {
        self.members.extend(other.members);
        self.points.extend(other.points);
    }

    fn into_cluster(self) -> Cluster {
        Cluster {
            members: self.members,
            points: self.points.into_iter().map(<[f64]>::to_vec).collect(),
        }
    }
}

impl Hac {
    /// Create a clusterer that stops at `stop_length` clusters.
    pub fn new(stop_length: usize) -> Self {
        Self {
            stop_length,
            linkage: Linkage::Average,
        }
    }

    /// Set linkage criterion.
    pub fn with_linkage(mut self, linkage: Linkage) -> Self {
        self.linkage = linkage;
        self
    }

    /// Configured linkage criterion.
    pub fn linkage(&self) -> Linkage {
        self.linkage
    }

    /// Run the merge loop and return the clusters plus merge history.
    pub fn fit(&self, data: &[Vec<f64>]) -> Result<HacFit> {
        dataset::dimension(data)?;

        let n = data.len();
        if self.stop_length == 0 || self.stop_length > n {
            return Err(Error::InvalidClusterCount {
                requested: self.stop_length,
                n_items: n,
            });
        }

        let mut state: Vec<Group<'_>> = data
            .iter()
            .enumerate()
            .map(|(row, p)| Group::singleton(row, p))
            .collect();
        let mut merges = Vec::with_capacity(n - self.stop_length);

        while state.len() > self.stop_length {
            trace!("hac: {} clusters remaining", state.len());
            let (next, merge) = step(state, self.linkage)?;
            debug!(
                "hac: merged cluster {} into {} at {} (size {})",
                merge.from, merge.into, merge.distance, merge.size
            );
            state = next;
            merges.push(merge);
        }

        Ok(HacFit {
            clusters: state.into_iter().map(Group::into_cluster).collect(),
            merges,
        })
    }
}

/// Consume one clustering state and produce the next, one cluster smaller.
fn step<'a>(mut state: Vec<Group<'a>>, linkage: Linkage) -> Result<(Vec<Group<'a>>, Merge)> {
    let (r, c, distance) = closest_pair(&state, linkage)?;

    let absorbed = state.remove(c);
    let keep = if c < r { r - 1 } else { r };
    state[keep].absorb(absorbed);

    let merge = Merge {
        into: r,
        from: c,
        distance,
        size: state[keep].points.len(),
    };
    Ok((state, merge))
}

/// Row `r`, its nearest distinct partner `c`, and their linkage distance.
///
/// Requires at least two clusters.
fn closest_pair(state: &[Group<'_>], linkage: Linkage) -> Result<(usize, usize, f64)> {
    let matrix = distance_matrix(state, linkage)?;

    let mut best: Option<(usize, usize, f64)> = None;
    for (i, row) in matrix.iter().enumerate() {
        let Some((j, d)) = nearest_distinct(row, i) else {
            continue;
        };
        if best.map_or(true, |(_, _, bd)| d < bd) {
            best = Some((i, j, d));
        }
    }

    best.ok_or(Error::InvalidClusterCount {
        requested: 1,
        n_items: state.len(),
    })
}

/// Full M×M linkage matrix, including the (unused) diagonal.
fn distance_matrix(state: &[Group<'_>], linkage: Linkage) -> Result<Vec<Vec<f64>>> {
    state
        .iter()
        .map(|a| {
            state
                .iter()
                .map(|b| linkage.distance(&a.points, &b.points))
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

/// Lowest-index minimum of `row`, skipping position `skip`.
fn nearest_distinct(row: &[f64], skip: usize) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &d) in row.iter().enumerate() {
        if j == skip {
            continue;
        }
        if best.map_or(true, |(_, bd)| d < bd) {
            best = Some((j, d));
        }
    }
    best
}

/// Cluster `data` down to `stop_length` clusters under `linkage`.
pub fn hac(data: &[Vec<f64>], linkage: Linkage, stop_length: usize) -> Result<Vec<Cluster>> {
    Hac::new(stop_length)
        .with_linkage(linkage)
        .fit(data)
        .map(|fit| fit.clusters)
}

impl Clustering for Hac {
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>> {
        self.fit(data).map(|fit| fit.labels())
    }

    fn n_clusters(&self) -> usize {
        self.stop_length
    }
}
