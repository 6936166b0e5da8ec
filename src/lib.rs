//! # huddle
//!
//! Classical clustering and classification over small in-memory datasets:
//!
//! - [`cluster::Hac`]: hierarchical agglomerative clustering with single,
//!   complete, average or centroid linkage, merged down to a target count
//! - [`cluster::Kmeans`]: Lloyd's algorithm with seeded initialization
//! - [`classify::Knn`]: k-nearest-neighbors voting with L1/L2 distance and
//!   contiguous k-fold cross-validation
//!
//! Points are `Vec<f64>` rows; datasets are `&[Vec<f64>]`. Every entry
//! point validates its input and returns [`Result`].
//!
//! Everything runs single-threaded by default. The `parallel` feature
//! spreads the k-means assignment step and cross-validation folds over
//! rayon without changing any result.

#![forbid(unsafe_code)]

pub mod classify;
pub mod cluster;
pub mod dataset;
pub mod distance;
/// Error types used across `huddle`.
pub mod error;
pub mod metrics;

pub use classify::Knn;
pub use cluster::{hac, Cluster, Clustering, Hac, HacFit, Kmeans, KmeansFit, Linkage, Merge};
pub use distance::Metric;
pub use error::{Error, Result};
pub use metrics::accuracy;
