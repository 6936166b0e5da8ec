//! Clustering algorithms for grouping similar points.
//!
//! ## Algorithms
//!
//! ### Hierarchical (Agglomerative) Clustering
//!
//! Bottom-up: start with each point as its own cluster, repeatedly merge
//! the two closest clusters until `stop_length` remain. The result is a
//! ragged list of clusters (each owning its points) plus the merge history.
//!
//! **Linkage criteria** determine "distance between clusters":
//!
//! | Linkage | Distance | Effect |
//! |---------|----------|--------|
//! | Single | min(pairwise) | Chaining; elongated clusters |
//! | Complete | max(pairwise) | Compact, spherical clusters |
//! | Average | mean(pairwise) | Balanced compromise |
//! | Centroid | distance of means | Cheap; merge heights may shrink |
//!
//! **When to use**: small datasets where you want a deterministic grouping
//! with a specific notion of cluster distance. Every step recomputes the
//! full cluster-distance matrix, so cost grows cubically with n.
//!
//! ### K-means
//!
//! The classic algorithm: assign each point to the nearest center, then
//! move centers to the mean of their points. Repeat until the objective
//! stops changing.
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ## Usage
//!
//! ```rust
//! use huddle::cluster::{hac, Kmeans, Linkage};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 10.0],
//!     vec![10.0, 11.0],
//! ];
//!
//! // Two clusters by single linkage
//! let clusters = hac(&data, Linkage::Single, 2).unwrap();
//! assert_eq!(clusters.len(), 2);
//! assert_eq!(clusters[0].points(), &[vec![0.0, 0.0], vec![0.0, 1.0]]);
//!
//! // Seeded k-means
//! let fit = Kmeans::new(2).with_seed(7).fit(&data).unwrap();
//! assert_eq!(fit.centers.nrows(), 2);
//! assert_eq!(fit.labels.len(), data.len());
//! ```

mod hierarchical;
mod kmeans;
pub mod linkage;
mod traits;

pub use hierarchical::{hac, Cluster, Hac, HacFit, Merge};
pub use kmeans::{assign, objective, update_centers, Kmeans, KmeansFit};
pub use linkage::Linkage;
pub use traits::Clustering;
