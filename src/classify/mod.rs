//! Supervised classification.
//!
//! ## k-Nearest Neighbors
//!
//! No training step: the labelled points *are* the model. A query takes the
//! majority label of its `k` nearest training points, measured with L1
//! (Manhattan) or L2 (Euclidean) distance.
//!
//! | k | Effect |
//! |---|--------|
//! | small | Follows local structure; sensitive to label noise |
//! | large | Smoother decisions; minority classes get outvoted |
//!
//! Picking `k` (and the metric) is done by cross-validation: hold out each
//! contiguous fold in turn and average the held-out accuracy.
//!
//! ## Usage
//!
//! ```rust
//! use huddle::classify::Knn;
//! use huddle::Metric;
//!
//! let train = vec![vec![0.0], vec![1.0], vec![10.0], vec![11.0]];
//! let labels = [0, 0, 1, 1];
//!
//! let knn = Knn::new(1).with_metric("L2".parse::<Metric>().unwrap());
//! assert_eq!(knn.predict(&train, &labels, &[0.5]).unwrap(), 0);
//!
//! let score = knn.cross_validate(&train, &labels, 2).unwrap();
//! assert!((0.0..=1.0).contains(&score));
//! ```

pub mod knn;
pub mod validation;

pub use knn::{distances, majority_vote, Knn};
pub use validation::{cross_validate, split, Split};
