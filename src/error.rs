use thiserror::Error;

/// Result alias for `huddle`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering and classification engines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input was empty.
    #[error("empty input provided")]
    EmptyInput,

    /// Points in a dataset (or a query) have inconsistent dimensionality.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// A point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFinite {
        /// Row index of the offending point.
        index: usize,
    },

    /// Shape mismatch between related inputs (string description).
    #[error("shape mismatch: expected {expected}, actual {actual}")]
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    /// Invalid number of clusters requested.
    #[error("cannot create {requested} clusters from {n_items} items")]
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// More neighbors requested than there are training points.
    #[error("cannot vote over {k} neighbors with {n_train} training points")]
    InvalidNeighborCount {
        /// Requested neighbor count.
        k: usize,
        /// Training set size.
        n_train: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Distance metric name other than `L1` or `L2`.
    #[error("unknown distance metric '{0}' (expected L1 or L2)")]
    UnknownMetric(String),

    /// Linkage criterion name that is not one of the four supported ones.
    #[error("unknown linkage criterion '{0}'")]
    UnknownLinkage(String),

    /// A linkage criterion was handed a cluster with no points.
    #[error("linkage evaluated on an empty cluster")]
    EmptyCluster,
}
