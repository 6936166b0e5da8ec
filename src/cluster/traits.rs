use crate::error::Result;

/// Shared interface of the engines that partition a dataset.
///
/// Both [`super::Hac`] and [`super::Kmeans`] implement it, so a caller can
/// compare their partitions of the same data through one label vector.
pub trait Clustering {
    /// Label every row of `data` with the index of its cluster.
    fn fit_predict(&self, data: &[Vec<f64>]) -> Result<Vec<usize>>;

    /// Requested cluster count (`stop_length` for HAC, `k` for k-means).
    fn n_clusters(&self) -> usize;
}
