//! Linkage criteria: how far apart are two clusters?
//!
//! | Linkage | Formula | Cost |
//! |---------|---------|------|
//! | Single | min(d(a,b)) for a∈A, b∈B | O(N·M) |
//! | Complete | max(d(a,b)) | O(N·M) |
//! | Average | mean(d(a,b)) | O(N·M) |
//! | Centroid | d(μₐ, μᵦ) | O(N+M) |
//!
//! `d` is the Euclidean distance. For two singletons every criterion
//! reduces to the distance between the two points.

use crate::distance::euclidean;
use crate::error::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Linkage criterion for hierarchical clustering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Linkage {
    /// Minimum pairwise distance.
    Single,
    /// Maximum pairwise distance.
    Complete,
    /// Mean pairwise distance.
    #[default]
    Average,
    /// Distance between the cluster means.
    Centroid,
}

impl Linkage {
    /// Every supported criterion.
    pub const ALL: [Linkage; 4] = [
        Linkage::Single,
        Linkage::Complete,
        Linkage::Average,
        Linkage::Centroid,
    ];

    /// Cluster-to-cluster distance under this criterion.
    ///
    /// Fails with [`Error::EmptyCluster`] if either side has no points.
    pub fn distance<P: AsRef<[f64]>>(self, a: &[P], b: &[P]) -> Result<f64> {
        match self {
            Linkage::Single => single(a, b),
            Linkage::Complete => complete(a, b),
            Linkage::Average => average(a, b),
            Linkage::Centroid => centroid(a, b),
        }
    }
}

impl FromStr for Linkage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Linkage::Single),
            "complete" => Ok(Linkage::Complete),
            "average" => Ok(Linkage::Average),
            "centroid" => Ok(Linkage::Centroid),
            _ => Err(Error::UnknownLinkage(s.to_string())),
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Linkage::Single => "single",
            Linkage::Complete => "complete",
            Linkage::Average => "average",
            Linkage::Centroid => "centroid",
        };
        f.write_str(name)
    }
}

#[inline]
fn non_empty<P>(a: &[P], b: &[P]) -> Result<()> {
    if a.is_empty() || b.is_empty() {
        return Err(Error::EmptyCluster);
    }
    Ok(())
}

/// All N·M cross-cluster point distances, row-major over `a`.
fn pairwise<'a, P: AsRef<[f64]>>(a: &'a [P], b: &'a [P]) -> impl Iterator<Item = f64> + 'a {
    a.iter()
        .flat_map(move |x| b.iter().map(move |y| euclidean(x.as_ref(), y.as_ref())))
}

/// Single linkage: minimum pairwise distance.
pub fn single<P: AsRef<[f64]>>(a: &[P], b: &[P]) -> Result<f64> {
    non_empty(a, b)?;
    Ok(pairwise(a, b).fold(f64::INFINITY, f64::min))
}

/// Complete linkage: maximum pairwise distance.
pub fn complete<P: AsRef<[f64]>>(a: &[P], b: &[P]) -> Result<f64> {
    non_empty(a, b)?;
    Ok(pairwise(a, b).fold(0.0, f64::max))
}

/// Average linkage: mean of all pairwise distances.
pub fn average<P: AsRef<[f64]>>(a: &[P], b: &[P]) -> Result<f64> {
    non_empty(a, b)?;
    let total: f64 = pairwise(a, b).sum();
    Ok(total / (a.len() * b.len()) as f64)
}

/// Centroid linkage: distance between the two cluster means.
pub fn centroid<P: AsRef<[f64]>>(a: &[P], b: &[P]) -> Result<f64> {
    non_empty(a, b)?;
    Ok(euclidean(&centroid_of(a)?, &centroid_of(b)?))
}

/// Coordinate-wise mean of a non-empty point set.
pub fn centroid_of<P: AsRef<[f64]>>(points: &[P]) -> Result<Vec<f64>> {
    let first = points.first().ok_or(Error::EmptyCluster)?;
    let mut mean = vec![0.0; first.as_ref().len()];
    for p in points {
        for (m, x) in mean.iter_mut().zip(p.as_ref()) {
            *m += x;
        }
    }
    let n = points.len() as f64;
    for m in &mut mean {
        *m /= n;
    }
    Ok(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_singletons_reduce_to_point_distance() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![4.0, 6.0]];
        for linkage in Linkage::ALL {
            let d = linkage.distance(&a, &b).unwrap();
            assert!(close(d, 5.0), "{linkage}: {d}");
        }
    }

    #[test]
    fn test_linkage_values() {
        // A = {0, 1}, B = {3, 7} on a line.
        // Pairwise: 3, 7, 2, 6.
        let a = vec![vec![0.0], vec![1.0]];
        let b = vec![vec![3.0], vec![7.0]];

        assert!(close(single(&a, &b).unwrap(), 2.0));
        assert!(close(complete(&a, &b).unwrap(), 7.0));
        assert!(close(average(&a, &b).unwrap(), 4.5));
        // Means 0.5 and 5.0.
        assert!(close(centroid(&a, &b).unwrap(), 4.5));
    }

    #[test]
    fn test_single_le_average_le_complete() {
        let a = vec![vec![0.0, 0.0], vec![1.0, 3.0], vec![-2.0, 1.0]];
        let b = vec![vec![5.0, 5.0], vec![8.0, -1.0]];
        let s = single(&a, &b).unwrap();
        let avg = average(&a, &b).unwrap();
        let c = complete(&a, &b).unwrap();
        assert!(s <= avg && avg <= c);
    }

    #[test]
    fn test_symmetry() {
        let a = vec![vec![0.0, 0.0], vec![1.0, 3.0]];
        let b = vec![vec![5.0, 5.0], vec![8.0, -1.0], vec![2.0, 2.0]];
        for linkage in Linkage::ALL {
            let ab = linkage.distance(&a, &b).unwrap();
            let ba = linkage.distance(&b, &a).unwrap();
            assert!(close(ab, ba), "{linkage} not symmetric");
        }
    }

    #[test]
    fn test_empty_cluster_errors() {
        let a: Vec<Vec<f64>> = vec![];
        let b = vec![vec![1.0]];
        for linkage in Linkage::ALL {
            assert_eq!(linkage.distance(&a, &b), Err(Error::EmptyCluster));
            assert_eq!(linkage.distance(&b, &a), Err(Error::EmptyCluster));
        }
        assert_eq!(centroid_of(&a), Err(Error::EmptyCluster));
    }

    #[test]
    fn test_borrowed_points() {
        let owned = [vec![0.0, 0.0], vec![2.0, 0.0]];
        let a: Vec<&[f64]> = vec![&owned[0]];
        let b: Vec<&[f64]> = vec![&owned[1]];
        assert!(close(Linkage::Single.distance(&a, &b).unwrap(), 2.0));
    }

    #[test]
    fn test_centroid_of() {
        let pts = vec![vec![0.0, 0.0], vec![2.0, 4.0], vec![4.0, 2.0]];
        assert_eq!(centroid_of(&pts).unwrap(), vec![2.0, 2.0]);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("single".parse::<Linkage>().unwrap(), Linkage::Single);
        assert_eq!("Complete".parse::<Linkage>().unwrap(), Linkage::Complete);
        assert_eq!("AVERAGE".parse::<Linkage>().unwrap(), Linkage::Average);
        assert_eq!("centroid".parse::<Linkage>().unwrap(), Linkage::Centroid);
        assert!(matches!(
            "ward".parse::<Linkage>(),
            Err(Error::UnknownLinkage(_))
        ));
        for linkage in Linkage::ALL {
            assert_eq!(linkage.to_string().parse::<Linkage>().unwrap(), linkage);
        }
    }
}
