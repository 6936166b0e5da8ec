//! Cross-check merge heights against kodama's agglomerative clustering.
//!
//! For single, complete and average linkage the dendrogram of data in
//! general position is unique, so the sorted merge distances must agree
//! even though kodama finds the merges in a different order.

use huddle::cluster::{Hac, Linkage};
use huddle::distance::euclidean;
use kodama::{linkage as kodama_linkage, Method};
use rand::prelude::*;

fn random_points(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| vec![rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)])
        .collect()
}

fn kodama_heights(data: &[Vec<f64>], method: Method) -> Vec<f64> {
    let n = data.len();
    let mut condensed = Vec::with_capacity(n * (n - 1) / 2);
    for row in 0..n - 1 {
        for col in row + 1..n {
            condensed.push(euclidean(&data[row], &data[col]));
        }
    }
    let dend = kodama_linkage(&mut condensed, n, method);
    let mut heights: Vec<f64> = dend.steps().iter().map(|s| s.dissimilarity).collect();
    heights.sort_by(f64::total_cmp);
    heights
}

fn hac_heights(data: &[Vec<f64>], linkage: Linkage) -> Vec<f64> {
    let fit = Hac::new(1).with_linkage(linkage).fit(data).unwrap();
    let mut heights: Vec<f64> = fit.merges.iter().map(|m| m.distance).collect();
    heights.sort_by(f64::total_cmp);
    heights
}

fn assert_heights_match(linkage: Linkage, method: Method) {
    for seed in [1u64, 17, 2024] {
        let data = random_points(24, seed);
        let ours = hac_heights(&data, linkage);
        let theirs = kodama_heights(&data, method);

        assert_eq!(ours.len(), theirs.len());
        for (a, b) in ours.iter().zip(&theirs) {
            assert!(
                (a - b).abs() <= 1e-9 * (1.0 + b.abs()),
                "{linkage} seed {seed}: {a} vs {b}"
            );
        }
    }
}

#[test]
fn test_single_matches_kodama() {
    assert_heights_match(Linkage::Single, Method::Single);
}

#[test]
fn test_complete_matches_kodama() {
    assert_heights_match(Linkage::Complete, Method::Complete);
}

#[test]
fn test_average_matches_kodama() {
    assert_heights_match(Linkage::Average, Method::Average);
}
