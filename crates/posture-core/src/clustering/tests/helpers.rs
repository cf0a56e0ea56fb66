//! Helper functions for creating test data.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::clustering::KMeansSuperCluster;
use crate::config::ClusteringConfig;
use crate::point::FuzzyPoint;

/// Deterministic random source.
pub fn seeded_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// One-dimensional unlabeled points.
pub fn points_1d(values: &[f64]) -> Vec<FuzzyPoint> {
    values
        .iter()
        .map(|&x| FuzzyPoint::unlabeled(vec![x]))
        .collect()
}

/// Three well separated labeled blobs in two dimensions.
///
/// `walking` sits around (0, 0), `sitting` around (10, 10) and
/// `standing` around (20, 0).
pub fn activity_blobs() -> Vec<FuzzyPoint> {
    let offsets = [(0.0, 0.0), (0.5, 0.2), (-0.3, 0.4), (0.2, -0.5), (-0.4, -0.1)];
    let centers = [("walking", 0.0, 0.0), ("sitting", 10.0, 10.0), ("standing", 20.0, 0.0)];

    let mut points = Vec::new();
    for (activity, cx, cy) in centers {
        for (dx, dy) in offsets {
            points.push(FuzzyPoint::labeled(vec![cx + dx, cy + dy], activity));
        }
    }
    points
}

/// Super cluster over `points` with a seeded random source.
pub fn super_cluster(points: Vec<FuzzyPoint>, k: usize) -> KMeansSuperCluster<ChaCha8Rng> {
    KMeansSuperCluster::new(points, ClusteringConfig::with_cluster_count(k), seeded_rng())
}
