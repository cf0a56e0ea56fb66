//! Helper functions for creating clustered test data.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::clustering::{Centroid, KMeansSuperCluster};
use crate::config::ClusteringConfig;
use crate::point::FuzzyPoint;

/// One-dimensional centroid without a label.
pub fn centroid_1d(cluster: usize, x: f64) -> Centroid {
    Centroid {
        cluster,
        coords: vec![x],
        activity: None,
        degenerate: false,
    }
}

/// One-dimensional points with memberships derived from `centroids`.
pub fn clustered_1d(values: &[f64], centroids: &[Centroid]) -> Vec<FuzzyPoint> {
    values
        .iter()
        .map(|&x| {
            let mut point = FuzzyPoint::unlabeled(vec![x]);
            point.set_membership_degrees(
                centroids
                    .iter()
                    .map(|c| (c.cluster, c.coords.as_slice())),
            );
            point
        })
        .collect()
}

/// Two labeled blobs far apart: `walking` around 0 and `sitting` around 100.
pub fn two_activities() -> Vec<FuzzyPoint> {
    let walking = [-1.0, -0.5, 0.0, 0.5, 1.0];
    let sitting = [99.0, 99.5, 100.0, 100.5, 101.0];

    walking
        .iter()
        .map(|&x| FuzzyPoint::labeled(vec![x], "walking"))
        .chain(
            sitting
                .iter()
                .map(|&x| FuzzyPoint::labeled(vec![x], "sitting")),
        )
        .collect()
}

/// Seeded two-cluster super cluster over `points`.
pub fn two_cluster(points: Vec<FuzzyPoint>) -> KMeansSuperCluster<ChaCha8Rng> {
    KMeansSuperCluster::new(
        points,
        ClusteringConfig::with_cluster_count(2),
        ChaCha8Rng::seed_from_u64(42),
    )
}
