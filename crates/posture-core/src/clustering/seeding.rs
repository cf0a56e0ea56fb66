//! K-means++ centroid seeding.

use rand::Rng;

use crate::config::constants::clustering::INITIAL_CENTROID_WEIGHT;
use crate::error::{ClusterError, ClusterResult};
use crate::point::FuzzyPoint;

use super::types::Centroid;

/// Seed `cluster_count` centroids using k-means++.
///
/// The first centroid is drawn uniformly; each next one with probability
/// proportional to the squared distance to the nearest centroid chosen so far.
///
/// # Errors
///
/// `ClusterError::SamplingExhausted` if a draw fails `max_attempts` times,
/// which happens when every remaining weight is zero.
pub(crate) fn kmeans_plus_plus_init<R: Rng + ?Sized>(
    points: &[FuzzyPoint],
    cluster_count: usize,
    max_attempts: usize,
    rng: &mut R,
) -> ClusterResult<Vec<Centroid>> {
    let mut centroids: Vec<Centroid> = Vec::with_capacity(cluster_count);
    let mut weights = vec![INITIAL_CENTROID_WEIGHT; points.len()];
    let mut min_dists = vec![f64::INFINITY; points.len()];
    let mut weight_sum: f64 = weights.iter().sum();

    for cluster in 0..cluster_count {
        let index = rand_distribution_index(&weights, weight_sum, max_attempts, rng).ok_or(
            ClusterError::SamplingExhausted {
                centroid: cluster,
                attempts: max_attempts,
            },
        )?;

        let centroid = Centroid::from_seed(cluster, &points[index]);

        for (point, min_dist) in points.iter().zip(min_dists.iter_mut()) {
            *min_dist = min_dist.min(point.dist(&centroid.coords));
        }

        // Squared distances relative to the farthest point keep weights in [0, 1].
        let farthest = min_dists.iter().copied().fold(0.0, f64::max);
        weight_sum = 0.0;
        for (weight, &min_dist) in weights.iter_mut().zip(&min_dists) {
            *weight = if farthest > 0.0 {
                (min_dist / farthest).powi(2)
            } else {
                0.0
            };
            weight_sum += *weight;
        }

        centroids.push(centroid);
    }

    Ok(centroids)
}

/// Draw an index with probability proportional to its weight.
///
/// Scales a uniform draw by `weight_sum` and scans the cumulative weights.
/// Returns `None` after `max_attempts` unsuccessful draws.
pub(crate) fn rand_distribution_index<R: Rng + ?Sized>(
    weights: &[f64],
    weight_sum: f64,
    max_attempts: usize,
    rng: &mut R,
) -> Option<usize> {
    for _ in 0..max_attempts {
        let threshold = rng.gen::<f64>() * weight_sum;
        let mut cumulative = 0.0;

        for (i, weight) in weights.iter().enumerate() {
            cumulative += weight;
            if cumulative > threshold {
                return Some(i);
            }
        }
    }

    None
}
