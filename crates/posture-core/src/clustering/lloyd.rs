//! Lloyd's iteration: assign points, then move centroids.

use rand::Rng;
use tracing::{debug, warn};

use crate::config::ClusteringConfig;
use crate::error::ClusterResult;
use crate::point::FuzzyPoint;

use super::seeding::kmeans_plus_plus_init;
use super::types::Centroid;

/// Run one complete clustering attempt on `points`.
///
/// Seeds centroids with k-means++ and iterates until no point changes its
/// cluster or `max_iterations` passes were made.
pub(crate) fn clusterize<R: Rng + ?Sized>(
    points: &mut [FuzzyPoint],
    dim_count: usize,
    config: &ClusteringConfig,
    rng: &mut R,
) -> ClusterResult<Vec<Centroid>> {
    let mut centroids = kmeans_plus_plus_init(
        points,
        config.cluster_count,
        config.max_sampling_attempts,
        rng,
    )?;

    let mut iterations = 0;
    loop {
        iterations += 1;

        let made_adjustments = assign_points(points, &centroids);
        recompute_centroids(points, &mut centroids, dim_count);

        if !made_adjustments {
            debug!(iterations, "Lloyd iteration converged");
            break;
        }
        if iterations >= config.max_iterations {
            warn!(
                iterations,
                "Lloyd iteration did not converge, keeping current assignment"
            );
            break;
        }
    }

    Ok(centroids)
}

/// Assign every point to its nearest centroid.
///
/// Returns `true` if any point changed cluster.
pub(crate) fn assign_points(points: &mut [FuzzyPoint], centroids: &[Centroid]) -> bool {
    let mut made_adjustments = false;

    for point in points.iter_mut() {
        let best_fit = best_fit_cluster(point, centroids);

        if best_fit != point.best_fit_cluster {
            point.best_fit_cluster = best_fit;
            made_adjustments = true;
        }
    }

    made_adjustments
}

/// Nearest centroid by Euclidean distance.
///
/// On a tie with the point's current cluster, the current cluster is kept so
/// points do not oscillate between equidistant centroids.
pub(crate) fn best_fit_cluster(point: &FuzzyPoint, centroids: &[Centroid]) -> Option<usize> {
    let mut best_fit = None;
    let mut min_dist = f64::INFINITY;

    for centroid in centroids {
        let dist = point.dist(&centroid.coords);
        if dist < min_dist {
            min_dist = dist;
            best_fit = Some(centroid.cluster);
        }
    }

    let prior = point
        .best_fit_cluster
        .and_then(|cluster| centroids.get(cluster));
    match prior {
        Some(centroid) if point.dist(&centroid.coords) == min_dist => Some(centroid.cluster),
        _ => best_fit,
    }
}

/// Move every centroid with members to the mean of its members.
///
/// A centroid without members keeps its coordinates and is flagged degenerate.
pub(crate) fn recompute_centroids(
    points: &[FuzzyPoint],
    centroids: &mut [Centroid],
    dim_count: usize,
) {
    let mut sums = vec![vec![0.0_f64; dim_count]; centroids.len()];
    let mut counts = vec![0_usize; centroids.len()];

    for point in points {
        let Some(cluster) = point.best_fit_cluster else {
            continue;
        };
        counts[cluster] += 1;
        for (sum, coord) in sums[cluster].iter_mut().zip(&point.coords) {
            *sum += coord;
        }
    }

    for ((centroid, sum), count) in centroids.iter_mut().zip(sums).zip(counts) {
        if count == 0 {
            if !centroid.degenerate {
                debug!(cluster = centroid.cluster, "Centroid lost all members");
            }
            centroid.degenerate = true;
            continue;
        }

        centroid.coords = sum.into_iter().map(|s| s / count as f64).collect();
        centroid.degenerate = false;
    }
}

/// Sum over all points of the distance to their assigned centroid.
pub(crate) fn overall_cluster_dist(points: &[FuzzyPoint], centroids: &[Centroid]) -> f64 {
    points
        .iter()
        .filter_map(|point| {
            point
                .best_fit_cluster
                .and_then(|cluster| centroids.get(cluster))
                .map(|centroid| point.dist(&centroid.coords))
        })
        .sum()
}
