//! Silhouette coefficient for fuzzy clusterings.

use crate::point::FuzzyPoint;

/// Compute the silhouette coefficient of a clustered point set.
///
/// For every point, `a` is the mean distance to the other points of its
/// cluster and `b` the mean distance to the points of its nearest
/// neighbouring cluster, which is the cluster with the point's highest
/// membership degree besides its own. The point scores
/// `(b - a) / max(a, b)`; the coefficient is the mean over all points.
///
/// Returns 0.0 when `cluster_count` is 1. A point scores 0.0 when it is
/// unassigned, alone in its cluster, or has no populated neighbouring cluster.
pub fn silhouette_coefficient(points: &[FuzzyPoint], cluster_count: usize) -> f64 {
    if cluster_count == 1 || points.is_empty() {
        return 0.0;
    }

    let total: f64 = (0..points.len())
        .map(|i| point_silhouette(points, i))
        .sum();

    total / points.len() as f64
}

fn point_silhouette(points: &[FuzzyPoint], i: usize) -> f64 {
    let point = &points[i];
    let (Some(own), Some(neighbour)) = (point.best_fit_cluster, point.nearest_neighbour_cluster())
    else {
        return 0.0;
    };

    let mut intra_sum = 0.0;
    let mut intra_count = 0_usize;
    let mut neighbour_sum = 0.0;
    let mut neighbour_count = 0_usize;

    for (j, other) in points.iter().enumerate() {
        if j == i {
            continue;
        }

        if other.best_fit_cluster == Some(own) {
            intra_sum += point.dist(&other.coords);
            intra_count += 1;
        } else if other.best_fit_cluster == Some(neighbour) {
            neighbour_sum += point.dist(&other.coords);
            neighbour_count += 1;
        }
    }

    if intra_count == 0 || neighbour_count == 0 {
        return 0.0;
    }

    let a = intra_sum / intra_count as f64;
    let b = neighbour_sum / neighbour_count as f64;
    let max_ab = a.max(b);

    if max_ab > 0.0 {
        (b - a) / max_ab
    } else {
        0.0
    }
}
