//! Fuzzy point model.
//!
//! A [`FuzzyPoint`] is a feature vector with an optional ground-truth activity
//! label. The clustering engine records the point's best-fit cluster and its
//! membership degree for every cluster.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// A labeled feature vector taking part in fuzzy clustering.
///
/// # Invariants
///
/// After a successful `adjust`, the membership degrees of every point sum to 1
/// across all clusters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuzzyPoint {
    /// Coordinates, one per feature dimension.
    pub coords: Vec<f64>,

    /// Ground-truth activity label, if known.
    pub activity: Option<String>,

    /// Index of the nearest cluster. `None` until assigned.
    pub best_fit_cluster: Option<usize>,

    membership_degrees: BTreeMap<usize, f64>,
}

impl FuzzyPoint {
    /// Create an unassigned point.
    pub fn new(coords: Vec<f64>, activity: Option<String>) -> Self {
        Self {
            coords,
            activity,
            best_fit_cluster: None,
            membership_degrees: BTreeMap::new(),
        }
    }

    /// Create an unassigned point carrying an activity label.
    pub fn labeled(coords: Vec<f64>, activity: impl Into<String>) -> Self {
        Self::new(coords, Some(activity.into()))
    }

    /// Create an unassigned point without a label.
    pub fn unlabeled(coords: Vec<f64>) -> Self {
        Self::new(coords, None)
    }

    /// Number of coordinates.
    #[inline]
    pub fn dim_count(&self) -> usize {
        self.coords.len()
    }

    /// Whether the point has been assigned to a cluster.
    #[inline]
    pub fn has_best_fit_cluster(&self) -> bool {
        self.best_fit_cluster.is_some()
    }

    /// Euclidean distance to another coordinate vector.
    #[inline]
    pub fn dist(&self, other: &[f64]) -> f64 {
        euclidean_distance(&self.coords, other)
    }

    /// Membership degree for a cluster, 0.0 when unknown.
    pub fn membership_degree(&self, cluster: usize) -> f64 {
        self.membership_degrees.get(&cluster).copied().unwrap_or(0.0)
    }

    /// All membership degrees keyed by cluster index.
    pub fn membership_degrees(&self) -> &BTreeMap<usize, f64> {
        &self.membership_degrees
    }

    /// Recompute the fuzzy membership degrees against a set of centroids.
    ///
    /// Raw weight is `1 / d²` (or 1 when the point coincides with the
    /// centroid); weights are normalized to sum to 1. All weights are scaled
    /// by the squared distance to the nearest non-coincident centroid first,
    /// so neither huge nor tiny distances overflow.
    pub(crate) fn set_membership_degrees<'a, I>(&mut self, centroids: I)
    where
        I: IntoIterator<Item = (usize, &'a [f64])>,
    {
        self.membership_degrees.clear();

        let dists: Vec<(usize, f64)> = centroids
            .into_iter()
            .map(|(cluster, coords)| (cluster, self.dist(coords)))
            .collect();

        let nearest = dists
            .iter()
            .map(|&(_, d)| d)
            .filter(|&d| d > 0.0)
            .fold(f64::INFINITY, f64::min);
        // Weight of a coincident centroid relative to the nearest one.
        let coincident = nearest * nearest;

        let mut total = 0.0;
        for (cluster, dist) in dists {
            let weight = match (dist == 0.0, coincident.is_finite()) {
                (true, true) => coincident,
                (true, false) => 1.0,
                (false, true) => (nearest / dist).powi(2),
                (false, false) => 0.0,
            };
            self.membership_degrees.insert(cluster, weight);
            total += weight;
        }

        if total > 0.0 {
            for degree in self.membership_degrees.values_mut() {
                *degree /= total;
            }
        }
    }

    /// Cluster with the highest membership degree other than the best fit.
    ///
    /// This is the point's nearest neighbouring cluster for the silhouette
    /// computation. `None` when no other cluster has a positive degree.
    pub fn nearest_neighbour_cluster(&self) -> Option<usize> {
        let mut nearest = None;
        let mut max_degree = 0.0;

        for (&cluster, &degree) in &self.membership_degrees {
            if Some(cluster) == self.best_fit_cluster {
                continue;
            }
            if max_degree < degree {
                nearest = Some(cluster);
                max_degree = degree;
            }
        }

        nearest
    }

    /// Forget the cluster assignment and membership degrees.
    pub(crate) fn reset_assignment(&mut self) {
        self.best_fit_cluster = None;
        self.membership_degrees.clear();
    }
}

/// Euclidean distance between two coordinate vectors of equal length.
///
/// Differences are scaled by the largest one before squaring, so the result
/// stays finite whenever the coordinate differences are.
#[inline]
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    let scale = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 || !scale.is_finite() {
        return scale;
    }

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| ((x - y) / scale).powi(2))
        .sum::<f64>()
        .sqrt()
        * scale
}
