//! Multi-restart fuzzy K-Means++ super cluster.
//!
//! Provides the [`FuzzySuperCluster`] seam and its k-means++ implementation.

use rand::Rng;
use tracing::{debug, info};

use crate::config::ClusteringConfig;
use crate::error::{ClusterError, ClusterResult};
use crate::point::FuzzyPoint;

use super::lloyd::{clusterize, overall_cluster_dist};
use super::silhouette::silhouette_coefficient;
use super::types::{Centroid, Cluster};

/// A set of fuzzy clusters over an owned point set.
///
/// Implementors cluster their points in place and expose the resulting
/// centroids and membership degrees.
pub trait FuzzySuperCluster {
    /// Run `restart_count` clustering attempts and keep the best one seen so far.
    ///
    /// # Errors
    ///
    /// - `ClusterError::EmptyPointSet` / `DimensionMismatch` /
    ///   `ZeroDimensional` / `InvalidClusterCount` / `InvalidRestartCount`
    ///   for malformed input (structural, never retried)
    /// - `ClusterError::AttemptFailed` if any attempt fails; the whole run
    ///   is aborted and the canonical points keep their previous state
    fn adjust(&mut self, restart_count: usize) -> ClusterResult<()>;

    /// The canonical points, clustered after a successful `adjust`.
    fn points(&self) -> &[FuzzyPoint];

    /// Centroids of the best attempt, ordered by cluster index.
    fn centroids(&self) -> &[Centroid];

    /// Cluster views of the best attempt.
    fn clusters(&self) -> Vec<Cluster> {
        self.centroids()
            .iter()
            .map(|centroid| Cluster {
                centroid: centroid.clone(),
                members: self
                    .points()
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.best_fit_cluster == Some(centroid.cluster))
                    .map(|(i, _)| i)
                    .collect(),
            })
            .collect()
    }

    /// Silhouette coefficient of the current clustering.
    fn silhouette_coefficient(&self) -> f64;
}

/// K-means++ super cluster with fuzzy membership degrees.
///
/// Owns the canonical points and the random source. Every attempt works on
/// a clone of the points; only an attempt with a strictly lower total
/// cluster distance than the best seen so far replaces the canonical state.
///
/// # Example
///
/// ```
/// use posture_core::clustering::{FuzzySuperCluster, KMeansSuperCluster};
/// use posture_core::config::ClusteringConfig;
/// use posture_core::point::FuzzyPoint;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let points = [2.0, 2.0, 5.0, 4.0, 2.0]
///     .iter()
///     .map(|&x| FuzzyPoint::unlabeled(vec![x]))
///     .collect();
///
/// let mut super_cluster = KMeansSuperCluster::new(
///     points,
///     ClusteringConfig::with_cluster_count(2),
///     ChaCha8Rng::seed_from_u64(42),
/// );
/// super_cluster.adjust(10).unwrap();
///
/// assert_eq!(super_cluster.centroids().len(), 2);
/// ```
#[derive(Debug)]
pub struct KMeansSuperCluster<R> {
    points: Vec<FuzzyPoint>,
    config: ClusteringConfig,
    rng: R,
    centroids: Vec<Centroid>,
    min_cluster_dist: f64,
}

impl<R: Rng> KMeansSuperCluster<R> {
    /// Create a super cluster over `points`. Nothing is clustered until `adjust`.
    pub fn new(points: Vec<FuzzyPoint>, config: ClusteringConfig, rng: R) -> Self {
        Self {
            points,
            config,
            rng,
            centroids: Vec::new(),
            min_cluster_dist: f64::INFINITY,
        }
    }

    /// Configured number of clusters.
    #[inline]
    pub fn cluster_count(&self) -> usize {
        self.config.cluster_count
    }

    /// Lowest total cluster distance committed so far, `None` before `adjust`.
    pub fn min_cluster_dist(&self) -> Option<f64> {
        self.is_adjusted().then_some(self.min_cluster_dist)
    }

    /// Whether at least one attempt has been committed.
    #[inline]
    pub fn is_adjusted(&self) -> bool {
        !self.centroids.is_empty()
    }

    /// Consume the super cluster, returning the canonical points.
    pub fn into_points(self) -> Vec<FuzzyPoint> {
        self.points
    }

    /// Check the point set and return its dimensionality.
    fn dim_count(&self) -> ClusterResult<usize> {
        let first = self.points.first().ok_or(ClusterError::EmptyPointSet)?;
        let expected = first.dim_count();
        if expected == 0 {
            return Err(ClusterError::ZeroDimensional);
        }

        for (index, point) in self.points.iter().enumerate() {
            if point.dim_count() != expected {
                return Err(ClusterError::DimensionMismatch {
                    index,
                    expected,
                    actual: point.dim_count(),
                });
            }
            if let Some(dimension) = point.coords.iter().position(|c| !c.is_finite()) {
                return Err(ClusterError::NonFiniteCoordinate { index, dimension });
            }
        }

        let cluster_count = self.config.cluster_count;
        if cluster_count == 0 || cluster_count > self.points.len() {
            return Err(ClusterError::InvalidClusterCount {
                requested: cluster_count,
                available: self.points.len(),
            });
        }

        Ok(expected)
    }

    /// Working copy of the canonical points with assignments cleared.
    fn clone_points(&self) -> Vec<FuzzyPoint> {
        self.points
            .iter()
            .map(|point| {
                let mut clone = point.clone();
                clone.reset_assignment();
                clone
            })
            .collect()
    }

    /// Replace the canonical state with a winning attempt.
    fn commit(&mut self, points: Vec<FuzzyPoint>, centroids: Vec<Centroid>) {
        self.points = points;
        for point in &mut self.points {
            point.set_membership_degrees(
                centroids
                    .iter()
                    .map(|centroid| (centroid.cluster, centroid.coords.as_slice())),
            );
        }
        self.centroids = centroids;
    }
}

impl<R: Rng> FuzzySuperCluster for KMeansSuperCluster<R> {
    fn adjust(&mut self, restart_count: usize) -> ClusterResult<()> {
        if restart_count == 0 {
            return Err(ClusterError::InvalidRestartCount);
        }
        let dim_count = self.dim_count()?;

        info!(
            points = self.points.len(),
            dims = dim_count,
            k = self.config.cluster_count,
            restarts = restart_count,
            "Adjusting k-means super cluster"
        );

        for attempt in 0..restart_count {
            let mut trial = self.clone_points();

            let centroids = clusterize(&mut trial, dim_count, &self.config, &mut self.rng)
                .map_err(|e| ClusterError::AttemptFailed {
                    attempt,
                    source: Box::new(e),
                })?;

            let dist = overall_cluster_dist(&trial, &centroids);
            debug!(attempt, dist, "Clustering attempt finished");

            if dist < self.min_cluster_dist {
                debug!(
                    attempt,
                    dist,
                    previous = self.min_cluster_dist,
                    "Encountered a better cluster"
                );
                self.min_cluster_dist = dist;
                self.commit(trial, centroids);
            }
        }

        info!(
            min_cluster_dist = self.min_cluster_dist,
            "Super cluster adjusted"
        );

        Ok(())
    }

    fn points(&self) -> &[FuzzyPoint] {
        &self.points
    }

    fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    fn silhouette_coefficient(&self) -> f64 {
        silhouette_coefficient(&self.points, self.config.cluster_count)
    }
}
