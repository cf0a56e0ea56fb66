//! Type definitions for fuzzy clustering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::point::FuzzyPoint;

/// Representative coordinates of a cluster.
///
/// Seeded from a training point and then moved to the mean of its members on
/// every Lloyd pass. The centroid keeps the activity label of the point it was
/// seeded from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    /// Cluster index, equal to the centroid's position in its attempt.
    pub cluster: usize,

    /// Mean of the member coordinates.
    pub coords: Vec<f64>,

    /// Activity label of the originating seed point.
    pub activity: Option<String>,

    /// Set when the last recompute found no members; coordinates were left unmoved.
    pub degenerate: bool,
}

impl Centroid {
    /// Seed a centroid from a training point.
    pub fn from_seed(cluster: usize, seed: &FuzzyPoint) -> Self {
        Self {
            cluster,
            coords: seed.coords.clone(),
            activity: seed.activity.clone(),
            degenerate: false,
        }
    }
}

/// A cluster with its centroid and member point indices.
#[derive(Clone, Debug, PartialEq)]
pub struct Cluster {
    /// The cluster centroid.
    pub centroid: Centroid,

    /// Indices of the points whose best fit is this cluster.
    pub members: Vec<usize>,
}

impl Cluster {
    /// Cluster index.
    #[inline]
    pub fn index(&self) -> usize {
        self.centroid.cluster
    }

    /// Check if the cluster is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of member points.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Count of members per ground-truth activity. Unlabeled members are skipped.
    pub fn activity_distribution(&self, points: &[FuzzyPoint]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for activity in self
            .members
            .iter()
            .filter_map(|&i| points.get(i).and_then(|p| p.activity.as_ref()))
        {
            *counts.entry(activity.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Most common activity among the members.
    ///
    /// Ties go to the label that sorts first. `None` if no member is labeled.
    pub fn dominant_activity(&self, points: &[FuzzyPoint]) -> Option<String> {
        let mut best: Option<(String, usize)> = None;
        for (activity, count) in self.activity_distribution(points) {
            if best.as_ref().map_or(true, |(_, c)| count > *c) {
                best = Some((activity, count));
            }
        }
        best.map(|(activity, _)| activity)
    }
}
