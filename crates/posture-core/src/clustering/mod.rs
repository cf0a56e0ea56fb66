//! Fuzzy K-Means++ clustering of labeled points.
//!
//! # Overview
//!
//! The super cluster discovers activity prototypes without supervision and
//! assigns every point a fuzzy membership degree for every cluster.
//!
//! # Algorithm
//!
//! For each of `restart_count` attempts, on a fresh clone of the points:
//!
//! 1. Seed k centroids using k-means++ (weighted by squared distance)
//! 2. Assign each point to its nearest centroid (Euclidean distance)
//! 3. Recompute centroids as the mean of their members
//! 4. Repeat until a full pass reassigns no point
//!
//! The attempt with the lowest total cluster distance wins and is committed
//! to the canonical points, whose membership degrees are then recomputed.
//!
//! # Fail-Fast Validation
//!
//! - points must not be empty and must share one dimensionality
//! - coordinates must be finite
//! - cluster_count must be > 0 and <= points.len()
//! - a sampling failure in any attempt aborts the whole run

mod lloyd;
mod seeding;
mod silhouette;
mod super_cluster;
#[cfg(test)]
mod tests;
mod types;

pub use silhouette::silhouette_coefficient;
pub use super_cluster::{FuzzySuperCluster, KMeansSuperCluster};
pub use types::{Centroid, Cluster};
