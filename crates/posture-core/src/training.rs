//! End-to-end training: cluster labeled points and derive a rule set.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::clustering::{Centroid, FuzzySuperCluster, KMeansSuperCluster};
use crate::config::TrainingConfig;
use crate::error::{ClusterError, Result};
use crate::fuzzy::{FuzzyNumberKind, FuzzyRuleSet, RuleSetBuilder};
use crate::inference::MamdaniInferer;
use crate::point::FuzzyPoint;

/// Result of a training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedModel {
    /// One rule per activity.
    pub rule_set: FuzzyRuleSet,

    /// Fuzzy number family the rules are built from.
    pub kind: FuzzyNumberKind,

    /// Centroids of the winning clustering attempt.
    pub centroids: Vec<Centroid>,

    /// Silhouette coefficient of the winning clustering.
    pub silhouette: f64,

    /// Total distance of the points to their centroids.
    pub min_cluster_dist: f64,
}

impl TrainedModel {
    /// Consume the model into an inferer over its rule set.
    pub fn into_inferer(self) -> MamdaniInferer {
        MamdaniInferer::new(self.rule_set)
    }
}

/// Train a model with a random source seeded from `config.clustering.seed`.
///
/// Without a configured seed the generator is seeded from OS entropy.
///
/// # Errors
/// - `PostureError::Config` if the configuration is invalid
/// - `PostureError::RuleSet` if clustering or rule derivation fails
pub fn train(points: Vec<FuzzyPoint>, config: &TrainingConfig) -> Result<TrainedModel> {
    let rng = match config.clustering.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    train_with_rng(points, config, rng)
}

/// Train a model with an explicit random source.
///
/// # Errors
/// Same as [`train`].
pub fn train_with_rng<R: Rng>(
    points: Vec<FuzzyPoint>,
    config: &TrainingConfig,
    rng: R,
) -> Result<TrainedModel> {
    config.validate()?;

    let mut super_cluster = KMeansSuperCluster::new(points, config.clustering.clone(), rng);
    let builder = RuleSetBuilder::new(config.extraction.clone());
    let rule_set = builder.adjust_and_build(&mut super_cluster, config.clustering.restart_count)?;

    let min_cluster_dist = super_cluster
        .min_cluster_dist()
        .ok_or(ClusterError::NotAdjusted)?;
    let silhouette = super_cluster.silhouette_coefficient();

    info!(
        activities = rule_set.len(),
        silhouette,
        min_cluster_dist,
        "Training finished"
    );

    Ok(TrainedModel {
        rule_set,
        kind: config.extraction.fuzzy_number,
        centroids: super_cluster.centroids().to_vec(),
        silhouette,
        min_cluster_dist,
    })
}
