//! Clustering engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

use super::constants::clustering::{
    CLUSTER_COUNT, MAX_ITERATIONS, MAX_SAMPLING_ATTEMPTS, RESTART_COUNT,
};

/// Configuration for the fuzzy K-Means++ super cluster.
///
/// # Validation
///
/// Counts must be positive. `validate()` returns the first violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Number of clusters (k). One per target activity.
    pub cluster_count: usize,

    /// Independent attempts per `adjust` call; the best one is kept.
    pub restart_count: usize,

    /// Draws allowed when sampling a K-Means++ centroid.
    pub max_sampling_attempts: usize,

    /// Upper bound on Lloyd passes within one attempt.
    pub max_iterations: usize,

    /// Seed for the random source. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            cluster_count: CLUSTER_COUNT,
            restart_count: RESTART_COUNT,
            max_sampling_attempts: MAX_SAMPLING_ATTEMPTS,
            max_iterations: MAX_ITERATIONS,
            seed: None,
        }
    }
}

impl ClusteringConfig {
    /// Default configuration with a custom cluster count.
    pub fn with_cluster_count(cluster_count: usize) -> Self {
        Self {
            cluster_count,
            ..Self::default()
        }
    }

    /// Builder: set the restart count.
    #[must_use]
    pub fn with_restart_count(mut self, restart_count: usize) -> Self {
        self.restart_count = restart_count;
        self
    }

    /// Builder: set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` naming the first offending field
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("cluster_count", self.cluster_count),
            ("restart_count", self.restart_count),
            ("max_sampling_attempts", self.max_sampling_attempts),
            ("max_iterations", self.max_iterations),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: "must be > 0".to_string(),
                });
            }
        }
        Ok(())
    }
}
