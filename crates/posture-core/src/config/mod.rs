//! Root configuration for the training pipeline.
//!
//! # Loading Configuration
//!
//! ```rust,ignore
//! use posture_core::config::TrainingConfig;
//!
//! // Load from file
//! let config = TrainingConfig::from_file("posture.toml")?;
//!
//! // Or use defaults
//! let config = TrainingConfig::default();
//!
//! // With environment overrides
//! let config = TrainingConfig::default().with_env_overrides();
//! ```
//!
//! # TOML Structure
//!
//! ```toml
//! [clustering]
//! cluster_count = 3
//! restart_count = 10
//! max_sampling_attempts = 10
//! max_iterations = 300
//! seed = 42
//!
//! [extraction]
//! fuzzy_number = "gaussian"
//! min_membership_degree = 0.15
//! bound_tolerance = 0.02
//! ```
//!
//! Invalid values are reported by `validate()`; nothing is silently clamped.

mod clustering;
pub mod constants;
mod extraction;

#[cfg(test)]
mod tests;

pub use clustering::ClusteringConfig;
pub use extraction::ExtractionConfig;

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Root configuration for a training run.
///
/// Aggregates the clustering and extraction sections. Missing sections and
/// fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Clustering engine configuration
    #[serde(default)]
    pub clustering: ClusteringConfig,

    /// Fuzzy-set extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
}

impl TrainingConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// - `ConfigError::Io` if the file cannot be read
    /// - `ConfigError::Parse` if TOML parsing fails
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&contents).map_err(|e| {
            ConfigError::Parse(format!("Failed to parse TOML in '{}': {}", path.display(), e))
        })
    }

    /// Create configuration from a TOML string.
    ///
    /// # Errors
    /// - `ConfigError::Parse` if TOML parsing fails
    pub fn from_toml_str(toml: &str) -> ConfigResult<Self> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to a TOML string.
    ///
    /// # Errors
    /// - `ConfigError::Parse` if serialization fails
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate all configuration values.
    ///
    /// Returns the first error found, prefixed with its section.
    pub fn validate(&self) -> ConfigResult<()> {
        self.clustering
            .validate()
            .map_err(|e| prefix_section("clustering", e))?;

        self.extraction
            .validate()
            .map_err(|e| prefix_section("extraction", e))?;

        Ok(())
    }

    /// Apply environment variable overrides. Prefix: `POSTURE_`
    ///
    /// # Supported Variables
    ///
    /// | Variable | Config Path | Type |
    /// |----------|-------------|------|
    /// | `POSTURE_CLUSTER_COUNT` | `clustering.cluster_count` | usize |
    /// | `POSTURE_RESTART_COUNT` | `clustering.restart_count` | usize |
    /// | `POSTURE_SEED` | `clustering.seed` | u64 |
    /// | `POSTURE_FUZZY_NUMBER` | `extraction.fuzzy_number` | gaussian / triangular |
    /// | `POSTURE_MIN_MEMBERSHIP_DEGREE` | `extraction.min_membership_degree` | f64 |
    /// | `POSTURE_BOUND_TOLERANCE` | `extraction.bound_tolerance` | f64 |
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(n) = env_parse::<usize>("POSTURE_CLUSTER_COUNT") {
            self.clustering.cluster_count = n;
        }
        if let Some(n) = env_parse::<usize>("POSTURE_RESTART_COUNT") {
            self.clustering.restart_count = n;
        }
        if let Some(seed) = env_parse::<u64>("POSTURE_SEED") {
            self.clustering.seed = Some(seed);
        }
        if let Some(kind) = env_parse("POSTURE_FUZZY_NUMBER") {
            self.extraction.fuzzy_number = kind;
        }
        if let Some(v) = env_parse::<f64>("POSTURE_MIN_MEMBERSHIP_DEGREE") {
            self.extraction.min_membership_degree = v;
        }
        if let Some(v) = env_parse::<f64>("POSTURE_BOUND_TOLERANCE") {
            self.extraction.bound_tolerance = v;
        }

        self
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|val| val.trim().parse().ok())
}

fn prefix_section(section: &str, err: ConfigError) -> ConfigError {
    match err {
        ConfigError::InvalidValue { field, message } => ConfigError::InvalidValue {
            field: format!("{}.{}", section, field),
            message,
        },
        other => other,
    }
}
