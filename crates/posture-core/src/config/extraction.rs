//! Fuzzy-set extraction configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::fuzzy::FuzzyNumberKind;

use super::constants::extraction::{BOUND_TOLERANCE, MIN_MEMBERSHIP_DEGREE};

/// Configuration for deriving fuzzy numbers from clusters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fuzzy number family built for every (activity, dimension) pair.
    pub fuzzy_number: FuzzyNumberKind,

    /// Membership degree a point needs to shape a cluster bound.
    ///
    /// Must be in [0.0, 1.0]. Nominal range 0.05 to 0.15.
    pub min_membership_degree: f64,

    /// Points within this additive tolerance below the threshold still count.
    ///
    /// Must be finite and >= 0.0.
    pub bound_tolerance: f64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            fuzzy_number: FuzzyNumberKind::default(),
            min_membership_degree: MIN_MEMBERSHIP_DEGREE,
            bound_tolerance: BOUND_TOLERANCE,
        }
    }
}

impl ExtractionConfig {
    /// Default thresholds with the given fuzzy number family.
    pub fn for_kind(fuzzy_number: FuzzyNumberKind) -> Self {
        Self {
            fuzzy_number,
            ..Self::default()
        }
    }

    /// Whether a membership degree is high enough to shape a bound.
    ///
    /// Degrees up to `bound_tolerance` below the threshold still qualify.
    /// A zero tolerance gives the strict `degree > min_membership_degree`.
    #[inline]
    pub fn qualifies(&self, membership_degree: f64) -> bool {
        membership_degree + self.bound_tolerance > self.min_membership_degree
    }

    /// Validate configuration values.
    ///
    /// # Errors
    /// - `ConfigError::InvalidValue` naming the first offending field
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.min_membership_degree) {
            return Err(ConfigError::InvalidValue {
                field: "min_membership_degree".to_string(),
                message: format!("must be in [0.0, 1.0], got {}", self.min_membership_degree),
            });
        }
        if !self.bound_tolerance.is_finite() || self.bound_tolerance < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "bound_tolerance".to_string(),
                message: format!("must be finite and >= 0.0, got {}", self.bound_tolerance),
            });
        }
        Ok(())
    }
}
