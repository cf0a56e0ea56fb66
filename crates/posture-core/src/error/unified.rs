//! Top-level unified error type for posture-core.

use thiserror::Error;

use super::sub_errors::{ClusterError, ConfigError, FuzzyNumberError, RuleSetError};

// ============================================================================
// TOP-LEVEL UNIFIED ERROR TYPE
// ============================================================================

/// Top-level unified error type for posture-core.
///
/// All stage errors convert into this type via `From` implementations, so the
/// pipeline entry points can propagate with `?`.
///
/// # Examples
///
/// ```rust
/// use posture_core::error::{ClusterError, PostureError};
///
/// let err: PostureError = ClusterError::EmptyPointSet.into();
/// assert!(err.is_structural());
/// assert!(err.is_critical());
/// ```
#[derive(Debug, Error)]
pub enum PostureError {
    /// Clustering engine error.
    #[error("Cluster error: {0}")]
    Cluster(#[from] ClusterError),

    /// Fuzzy number construction error.
    #[error("Fuzzy number error: {0}")]
    FuzzyNumber(#[from] FuzzyNumberError),

    /// Rule-set construction error.
    #[error("Rule set error: {0}")]
    RuleSet(#[from] RuleSetError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PostureError {
    /// Check if this error stems from a malformed point set.
    ///
    /// Structural errors are never retried: rerunning with the same input
    /// fails the same way.
    #[inline]
    pub fn is_structural(&self) -> bool {
        match self {
            Self::Cluster(e) | Self::RuleSet(RuleSetError::Clustering(e)) => e.is_structural(),
            _ => false,
        }
    }

    /// Check if this error aborts a training run.
    ///
    /// Everything except a lone fuzzy number failure, which the rule-set
    /// builder converts into an attributable [`RuleSetError::Extraction`].
    #[inline]
    pub fn is_critical(&self) -> bool {
        !matches!(self, Self::FuzzyNumber(_))
    }
}

/// Result type alias using [`PostureError`].
pub type Result<T> = std::result::Result<T, PostureError>;
