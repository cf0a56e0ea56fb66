//! Sub-error types for posture-core.
//!
//! Each error type covers one stage of the pipeline.

use thiserror::Error;

use crate::fuzzy::BoundSide;

// ============================================================================
// CLUSTER ERROR
// ============================================================================

/// Clustering engine errors.
///
/// Covers structural problems with the point set and failures of individual
/// K-Means++ attempts.
#[derive(Debug, Clone, Error)]
pub enum ClusterError {
    /// No points were supplied, so no dimensionality can be determined.
    #[error("No points to clusterize: point set is empty")]
    EmptyPointSet,

    /// A point does not share the dimensionality of the first point.
    #[error("Dimension mismatch at point {index}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Index of the offending point
        index: usize,
        /// Dimensionality of the first point
        expected: usize,
        /// Dimensionality of the offending point
        actual: usize,
    },

    /// Points have zero coordinates.
    #[error("Points must have at least one coordinate")]
    ZeroDimensional,

    /// A coordinate is NaN or infinite.
    #[error("Point {index} has a non-finite coordinate in dimension {dimension}")]
    NonFiniteCoordinate {
        /// Index of the offending point
        index: usize,
        /// Offending dimension
        dimension: usize,
    },

    /// Requested cluster count cannot be satisfied by the point set.
    #[error("Invalid cluster count: requested {requested}, available points {available}")]
    InvalidClusterCount {
        /// Requested number of clusters
        requested: usize,
        /// Number of points available
        available: usize,
    },

    /// Restart count must be positive.
    #[error("Restart count must be > 0")]
    InvalidRestartCount,

    /// Weighted centroid sampling failed after the bounded number of draws.
    ///
    /// # When This Occurs
    ///
    /// - All remaining selection weights are zero (duplicate points)
    /// - Weights contain NaN or Infinity
    #[error("Random distribution index not selected for centroid {centroid} after {attempts} attempts")]
    SamplingExhausted {
        /// Index of the centroid being seeded
        centroid: usize,
        /// Number of draws performed
        attempts: usize,
    },

    /// A single clustering attempt failed, aborting the whole run.
    #[error("Clustering attempt {attempt} failed: {source}")]
    AttemptFailed {
        /// Zero-based attempt index
        attempt: usize,
        /// Underlying failure
        #[source]
        source: Box<ClusterError>,
    },

    /// Cluster results were requested before any successful adjustment.
    #[error("Super cluster has not been adjusted yet")]
    NotAdjusted,
}

impl ClusterError {
    /// Check if this error describes a malformed input rather than a failed attempt.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::EmptyPointSet
                | Self::DimensionMismatch { .. }
                | Self::ZeroDimensional
                | Self::NonFiniteCoordinate { .. }
                | Self::InvalidClusterCount { .. }
                | Self::InvalidRestartCount
        )
    }
}

/// Result type for clustering operations.
pub type ClusterResult<T> = std::result::Result<T, ClusterError>;

// ============================================================================
// FUZZY NUMBER ERROR
// ============================================================================

/// Fuzzy number construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyNumberError {
    /// Bounds do not form a proper interval.
    #[error("Degenerate bound: right bound {right} must be greater than left bound {left}")]
    DegenerateBound {
        /// Left (lower) bound
        left: f64,
        /// Right (upper) bound
        right: f64,
    },

    /// One side of a cluster had no qualifying points.
    #[error("Undefined {side} bound: no qualifying points on that side of the centroid")]
    UndefinedBound {
        /// The side without points
        side: BoundSide,
    },

    /// Gaussian spread must be finite and positive.
    #[error("Invalid standard deviation {0}: must be finite and > 0")]
    InvalidStdDev(f64),

    /// Triangular vertices must be strictly increasing.
    #[error("Invalid triangle: expected left < center < right, got {left}, {center}, {right}")]
    InvalidTriangle {
        /// Left vertex
        left: f64,
        /// Peak vertex
        center: f64,
        /// Right vertex
        right: f64,
    },

    /// Dimension index outside the point dimensionality.
    #[error("Dimension {dimension} out of range for {dimensions}-dimensional points")]
    DimensionOutOfRange {
        /// Requested dimension
        dimension: usize,
        /// Point dimensionality
        dimensions: usize,
    },
}

/// Result type for fuzzy number operations.
pub type FuzzyNumberResult<T> = std::result::Result<T, FuzzyNumberError>;

// ============================================================================
// RULE SET ERROR
// ============================================================================

/// Rule-set construction errors.
///
/// Every variant names the cluster it concerns so a failed training run can
/// be traced back to the offending prototype.
#[derive(Debug, Clone, Error)]
pub enum RuleSetError {
    /// Clustering failed before any rule could be derived.
    #[error("Clustering failed: {0}")]
    Clustering(#[from] ClusterError),

    /// The seed point of a centroid carried no activity label.
    #[error("Centroid of cluster {cluster} has no activity label")]
    UnlabeledCentroid {
        /// Cluster index
        cluster: usize,
    },

    /// A fuzzy number could not be derived for one (activity, dimension) pair.
    #[error("Failed to derive fuzzy number for activity '{activity}' (cluster {cluster}, dimension {dimension}): {source}")]
    Extraction {
        /// Activity label of the centroid
        activity: String,
        /// Cluster index
        cluster: usize,
        /// Coordinate dimension
        dimension: usize,
        /// Underlying failure
        #[source]
        source: FuzzyNumberError,
    },
}

/// Result type for rule-set construction.
pub type RuleSetResult<T> = std::result::Result<T, RuleSetError>;

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Failed to read config file '{path}': {message}")]
    Io {
        /// Path of the file
        path: String,
        /// Error message
        message: String,
    },

    /// TOML parse or serialization failure.
    #[error("Failed to parse TOML: {0}")]
    Parse(String),

    /// A value is out of its allowed range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Dotted config path
        field: String,
        /// Why the value is rejected
        message: String,
    },

    /// Unknown fuzzy number family.
    #[error("Invalid fuzzy number type provided: '{0}' (expected 'gaussian' or 'triangular')")]
    UnknownFuzzyNumberKind(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
