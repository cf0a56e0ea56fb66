//! Default tuning constants for the training pipeline.
//!
//! These are the nominal values the pipeline was tuned with. All of them can
//! be overridden through [`TrainingConfig`](super::TrainingConfig).

/// Clustering engine defaults.
pub mod clustering {
    /// Number of clusters, one per target activity (sitting, standing, lying).
    pub const CLUSTER_COUNT: usize = 3;

    /// Independent K-Means++ attempts per `adjust` call.
    pub const RESTART_COUNT: usize = 10;

    /// Draws allowed when sampling a weighted centroid index.
    pub const MAX_SAMPLING_ATTEMPTS: usize = 10;

    /// Upper bound on Lloyd passes per attempt.
    pub const MAX_ITERATIONS: usize = 300;

    /// Selection weight of every point when choosing the first centroid.
    pub const INITIAL_CENTROID_WEIGHT: f64 = 1.0;
}

/// Fuzzy-set extraction defaults.
pub mod extraction {
    /// Minimum membership degree for a point to shape a cluster bound.
    ///
    /// Nominal range is 0.05 to 0.15.
    pub const MIN_MEMBERSHIP_DEGREE: f64 = 0.15;

    /// Additive tolerance around [`MIN_MEMBERSHIP_DEGREE`].
    pub const BOUND_TOLERANCE: f64 = 0.02;

    /// Samples a renderer takes along a fuzzy number curve.
    pub const CURVE_SAMPLE_COUNT: usize = 500;
}

/// Membership degree bounds used by inference.
pub mod membership {
    /// Floor an activity must exceed to be selected.
    pub const MIN_DEGREE: f64 = 0.0;

    /// Starting value of the fuzzy AND (minimum) across dimensions.
    pub const MAX_DEGREE: f64 = 1.0;
}
