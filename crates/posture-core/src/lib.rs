//! Posture Core Library
//!
//! Fuzzy activity classification from labeled feature vectors.
//!
//! # Architecture
//!
//! Training runs in three stages:
//! - Fuzzy K-Means++ clustering with restarts (`clustering`)
//! - Per-cluster fuzzy number extraction into one rule per activity (`fuzzy`)
//! - Mamdani min-max inference over the rule set (`inference`)
//!
//! Everything is synchronous. Randomness is injected through a `rand::Rng`.
//!
//! # Example
//!
//! ```
//! use posture_core::config::{ClusteringConfig, TrainingConfig};
//! use posture_core::inference::FuzzyInferer;
//! use posture_core::point::FuzzyPoint;
//! use posture_core::train;
//!
//! let mut points = Vec::new();
//! for x in [-1.0, -0.5, 0.0, 0.5, 1.0] {
//!     points.push(FuzzyPoint::labeled(vec![x], "sitting"));
//!     points.push(FuzzyPoint::labeled(vec![x + 100.0], "standing"));
//! }
//!
//! let mut config = TrainingConfig::default();
//! config.clustering = ClusteringConfig::with_cluster_count(2).with_seed(42);
//!
//! let model = train(points, &config).unwrap();
//! let inferer = model.into_inferer();
//!
//! assert_eq!(inferer.classify_activity(&FuzzyPoint::unlabeled(vec![100.2])), Some("standing"));
//! ```

pub mod clustering;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod inference;
pub mod point;
pub mod training;

pub use config::TrainingConfig;
pub use error::{PostureError, Result};
pub use training::{train, train_with_rng, TrainedModel};
