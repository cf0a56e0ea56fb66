//! Error types for posture-core.
//!
//! This module defines the error hierarchy of the training pipeline:
//!
//! - [`PostureError`]: Top-level unified error for all crate errors
//! - Sub-error types: [`ClusterError`], [`FuzzyNumberError`], [`RuleSetError`],
//!   [`ConfigError`]
//!
//! # Failure Policy
//!
//! - Structural problems with the input (empty point set, inconsistent
//!   dimensionality) abort the run immediately.
//! - A failed clustering attempt aborts the whole multi-restart run.
//! - A failed fuzzy number aborts rule construction; no partial rule set is
//!   ever returned.
//! - Inference never fails. An unclassifiable point yields `None`.
//!
//! # Examples
//!
//! ```rust
//! use posture_core::error::{ClusterError, PostureError, Result};
//!
//! fn dimensionality(points: &[Vec<f64>]) -> Result<usize> {
//!     points
//!         .first()
//!         .map(Vec::len)
//!         .ok_or(PostureError::Cluster(ClusterError::EmptyPointSet))
//! }
//!
//! let err = dimensionality(&[]).unwrap_err();
//! assert!(err.is_structural());
//! ```

mod sub_errors;
mod unified;


pub use sub_errors::{
    ClusterError, ClusterResult, ConfigError, ConfigResult, FuzzyNumberError, FuzzyNumberResult,
    RuleSetError, RuleSetResult,
};
pub use unified::{PostureError, Result};
