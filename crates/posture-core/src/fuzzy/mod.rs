//! Fuzzy numbers and activity rule sets.
//!
//! Turns a clustered point set into one fuzzy rule per activity. For every
//! centroid and dimension, the points with a high enough membership degree
//! are split around the centroid coordinate; the mean of each side gives the
//! `[left, right]` bounds from which a [`FuzzyNumber`] is built.
//!
//! # Families
//!
//! | Kind | Parameters from `[left, right]` |
//! |------|---------------------------------|
//! | Gaussian | mean = center, std dev = width |
//! | Triangular | left, center, right |
//!
//! where `center = (left + right) / 2` and `width = right - left`.

mod bounds;
mod builder;
mod number;
mod rule;

#[cfg(test)]
mod tests;

pub use bounds::{cluster_bounds, cluster_center, cluster_width, BoundSide, ClusterBounds};
pub use builder::RuleSetBuilder;
pub use number::{FuzzyNumber, FuzzyNumberKind};
pub use rule::{FuzzyRule, FuzzyRuleSet};
