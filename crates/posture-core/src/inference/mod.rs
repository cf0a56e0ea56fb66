//! Mamdani-style activity inference.
//!
//! An activity's aggregate degree for a point is the minimum, across
//! dimensions, of its rule's membership degree for the point's coordinate.
//! The activity with the highest aggregate above zero wins.

mod mamdani;


pub use mamdani::MamdaniInferer;

use crate::point::FuzzyPoint;

/// Classifies points into activities.
pub trait FuzzyInferer {
    /// Best matching activity, `None` when no rule gives a positive degree.
    fn classify_activity(&self, point: &FuzzyPoint) -> Option<&str>;

    /// Every activity with its aggregate degree, highest first.
    ///
    /// Equal degrees keep label order.
    fn rank_activities(&self, point: &FuzzyPoint) -> Vec<(&str, f64)>;
}
