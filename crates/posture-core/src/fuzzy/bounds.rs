//! Cluster bound extraction.

use std::fmt;

use tracing::warn;

use crate::clustering::Centroid;
use crate::config::ExtractionConfig;
use crate::error::{FuzzyNumberError, FuzzyNumberResult};
use crate::point::FuzzyPoint;

use super::number::{FuzzyNumber, FuzzyNumberKind};

/// Side of a centroid along one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    /// Below the centroid coordinate.
    Left,
    /// Above the centroid coordinate.
    Right,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Mean coordinate of the qualifying points on each side of a centroid.
///
/// A side is `None` when no qualifying point lies strictly on it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClusterBounds {
    /// Mean of the qualifying coordinates below the centroid.
    pub left: Option<f64>,
    /// Mean of the qualifying coordinates above the centroid.
    pub right: Option<f64>,
}

impl ClusterBounds {
    /// Sides without any qualifying point.
    pub fn degenerate_sides(&self) -> Vec<BoundSide> {
        let mut sides = Vec::new();
        if self.left.is_none() {
            sides.push(BoundSide::Left);
        }
        if self.right.is_none() {
            sides.push(BoundSide::Right);
        }
        sides
    }

    /// Both bounds, failing on the first undefined side.
    pub fn resolve(&self) -> FuzzyNumberResult<(f64, f64)> {
        let left = self.left.ok_or(FuzzyNumberError::UndefinedBound {
            side: BoundSide::Left,
        })?;
        let right = self.right.ok_or(FuzzyNumberError::UndefinedBound {
            side: BoundSide::Right,
        })?;
        Ok((left, right))
    }

    /// Build a fuzzy number of the given family from these bounds.
    pub fn to_fuzzy_number(&self, kind: FuzzyNumberKind) -> FuzzyNumberResult<FuzzyNumber> {
        let (left, right) = self.resolve()?;
        FuzzyNumber::from_bounds(kind, left, right)
    }
}

/// Compute the bounds of a cluster along one dimension.
///
/// Only points whose membership degree for the centroid's cluster passes
/// [`ExtractionConfig::qualifies`] are used. Points exactly on the centroid
/// coordinate count for neither side. An empty side is logged and left
/// undefined.
///
/// # Errors
/// - `FuzzyNumberError::DimensionOutOfRange` if `dimension` is not a
///   coordinate of the centroid
pub fn cluster_bounds(
    points: &[FuzzyPoint],
    centroid: &Centroid,
    dimension: usize,
    config: &ExtractionConfig,
) -> FuzzyNumberResult<ClusterBounds> {
    let centroid_coord =
        *centroid
            .coords
            .get(dimension)
            .ok_or(FuzzyNumberError::DimensionOutOfRange {
                dimension,
                dimensions: centroid.coords.len(),
            })?;

    let mut left_sum = 0.0;
    let mut left_count = 0_usize;
    let mut right_sum = 0.0;
    let mut right_count = 0_usize;

    for point in points {
        if !config.qualifies(point.membership_degree(centroid.cluster)) {
            continue;
        }
        let Some(&coord) = point.coords.get(dimension) else {
            continue;
        };

        if coord < centroid_coord {
            left_sum += coord;
            left_count += 1;
        } else if coord > centroid_coord {
            right_sum += coord;
            right_count += 1;
        }
    }

    let bounds = ClusterBounds {
        left: (left_count > 0).then(|| left_sum / left_count as f64),
        right: (right_count > 0).then(|| right_sum / right_count as f64),
    };

    for side in bounds.degenerate_sides() {
        warn!(
            cluster = centroid.cluster,
            dimension,
            %side,
            "Degenerate cluster: no qualifying points on this side of the centroid"
        );
    }

    Ok(bounds)
}

fn check_interval(left: f64, right: f64) -> FuzzyNumberResult<()> {
    if !left.is_finite() || !right.is_finite() || right <= left {
        return Err(FuzzyNumberError::DegenerateBound { left, right });
    }
    Ok(())
}

/// Midpoint of `[left, right]`.
///
/// # Errors
/// - `FuzzyNumberError::DegenerateBound` if `right <= left` or a bound is not finite
pub fn cluster_center(left: f64, right: f64) -> FuzzyNumberResult<f64> {
    check_interval(left, right)?;
    Ok((left + right) / 2.0)
}

/// Length of `[left, right]`.
///
/// # Errors
/// - `FuzzyNumberError::DegenerateBound` if `right <= left` or a bound is not finite
pub fn cluster_width(left: f64, right: f64) -> FuzzyNumberResult<f64> {
    check_interval(left, right)?;
    Ok(right - left)
}
