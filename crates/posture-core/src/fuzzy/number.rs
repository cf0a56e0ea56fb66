//! Fuzzy number families.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, FuzzyNumberError, FuzzyNumberResult};

use super::bounds::{cluster_center, cluster_width};

/// Fuzzy number family selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuzzyNumberKind {
    /// Bell-shaped membership around a mean.
    #[default]
    Gaussian,
    /// Piecewise linear membership with a single peak.
    Triangular,
}

impl FuzzyNumberKind {
    /// All families, in declaration order.
    pub const ALL: [FuzzyNumberKind; 2] = [Self::Gaussian, Self::Triangular];

    /// Lowercase name as used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gaussian => "gaussian",
            Self::Triangular => "triangular",
        }
    }
}

impl fmt::Display for FuzzyNumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuzzyNumberKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gaussian" => Ok(Self::Gaussian),
            "triangular" => Ok(Self::Triangular),
            _ => Err(ConfigError::UnknownFuzzyNumberKind(s.to_string())),
        }
    }
}

/// A fuzzy number mapping a real value to a membership degree in [0, 1].
///
/// # Example
///
/// ```
/// use posture_core::fuzzy::FuzzyNumber;
///
/// let tfn = FuzzyNumber::triangular(0.0, 1.0, 2.0).unwrap();
/// assert_eq!(tfn.membership_degree(1.0), 1.0);
/// assert_eq!(tfn.membership_degree(0.5), 0.5);
/// assert_eq!(tfn.membership_degree(2.0), 0.0);
/// ```
///
/// Deserialization goes through the validating constructors, so a stored
/// number with a non-positive spread or an unordered triangle is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", try_from = "FuzzyNumberRepr")]
pub enum FuzzyNumber {
    /// `exp(-(x - mean)² / (2 std_dev²))`
    Gaussian {
        /// Peak position
        mean: f64,
        /// Spread
        std_dev: f64,
    },
    /// Zero outside `[left, right)`, rising to 1 at `center`.
    Triangular {
        /// Left foot
        left: f64,
        /// Peak
        center: f64,
        /// Right foot
        right: f64,
    },
}

impl FuzzyNumber {
    /// Create a Gaussian fuzzy number.
    ///
    /// # Errors
    /// - `FuzzyNumberError::InvalidStdDev` if `std_dev` is not finite and positive
    pub fn gaussian(mean: f64, std_dev: f64) -> FuzzyNumberResult<Self> {
        if !std_dev.is_finite() || std_dev <= 0.0 {
            return Err(FuzzyNumberError::InvalidStdDev(std_dev));
        }
        Ok(Self::Gaussian { mean, std_dev })
    }

    /// Create a triangular fuzzy number.
    ///
    /// # Errors
    /// - `FuzzyNumberError::InvalidTriangle` unless `left < center < right`
    pub fn triangular(left: f64, center: f64, right: f64) -> FuzzyNumberResult<Self> {
        let finite = left.is_finite() && center.is_finite() && right.is_finite();
        if !finite || left >= center || center >= right {
            return Err(FuzzyNumberError::InvalidTriangle {
                left,
                center,
                right,
            });
        }
        Ok(Self::Triangular {
            left,
            center,
            right,
        })
    }

    /// Build a fuzzy number of the given family from cluster bounds.
    ///
    /// # Errors
    /// - `FuzzyNumberError::DegenerateBound` if `right <= left` or a bound is not finite
    pub fn from_bounds(kind: FuzzyNumberKind, left: f64, right: f64) -> FuzzyNumberResult<Self> {
        let center = cluster_center(left, right)?;
        match kind {
            FuzzyNumberKind::Gaussian => Self::gaussian(center, cluster_width(left, right)?),
            FuzzyNumberKind::Triangular => Self::triangular(left, center, right),
        }
    }

    /// Family of this number.
    pub fn kind(&self) -> FuzzyNumberKind {
        match self {
            Self::Gaussian { .. } => FuzzyNumberKind::Gaussian,
            Self::Triangular { .. } => FuzzyNumberKind::Triangular,
        }
    }

    /// Value with membership degree 1.
    pub fn peak(&self) -> f64 {
        match *self {
            Self::Gaussian { mean, .. } => mean,
            Self::Triangular { center, .. } => center,
        }
    }

    /// Membership degree of `x`, always in [0, 1].
    ///
    /// Variants built directly with invalid parameters still stay in range:
    /// a spread that is not positive collapses to a spike at `mean`.
    pub fn membership_degree(&self, x: f64) -> f64 {
        let degree = match *self {
            Self::Gaussian { mean, std_dev } if !(std_dev.is_finite() && std_dev > 0.0) => {
                if x == mean {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Gaussian { mean, std_dev } => {
                let numer = -(x - mean).powi(2);
                let denom = 2.0 * std_dev.powi(2);
                (numer / denom).exp()
            }
            Self::Triangular {
                left,
                center,
                right,
            } => {
                if x < left {
                    0.0
                } else if x < center {
                    (x - left) / (center - left)
                } else if x < right {
                    (right - x) / (right - center)
                } else {
                    0.0
                }
            }
        };
        if degree.is_nan() {
            0.0
        } else {
            degree.clamp(0.0, 1.0)
        }
    }

    /// Sample the membership curve at `count` evenly spaced points in `[low, high]`.
    ///
    /// Returns `(x, degree)` pairs ordered by `x`. Both ends are included when
    /// `count >= 2`.
    pub fn sample_curve(&self, low: f64, high: f64, count: usize) -> Vec<(f64, f64)> {
        match count {
            0 => Vec::new(),
            1 => vec![(low, self.membership_degree(low))],
            _ => {
                let step = (high - low) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        let x = if i == count - 1 { high } else { low + step * i as f64 };
                        (x, self.membership_degree(x))
                    })
                    .collect()
            }
        }
    }
}

/// Unchecked wire form of [`FuzzyNumber`].
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum FuzzyNumberRepr {
    Gaussian { mean: f64, std_dev: f64 },
    Triangular { left: f64, center: f64, right: f64 },
}

impl TryFrom<FuzzyNumberRepr> for FuzzyNumber {
    type Error = FuzzyNumberError;

    fn try_from(repr: FuzzyNumberRepr) -> Result<Self, Self::Error> {
        match repr {
            FuzzyNumberRepr::Gaussian { mean, std_dev } => Self::gaussian(mean, std_dev),
            FuzzyNumberRepr::Triangular {
                left,
                center,
                right,
            } => Self::triangular(left, center, right),
        }
    }
}

impl fmt::Display for FuzzyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gaussian { mean, std_dev } => {
                write!(f, "mean: {:.4}, std dev: {:.4}", mean, std_dev)
            }
            Self::Triangular {
                left,
                center,
                right,
            } => write!(
                f,
                "left: {:.4}, center: {:.4}, right: {:.4}",
                left, center, right
            ),
        }
    }
}
