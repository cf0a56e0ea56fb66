//! Fuzzy rules and rule sets.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::constants::membership::{MAX_DEGREE, MIN_DEGREE};

use super::number::FuzzyNumber;

/// One fuzzy number per dimension, in dimension order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuzzyRule(Vec<FuzzyNumber>);

impl FuzzyRule {
    /// Create a rule from per-dimension fuzzy numbers.
    pub fn new(numbers: Vec<FuzzyNumber>) -> Self {
        Self(numbers)
    }

    /// Fuzzy numbers in dimension order.
    pub fn numbers(&self) -> &[FuzzyNumber] {
        &self.0
    }

    /// Number of dimensions covered.
    #[inline]
    pub fn dim_count(&self) -> usize {
        self.0.len()
    }

    /// Fuzzy AND of the per-dimension membership degrees.
    ///
    /// Coordinates of the wrong length never match.
    pub fn degree(&self, coords: &[f64]) -> f64 {
        if coords.len() != self.0.len() {
            return MIN_DEGREE;
        }

        self.0
            .iter()
            .zip(coords)
            .map(|(number, &x)| number.membership_degree(x))
            .fold(MAX_DEGREE, f64::min)
    }
}

impl From<Vec<FuzzyNumber>> for FuzzyRule {
    fn from(numbers: Vec<FuzzyNumber>) -> Self {
        Self(numbers)
    }
}

impl fmt::Display for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (dimension, number) in self.0.iter().enumerate() {
            if dimension > 0 {
                f.write_str("; ")?;
            }
            write!(f, "[{}] {}", dimension, number)?;
        }
        Ok(())
    }
}

/// Rules keyed by activity label, iterated in label order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuzzyRuleSet(BTreeMap<String, FuzzyRule>);

impl FuzzyRuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a rule, returning the rule previously stored for the activity.
    pub fn insert(&mut self, activity: impl Into<String>, rule: FuzzyRule) -> Option<FuzzyRule> {
        self.0.insert(activity.into(), rule)
    }

    /// Rule for an activity.
    pub fn get(&self, activity: &str) -> Option<&FuzzyRule> {
        self.0.get(activity)
    }

    /// Activity labels in order.
    pub fn activities(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `(activity, rule)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FuzzyRule)> {
        self.0.iter().map(|(activity, rule)| (activity.as_str(), rule))
    }

    /// Number of activities.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the rule set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, FuzzyRule)> for FuzzyRuleSet {
    fn from_iter<I: IntoIterator<Item = (String, FuzzyRule)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for FuzzyRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (activity, rule) in &self.0 {
            writeln!(f, "{}: {}", activity, rule)?;
        }
        Ok(())
    }
}
