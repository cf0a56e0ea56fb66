use crate::config::constants::membership::MIN_DEGREE;
use crate::fuzzy::FuzzyRuleSet;
use crate::point::FuzzyPoint;

use super::FuzzyInferer;

/// Min-max inference over a [`FuzzyRuleSet`].
///
/// # Example
///
/// ```
/// use posture_core::fuzzy::{FuzzyNumber, FuzzyRule, FuzzyRuleSet};
/// use posture_core::inference::{FuzzyInferer, MamdaniInferer};
/// use posture_core::point::FuzzyPoint;
///
/// let mut rule_set = FuzzyRuleSet::new();
/// rule_set.insert("sitting", FuzzyRule::new(vec![FuzzyNumber::triangular(0.0, 1.0, 2.0).unwrap()]));
/// rule_set.insert("standing", FuzzyRule::new(vec![FuzzyNumber::triangular(2.0, 3.0, 4.0).unwrap()]));
///
/// let inferer = MamdaniInferer::new(rule_set);
/// assert_eq!(inferer.classify_activity(&FuzzyPoint::unlabeled(vec![2.9])), Some("standing"));
/// assert_eq!(inferer.classify_activity(&FuzzyPoint::unlabeled(vec![9.0])), None);
/// ```
#[derive(Debug, Clone)]
pub struct MamdaniInferer {
    rule_set: FuzzyRuleSet,
}

impl MamdaniInferer {
    /// Create an inferer over a rule set.
    pub fn new(rule_set: FuzzyRuleSet) -> Self {
        Self { rule_set }
    }

    /// The underlying rule set.
    pub fn rule_set(&self) -> &FuzzyRuleSet {
        &self.rule_set
    }

    /// Aggregate degree of one activity, `None` for an unknown activity.
    pub fn activity_degree(&self, point: &FuzzyPoint, activity: &str) -> Option<f64> {
        self.rule_set
            .get(activity)
            .map(|rule| rule.degree(&point.coords))
    }
}

impl From<FuzzyRuleSet> for MamdaniInferer {
    fn from(rule_set: FuzzyRuleSet) -> Self {
        Self::new(rule_set)
    }
}

impl FuzzyInferer for MamdaniInferer {
    fn classify_activity(&self, point: &FuzzyPoint) -> Option<&str> {
        let mut max_degree = MIN_DEGREE;
        let mut best_fit = None;

        for (activity, rule) in self.rule_set.iter() {
            let degree = rule.degree(&point.coords);
            if max_degree < degree {
                max_degree = degree;
                best_fit = Some(activity);
            }
        }

        best_fit
    }

    fn rank_activities(&self, point: &FuzzyPoint) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .rule_set
            .iter()
            .map(|(activity, rule)| (activity, rule.degree(&point.coords)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
