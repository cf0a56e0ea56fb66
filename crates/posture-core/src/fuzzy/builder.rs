//! Rule-set construction from a clustered point set.

use tracing::{debug, info, warn};

use crate::clustering::{Centroid, FuzzySuperCluster};
use crate::config::ExtractionConfig;
use crate::error::{ClusterError, RuleSetError, RuleSetResult};
use crate::point::FuzzyPoint;

use super::bounds::cluster_bounds;
use super::number::FuzzyNumberKind;
use super::rule::{FuzzyRule, FuzzyRuleSet};

/// Derives one [`FuzzyRule`] per centroid of an adjusted super cluster.
///
/// Rules are keyed by the activity label of the point each centroid was
/// seeded from. When two centroids share a label, the centroid with the
/// higher cluster index wins and the overwrite is logged.
#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    config: ExtractionConfig,
}

impl RuleSetBuilder {
    /// Create a builder with the given extraction settings.
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Builder with default thresholds for the given family.
    pub fn for_kind(kind: FuzzyNumberKind) -> Self {
        Self::new(ExtractionConfig::for_kind(kind))
    }

    /// Extraction settings.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Adjust `super_cluster` and build a rule set from the result.
    ///
    /// # Errors
    /// - `RuleSetError::Clustering` if `adjust` fails
    /// - Any error of [`RuleSetBuilder::build`]
    pub fn adjust_and_build<S>(
        &self,
        super_cluster: &mut S,
        restart_count: usize,
    ) -> RuleSetResult<FuzzyRuleSet>
    where
        S: FuzzySuperCluster + ?Sized,
    {
        super_cluster.adjust(restart_count)?;
        self.build(super_cluster)
    }

    /// Build a rule set from an already adjusted super cluster.
    ///
    /// # Errors
    /// - `RuleSetError::Clustering(ClusterError::NotAdjusted)` if no attempt was committed
    /// - `RuleSetError::UnlabeledCentroid` if a centroid has no activity label
    /// - `RuleSetError::Extraction` naming the activity, cluster and dimension
    ///   of the first fuzzy number that could not be derived
    pub fn build<S>(&self, super_cluster: &S) -> RuleSetResult<FuzzyRuleSet>
    where
        S: FuzzySuperCluster + ?Sized,
    {
        let centroids = super_cluster.centroids();
        if centroids.is_empty() {
            return Err(ClusterError::NotAdjusted.into());
        }

        let mut rule_set = FuzzyRuleSet::new();
        for centroid in centroids {
            let (activity, rule) = self.rule_for_centroid(super_cluster.points(), centroid)?;
            debug!(cluster = centroid.cluster, %activity, %rule, "Derived fuzzy rule");

            if rule_set.insert(activity.clone(), rule).is_some() {
                warn!(
                    cluster = centroid.cluster,
                    %activity,
                    "Activity already has a rule, overwriting with the later cluster"
                );
            }
        }

        info!(
            activities = rule_set.len(),
            clusters = centroids.len(),
            kind = %self.config.fuzzy_number,
            "Built fuzzy rule set"
        );

        Ok(rule_set)
    }

    /// Derive the rule of a single centroid, one fuzzy number per dimension.
    ///
    /// # Errors
    /// - `RuleSetError::UnlabeledCentroid` if the centroid has no activity label
    /// - `RuleSetError::Extraction` for the first dimension that fails
    pub fn rule_for_centroid(
        &self,
        points: &[FuzzyPoint],
        centroid: &Centroid,
    ) -> RuleSetResult<(String, FuzzyRule)> {
        let activity = centroid
            .activity
            .clone()
            .ok_or(RuleSetError::UnlabeledCentroid {
                cluster: centroid.cluster,
            })?;

        let numbers = (0..centroid.coords.len())
            .map(|dimension| {
                cluster_bounds(points, centroid, dimension, &self.config)
                    .and_then(|bounds| bounds.to_fuzzy_number(self.config.fuzzy_number))
                    .map_err(|source| RuleSetError::Extraction {
                        activity: activity.clone(),
                        cluster: centroid.cluster,
                        dimension,
                        source,
                    })
            })
            .collect::<RuleSetResult<Vec<_>>>()?;

        Ok((activity, FuzzyRule::new(numbers)))
    }
}
