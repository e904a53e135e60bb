//! Stance comparison summary types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::metrics::MetricSet;

/// Overall pro/con comparison for one metric across contributing topics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallComparison {
    /// Mean of per-topic pro aggregates.
    pub pro_mean: f64,
    /// Mean of per-topic con aggregates.
    pub con_mean: f64,
    /// `pro_mean - con_mean`.
    pub difference: f64,
    /// Pooled-variance standardized mean difference.
    pub cohen_d: f64,
    /// Topics contributing to both groups.
    pub n_topics: usize,
}

/// Two-section stance comparison summary.
///
/// `per_topic_diffs` is a `BTreeMap` so serialized output is ordered by topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    /// Per contributing topic: pro aggregate minus con aggregate, per metric.
    pub per_topic_diffs: BTreeMap<String, MetricSet<f64>>,
    /// Overall statistics per metric.
    pub overall: MetricSet<OverallComparison>,
}

impl ComparisonSummary {
    /// Number of topics that had documents in both groups.
    pub fn contributing_topics(&self) -> usize {
        self.per_topic_diffs.len()
    }
}
