//! Pro/con stance comparison across topics.
//!
//! ## Algorithm
//!
//! 1. Drop stance rows with an empty id, empty topic or unknown stance
//! 2. Partition document ids by topic, then by [`StanceGroup`]
//! 3. Keep only topics with at least one document in each group
//! 4. Per topic and tracked metric: group aggregate = mean over the group's
//!    documents that have a record (0.0 if none); diff = pro - con
//! 5. Overall per metric: means of the per-topic aggregates, their
//!    difference, Cohen's d and the number of contributing topics

use std::collections::{BTreeMap, HashMap};

use crate::stats::{cohens_d, mean};
use crate::types::{
    ComparisonSummary, MetricRecord, MetricSet, OverallComparison, StanceGroup, StanceLabel,
    TrackedMetric,
};

/// Document ids of one topic, split by group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicGroups {
    /// Ids labeled pro, in input order.
    pub pro: Vec<String>,
    /// Ids labeled con, in input order.
    pub con: Vec<String>,
}

impl TopicGroups {
    /// Ids of one group.
    pub fn ids(&self, group: StanceGroup) -> &[String] {
        match group {
            StanceGroup::Pro => &self.pro,
            StanceGroup::Con => &self.con,
        }
    }

    /// True when both groups have at least one document.
    pub fn is_contrastive(&self) -> bool {
        !self.pro.is_empty() && !self.con.is_empty()
    }
}

/// Partition stance rows by topic, dropping unusable rows.
pub fn group_by_topic(labels: &[StanceLabel]) -> BTreeMap<String, TopicGroups> {
    let mut topics: BTreeMap<String, TopicGroups> = BTreeMap::new();
    let mut dropped = 0usize;

    for label in labels {
        let Some((essay_id, topic, group)) = label.resolve() else {
            dropped += 1;
            continue;
        };
        let entry = topics.entry(topic.to_string()).or_default();
        match group {
            StanceGroup::Pro => entry.pro.push(essay_id.to_string()),
            StanceGroup::Con => entry.con.push(essay_id.to_string()),
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "Dropped stance rows without id, topic or pro/con stance");
    }
    topics
}

/// Compare tracked metrics between pro and con documents.
pub fn compare(records: &[MetricRecord], labels: &[StanceLabel]) -> ComparisonSummary {
    let by_id: HashMap<&str, &MetricRecord> =
        records.iter().map(|r| (r.essay_id.as_str(), r)).collect();

    let mut per_topic_diffs: BTreeMap<String, MetricSet<f64>> = BTreeMap::new();
    let mut pro_values: MetricSet<Vec<f64>> = MetricSet::default();
    let mut con_values: MetricSet<Vec<f64>> = MetricSet::default();

    for (topic, groups) in group_by_topic(labels) {
        if !groups.is_contrastive() {
            continue;
        }

        let diffs = MetricSet::from_fn(|metric| {
            let pro = aggregate(&by_id, groups.ids(StanceGroup::Pro), metric);
            let con = aggregate(&by_id, groups.ids(StanceGroup::Con), metric);
            pro_values.get_mut(metric).push(pro);
            con_values.get_mut(metric).push(con);
            pro - con
        });
        per_topic_diffs.insert(topic, diffs);
    }

    let overall = MetricSet::from_fn(|metric| {
        let xs = pro_values.get(metric);
        let ys = con_values.get(metric);
        let pro_mean = mean(xs);
        let con_mean = mean(ys);
        OverallComparison {
            pro_mean,
            con_mean,
            difference: pro_mean - con_mean,
            cohen_d: cohens_d(xs, ys),
            n_topics: xs.len().min(ys.len()),
        }
    });

    tracing::debug!(
        topics = per_topic_diffs.len(),
        records = records.len(),
        "Stance comparison computed"
    );

    ComparisonSummary {
        per_topic_diffs,
        overall,
    }
}

/// Mean of `metric` over the ids that have a record.
fn aggregate(by_id: &HashMap<&str, &MetricRecord>, ids: &[String], metric: TrackedMetric) -> f64 {
    let values: Vec<f64> = ids
        .iter()
        .filter_map(|id| by_id.get(id.as_str()))
        .map(|record| record.value(metric))
        .collect();
    mean(&values)
}
