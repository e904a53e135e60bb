//! Per-topic match statistics for key-point corpora.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::KeyPointPair;

/// Topic name used for rows without a topic column.
pub const UNKNOWN_TOPIC: &str = "UNKNOWN";

/// Pair and match counts for one topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicMatchStats {
    /// Number of rows.
    pub pairs: usize,
    /// Rows labeled as matches.
    pub matches: usize,
    /// `matches / pairs`, 0.0 without pairs.
    pub match_rate: f64,
}

/// Corpus-level summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyPointSummary {
    /// Total number of rows.
    pub total_pairs: usize,
    /// Row count per non-empty stance value.
    pub stance_distribution: BTreeMap<String, usize>,
    /// Statistics per topic.
    pub topics: BTreeMap<String, TopicMatchStats>,
}

/// Summarize a key-point corpus.
pub fn summarize_key_points(rows: &[KeyPointPair]) -> KeyPointSummary {
    let mut summary = KeyPointSummary {
        total_pairs: rows.len(),
        ..Default::default()
    };

    for row in rows {
        let topic = row.topic.as_deref().unwrap_or(UNKNOWN_TOPIC);
        let stats = summary.topics.entry(topic.to_string()).or_default();
        stats.pairs += 1;
        if row.is_match() {
            stats.matches += 1;
        }
        if !row.stance.is_empty() {
            *summary.stance_distribution.entry(row.stance.clone()).or_insert(0) += 1;
        }
    }

    for stats in summary.topics.values_mut() {
        stats.match_rate = if stats.pairs > 0 {
            stats.matches as f64 / stats.pairs as f64
        } else {
            0.0
        };
    }

    summary
}
