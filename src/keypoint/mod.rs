//! Argument/key-point pair corpora.
//!
//! Rows pair an argument with a key point on the same topic and carry a
//! binary match label. Two analyses run over them:
//!
//! 1. **Summary**: pair and match counts per topic, stance distribution
//! 2. **Baseline**: lexical Jaccard matcher with a tuned threshold

pub mod summary;
pub mod baseline;

use serde::{Deserialize, Serialize};

pub use summary::{summarize_key_points, KeyPointSummary, TopicMatchStats};
pub use baseline::{
    evaluate, jaccard, run_baseline, tokenize, BaselineConfig, BaselineReport,
    ClassificationMetrics,
};

/// One argument/key-point row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPointPair {
    /// Debate topic; `None` when the column is missing.
    #[serde(default)]
    pub topic: Option<String>,
    /// Argument text.
    #[serde(default)]
    pub argument: String,
    /// Key point text.
    #[serde(default)]
    pub key_point: String,
    /// Stance of the argument (free-form, e.g. `1` / `-1`).
    #[serde(default)]
    pub stance: String,
    /// Match label; `"1"` means the key point matches the argument.
    #[serde(default)]
    pub label: String,
}

impl KeyPointPair {
    /// Create a new pair row.
    pub fn new(
        topic: impl Into<String>,
        argument: impl Into<String>,
        key_point: impl Into<String>,
        stance: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            topic: Some(topic.into()),
            argument: argument.into(),
            key_point: key_point.into(),
            stance: stance.into(),
            label: label.into(),
        }
    }

    /// Whether the row is labeled as a match.
    pub fn is_match(&self) -> bool {
        self.label == "1"
    }
}
