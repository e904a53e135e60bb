//! Lexical overlap baseline for argument/key-point matching.
//!
//! Predicts a match when the Jaccard similarity of the two token sets reaches
//! a threshold. The threshold is tuned on a seeded train split by F1 and then
//! evaluated once on the held-out split.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::KeyPointPair;

/// Function words ignored by [`tokenize`].
pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "for", "of", "on", "in", "at", "to", "with", "by", "is",
    "are", "was", "were", "be", "being", "been", "it", "this", "that", "these", "those", "from",
    "as", "not", "no",
];

/// Baseline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Rows kept after shuffling.
    pub max_rows: usize,
    /// Fraction of kept rows used for threshold tuning.
    pub train_fraction: f64,
    /// Shuffle seed.
    pub seed: u64,
    /// Candidate thresholds, tried in order; ties keep the first.
    pub thresholds: Vec<f64>,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            max_rows: 5000,
            train_fraction: 0.8,
            seed: 42,
            thresholds: (1..=50).map(|i| i as f64 / 100.0).collect(),
        }
    }
}

/// Binary classification scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    /// `tp / (tp + fp)`.
    pub precision: f64,
    /// `tp / (tp + fn)`.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// `(tp + tn) / total`.
    pub accuracy: f64,
}

/// Result of a tuned baseline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineReport {
    /// Selected threshold.
    pub threshold: f64,
    /// F1 on the train split at the selected threshold.
    pub train_f1: f64,
    /// Scores on the test split.
    pub test_metrics: ClassificationMetrics,
    /// Train split size.
    pub n_train: usize,
    /// Test split size.
    pub n_test: usize,
}

/// Lowercased alphanumeric tokens with stopwords removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .chars()
        .flat_map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec![' ']
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|t| !STOPWORDS.contains(t))
        .map(str::to_string)
        .collect()
}

/// Jaccard similarity of two token sets; 0.0 when both are empty.
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    let sa: HashSet<&str> = a.iter().map(String::as_str).collect();
    let sb: HashSet<&str> = b.iter().map(String::as_str).collect();
    if sa.is_empty() && sb.is_empty() {
        return 0.0;
    }
    let intersection = sa.intersection(&sb).count();
    let union = sa.union(&sb).count();
    intersection as f64 / union.max(1) as f64
}

/// Score every pair once: `(similarity, is_match)`.
fn score_pairs(rows: &[KeyPointPair]) -> Vec<(f64, bool)> {
    rows.iter()
        .map(|row| {
            let similarity = jaccard(&tokenize(&row.argument), &tokenize(&row.key_point));
            (similarity, row.is_match())
        })
        .collect()
}

/// Evaluate the matcher at one threshold.
pub fn evaluate(threshold: f64, rows: &[KeyPointPair]) -> ClassificationMetrics {
    evaluate_scored(threshold, &score_pairs(rows))
}

fn evaluate_scored(threshold: f64, scored: &[(f64, bool)]) -> ClassificationMetrics {
    let (mut tp, mut fp, mut tn, mut fn_) = (0usize, 0usize, 0usize, 0usize);
    for &(similarity, actual) in scored {
        match (similarity >= threshold, actual) {
            (true, true) => tp += 1,
            (true, false) => fp += 1,
            (false, false) => tn += 1,
            (false, true) => fn_ += 1,
        }
    }

    let precision = if tp + fp > 0 { tp as f64 / (tp + fp) as f64 } else { 0.0 };
    let recall = if tp + fn_ > 0 { tp as f64 / (tp + fn_) as f64 } else { 0.0 };
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };
    let accuracy = (tp + tn) as f64 / (tp + tn + fp + fn_).max(1) as f64;

    ClassificationMetrics { precision, recall, f1, accuracy }
}

/// Shuffle, truncate, split, tune the threshold on train, evaluate on test.
pub fn run_baseline(rows: &[KeyPointPair], config: &BaselineConfig) -> BaselineReport {
    let mut data = rows.to_vec();
    let mut rng = StdRng::seed_from_u64(config.seed);
    data.shuffle(&mut rng);
    data.truncate(config.max_rows);

    let split = ((config.train_fraction * data.len() as f64) as usize).min(data.len());
    let (train, test) = data.split_at(split);
    let train_scored = score_pairs(train);

    let mut best_threshold = 0.0;
    let mut best_f1 = -1.0;
    for &threshold in &config.thresholds {
        let metrics = evaluate_scored(threshold, &train_scored);
        if metrics.f1 > best_f1 {
            best_f1 = metrics.f1;
            best_threshold = threshold;
        }
    }

    let test_metrics = evaluate(best_threshold, test);
    tracing::debug!(
        threshold = best_threshold,
        train_f1 = best_f1,
        test_f1 = test_metrics.f1,
        "Key-point baseline tuned"
    );

    BaselineReport {
        threshold: best_threshold,
        train_f1: best_f1,
        test_metrics,
        n_train: train.len(),
        n_test: test.len(),
    }
}
