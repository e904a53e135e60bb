//! Per-document structural metric records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of structural metrics for one argument graph.
///
/// Every field is always present; empty denominators produce `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuralMetrics {
    /// Components whose label contains "major".
    pub major_claims: u32,
    /// Components labeled exactly "claim".
    pub claims: u32,
    /// Components labeled exactly "premise".
    pub premises: u32,
    /// Relations whose label starts with "support".
    pub supports: u32,
    /// Relations whose label starts with "attack".
    pub attacks: u32,
    /// Longest support chain reaching any major claim or claim.
    pub max_depth: u32,
    /// Mean number of incoming supports per claim.
    pub avg_breadth: f64,
    /// Attacks over all argumentative relations.
    pub attack_ratio: f64,
    /// Premises per claim.
    pub evidence_density: f64,
    /// `major_claims + claims + premises`.
    #[serde(default)]
    pub total_components: u32,
    /// `supports + attacks`.
    #[serde(default)]
    pub total_relations: u32,
    /// `(major_claims + claims) / premises`.
    ///
    /// Records carrying only the nine core metrics load with the three
    /// totals at zero.
    #[serde(default)]
    pub claim_premise_ratio: f64,
}

/// Metrics for one document, keyed by its identifier.
///
/// Serializes flat: `{"essay_id": "...", "major_claims": 1, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Document identifier (the annotation file name).
    pub essay_id: String,
    /// Computed metrics.
    #[serde(flatten)]
    pub metrics: StructuralMetrics,
}

impl MetricRecord {
    /// Attach a document id to computed metrics.
    pub fn new(essay_id: impl Into<String>, metrics: StructuralMetrics) -> Self {
        Self {
            essay_id: essay_id.into(),
            metrics,
        }
    }

    /// Value of a tracked metric as a float.
    pub fn value(&self, metric: TrackedMetric) -> f64 {
        metric.value(&self.metrics)
    }
}

/// Metrics compared between stance groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedMetric {
    /// [`StructuralMetrics::attack_ratio`].
    AttackRatio,
    /// [`StructuralMetrics::evidence_density`].
    EvidenceDensity,
    /// [`StructuralMetrics::avg_breadth`].
    AvgBreadth,
    /// [`StructuralMetrics::max_depth`].
    MaxDepth,
}

impl TrackedMetric {
    /// All tracked metrics in report order.
    pub const ALL: [TrackedMetric; 4] = [
        Self::AttackRatio,
        Self::EvidenceDensity,
        Self::AvgBreadth,
        Self::MaxDepth,
    ];

    /// Read this metric from a metric set.
    pub fn value(&self, metrics: &StructuralMetrics) -> f64 {
        match self {
            Self::AttackRatio => metrics.attack_ratio,
            Self::EvidenceDensity => metrics.evidence_density,
            Self::AvgBreadth => metrics.avg_breadth,
            Self::MaxDepth => metrics.max_depth as f64,
        }
    }
}

impl fmt::Display for TrackedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttackRatio => write!(f, "attack_ratio"),
            Self::EvidenceDensity => write!(f, "evidence_density"),
            Self::AvgBreadth => write!(f, "avg_breadth"),
            Self::MaxDepth => write!(f, "max_depth"),
        }
    }
}

/// One value per tracked metric.
///
/// Replaces string-keyed maps so every tracked metric is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSet<T> {
    /// Value for attack ratio.
    pub attack_ratio: T,
    /// Value for evidence density.
    pub evidence_density: T,
    /// Value for average breadth.
    pub avg_breadth: T,
    /// Value for maximum depth.
    pub max_depth: T,
}

impl<T> MetricSet<T> {
    /// Build a set by evaluating `f` once per tracked metric.
    pub fn from_fn(mut f: impl FnMut(TrackedMetric) -> T) -> Self {
        Self {
            attack_ratio: f(TrackedMetric::AttackRatio),
            evidence_density: f(TrackedMetric::EvidenceDensity),
            avg_breadth: f(TrackedMetric::AvgBreadth),
            max_depth: f(TrackedMetric::MaxDepth),
        }
    }

    /// Borrow the value for a metric.
    pub fn get(&self, metric: TrackedMetric) -> &T {
        match metric {
            TrackedMetric::AttackRatio => &self.attack_ratio,
            TrackedMetric::EvidenceDensity => &self.evidence_density,
            TrackedMetric::AvgBreadth => &self.avg_breadth,
            TrackedMetric::MaxDepth => &self.max_depth,
        }
    }

    /// Mutably borrow the value for a metric.
    pub fn get_mut(&mut self, metric: TrackedMetric) -> &mut T {
        match metric {
            TrackedMetric::AttackRatio => &mut self.attack_ratio,
            TrackedMetric::EvidenceDensity => &mut self.evidence_density,
            TrackedMetric::AvgBreadth => &mut self.avg_breadth,
            TrackedMetric::MaxDepth => &mut self.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_flat() {
        let record = MetricRecord::new("essay001.ann", StructuralMetrics {
            claims: 1,
            max_depth: 2,
            ..Default::default()
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["essay_id"], "essay001.ann");
        assert_eq!(json["claims"], 1);
        assert_eq!(json["max_depth"], 2);
        assert!(json.get("metrics").is_none());

        let back: MetricRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_tracked_metric_values() {
        let metrics = StructuralMetrics {
            attack_ratio: 0.25,
            evidence_density: 3.0,
            avg_breadth: 1.5,
            max_depth: 4,
            ..Default::default()
        };

        let values: Vec<f64> = TrackedMetric::ALL.iter().map(|m| m.value(&metrics)).collect();
        assert_eq!(values, vec![0.25, 3.0, 1.5, 4.0]);
    }

    #[test]
    fn test_metric_set_access() {
        let mut set = MetricSet::from_fn(|m| m.to_string());
        assert_eq!(set.get(TrackedMetric::MaxDepth), "max_depth");

        *set.get_mut(TrackedMetric::AttackRatio) = "changed".to_string();
        assert_eq!(set.attack_ratio, "changed");
    }
}
