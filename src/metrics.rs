//! Structural metric engine.
//!
//! Turns one [`ArgumentGraph`] into a fixed [`StructuralMetrics`] record.
//!
//! | Metric | Definition |
//! |--------|------------|
//! | `attack_ratio` | `attacks / max(1, supports + attacks)` |
//! | `evidence_density` | `premises / claims` (denominator configurable) |
//! | `avg_breadth` | mean incoming supports per claim |
//! | `max_depth` | longest support chain into a major claim or claim |
//!
//! Every ratio falls back to `0.0` on an empty denominator, so degenerate
//! graphs (empty, disconnected, cyclic) still yield a complete record.

use serde::{Deserialize, Serialize};

use crate::graph::ArgumentGraph;
use crate::parser::{parse_annotation, ParsedAnnotation};
use crate::types::{ComponentKind, MetricRecord, RelationKind, StructuralMetrics};

/// Which components count as claims in the evidence-density denominator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceDenominator {
    /// Components labeled exactly "claim".
    #[default]
    Claims,
    /// Major claims plus claims.
    AllClaims,
}

impl EvidenceDenominator {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "claims" => Some(Self::Claims),
            "all_claims" | "all" => Some(Self::AllClaims),
            _ => None,
        }
    }
}

/// Metric engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Denominator used for `evidence_density`.
    pub evidence_denominator: EvidenceDenominator,
}

impl MetricsConfig {
    /// Config using major claims plus claims as the evidence denominator.
    pub fn all_claims() -> Self {
        Self {
            evidence_denominator: EvidenceDenominator::AllClaims,
        }
    }
}

/// Compute metrics with the default configuration.
pub fn compute_metrics(graph: &ArgumentGraph) -> StructuralMetrics {
    compute_metrics_with(graph, &MetricsConfig::default())
}

/// Compute metrics for one graph.
pub fn compute_metrics_with(graph: &ArgumentGraph, config: &MetricsConfig) -> StructuralMetrics {
    let mut major_claims = 0u32;
    let mut claims = 0u32;
    let mut premises = 0u32;
    for component in graph.components() {
        match component.kind() {
            ComponentKind::MajorClaim => major_claims += 1,
            ComponentKind::Claim => claims += 1,
            ComponentKind::Premise => premises += 1,
            ComponentKind::Other => {}
        }
    }

    let mut supports = 0u32;
    let mut attacks = 0u32;
    for relation in graph.relations() {
        match relation.kind() {
            RelationKind::Supports => supports += 1,
            RelationKind::Attacks => attacks += 1,
            RelationKind::Other => {}
        }
    }

    // Breadth: incoming supports per claim
    let breadths: Vec<f64> = graph
        .components()
        .filter(|c| c.kind() == ComponentKind::Claim)
        .map(|c| graph.supporters(&c.id).count() as f64)
        .collect();
    let avg_breadth = crate::stats::mean(&breadths);

    // Depth: fresh visiting set per root
    let max_depth = graph
        .components()
        .filter(|c| c.kind().is_root())
        .map(|c| graph.support_depth(&c.id))
        .max()
        .unwrap_or(0);

    let evidence_claims = match config.evidence_denominator {
        EvidenceDenominator::Claims => claims,
        EvidenceDenominator::AllClaims => major_claims + claims,
    };
    let evidence_density = ratio(premises, evidence_claims);

    let attack_ratio = attacks as f64 / (supports + attacks).max(1) as f64;
    let claim_premise_ratio = ratio(major_claims + claims, premises);

    StructuralMetrics {
        major_claims,
        claims,
        premises,
        supports,
        attacks,
        max_depth,
        avg_breadth,
        attack_ratio,
        evidence_density,
        total_components: major_claims + claims + premises,
        total_relations: supports + attacks,
        claim_premise_ratio,
    }
}

/// Parse an annotation document and compute its record in one step.
pub fn analyze_document(
    essay_id: impl Into<String>,
    content: &str,
    config: &MetricsConfig,
) -> MetricRecord {
    let parsed: ParsedAnnotation = parse_annotation(content);
    let graph = ArgumentGraph::from(parsed);
    MetricRecord::new(essay_id, compute_metrics_with(&graph, config))
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParsedAnnotation;
    use crate::types::{Component, Relation};

    fn graph(components: &[(&str, &str)], relations: Vec<Relation>) -> ArgumentGraph {
        let components = components
            .iter()
            .map(|(id, label)| Component::new(*id, *label, "text"))
            .collect();
        ArgumentGraph::from(ParsedAnnotation::from_parts(components, relations))
    }

    #[test]
    fn test_empty_graph_is_all_zero() {
        let metrics = compute_metrics(&ArgumentGraph::default());
        assert_eq!(metrics, StructuralMetrics::default());
    }

    #[test]
    fn test_claim_with_two_premises() {
        let g = graph(
            &[("T1", "Claim"), ("T2", "Premise"), ("T3", "Premise")],
            vec![Relation::supports("T2", "T1"), Relation::supports("T3", "T1")],
        );
        let m = compute_metrics(&g);

        assert_eq!(m.claims, 1);
        assert_eq!(m.premises, 2);
        assert_eq!(m.supports, 2);
        assert_eq!(m.attacks, 0);
        assert_eq!(m.attack_ratio, 0.0);
        assert_eq!(m.avg_breadth, 2.0);
        assert_eq!(m.max_depth, 2);
        assert_eq!(m.evidence_density, 2.0);
        assert_eq!(m.total_components, 3);
        assert_eq!(m.total_relations, 2);
        assert_eq!(m.claim_premise_ratio, 0.5);
    }

    #[test]
    fn test_no_relations() {
        let g = graph(
            &[("T1", "Claim"), ("T2", "Premise"), ("T3", "Premise"), ("T4", "Premise")],
            vec![],
        );
        let m = compute_metrics(&g);

        assert_eq!(m.evidence_density, 3.0);
        assert_eq!(m.avg_breadth, 0.0);
        assert_eq!(m.max_depth, 1);
        assert_eq!(m.attack_ratio, 0.0);
    }

    #[test]
    fn test_attack_ratio() {
        let g = graph(
            &[("T1", "Claim"), ("T2", "Premise"), ("T3", "Premise"), ("T4", "Premise")],
            vec![
                Relation::supports("T2", "T1"),
                Relation::attacks("T3", "T1"),
                Relation::new("Attacking", "T4", "T2"),
                Relation::new("partOf", "T4", "T3"),
            ],
        );
        let m = compute_metrics(&g);

        assert_eq!(m.supports, 1);
        assert_eq!(m.attacks, 2);
        assert!((m.attack_ratio - 2.0 / 3.0).abs() < 1e-12);
        // Attacks never extend a support chain
        assert_eq!(m.max_depth, 2);
    }

    #[test]
    fn test_major_claims_are_roots_but_not_claims() {
        let g = graph(
            &[("T1", "MajorClaim"), ("T2", "Claim"), ("T3", "Premise")],
            vec![Relation::supports("T2", "T1"), Relation::supports("T3", "T2")],
        );
        let m = compute_metrics(&g);

        assert_eq!(m.major_claims, 1);
        assert_eq!(m.claims, 1);
        assert_eq!(m.max_depth, 3);
        // Breadth only averages over plain claims
        assert_eq!(m.avg_breadth, 1.0);
    }

    #[test]
    fn test_evidence_density_denominator_variants() {
        // Reference behavior divides by exactly-labeled claims only;
        // the alternative counts major claims too.
        let g = graph(
            &[("T1", "MajorClaim"), ("T2", "Claim"), ("T3", "Premise"), ("T4", "Premise")],
            vec![],
        );

        let claims_only = compute_metrics(&g);
        assert_eq!(claims_only.evidence_density, 2.0);

        let all_claims = compute_metrics_with(&g, &MetricsConfig::all_claims());
        assert_eq!(all_claims.evidence_density, 1.0);
    }

    #[test]
    fn test_only_major_claims_gives_zero_density() {
        let g = graph(&[("T1", "MajorClaim"), ("T2", "Premise")], vec![]);
        assert_eq!(compute_metrics(&g).evidence_density, 0.0);
        assert_eq!(
            compute_metrics_with(&g, &MetricsConfig::all_claims()).evidence_density,
            1.0
        );
    }

    #[test]
    fn test_support_cycle_is_finite() {
        let g = graph(
            &[("T1", "Claim"), ("T2", "Claim")],
            vec![Relation::supports("T1", "T2"), Relation::supports("T2", "T1")],
        );
        let m = compute_metrics(&g);
        assert_eq!(m.max_depth, 2);
        assert_eq!(m.avg_breadth, 1.0);
    }

    #[test]
    fn test_idempotent() {
        let g = graph(
            &[("T1", "Claim"), ("T2", "Premise")],
            vec![Relation::supports("T2", "T1")],
        );
        assert_eq!(compute_metrics(&g), compute_metrics(&g));
    }

    #[test]
    fn test_analyze_document() {
        let content = "T1\tClaim 0 5\tclaim\nT2\tPremise 6 9\tprem\nR1\tsupports Arg1:T2 Arg2:T1\n";
        let record = analyze_document("essay007.ann", content, &MetricsConfig::default());
        assert_eq!(record.essay_id, "essay007.ann");
        assert_eq!(record.metrics.max_depth, 2);
        assert_eq!(record.metrics.evidence_density, 1.0);
    }

    #[test]
    fn test_denominator_parsing() {
        assert_eq!(EvidenceDenominator::from_str("claims"), Some(EvidenceDenominator::Claims));
        assert_eq!(EvidenceDenominator::from_str("ALL_CLAIMS"), Some(EvidenceDenominator::AllClaims));
        assert_eq!(EvidenceDenominator::from_str("premises"), None);
    }
}
