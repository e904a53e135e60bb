//! # argument-graph-kernel
//!
//! Structural metrics and stance comparison for argument-annotated corpora.
//!
//! The kernel answers one question:
//!
//! > Do essays arguing *for* a prompt build their arguments differently from
//! > essays arguing *against* it?
//!
//! ## Core Contract
//!
//! 1. Parse a brat `.ann` document into components (major claims, claims,
//!    premises) and support/attack relations
//! 2. Compute a fixed per-document metric record (depth, breadth, attack
//!    ratio, evidence density)
//! 3. Compare pro and con documents per topic: mean difference and
//!    pooled-variance effect size
//!
//! ## Architecture
//!
//! ```text
//! .ann text → parse_annotation → ArgumentGraph → compute_metrics → MetricRecord
//!                                                                      ↓
//!                                          StanceLabel rows → compare → ComparisonSummary
//! ```
//!
//! ## Robustness Guarantees
//!
//! - Malformed annotation lines are skipped, never fatal
//! - Empty denominators yield `0.0`
//! - Support cycles terminate via a per-root visiting set
//! - Every stage is a pure function of its inputs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod parser;
pub mod graph;
pub mod metrics;
pub mod stats;
pub mod comparison;
pub mod canonical;
pub mod corpus;
pub mod report;
pub mod keypoint;

// Re-exports
pub use types::{
    Component, ComponentId, ComponentKind, Relation, RelationKind,
    MetricRecord, MetricSet, StructuralMetrics, TrackedMetric,
    StanceGroup, StanceLabel, ComparisonSummary, OverallComparison,
};
pub use parser::{parse_annotation, ParsedAnnotation};
pub use graph::{build_graph, AdjacencyIndex, ArgumentGraph, Neighbor};
pub use metrics::{
    analyze_document, compute_metrics, compute_metrics_with,
    EvidenceDenominator, MetricsConfig,
};
pub use stats::{cohens_d, mean, population_variance};
pub use comparison::{compare, group_by_topic, TopicGroups};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};
pub use corpus::{
    load_key_point_pairs, load_metric_records, load_stance_labels, AnnotationDocument, Corpus,
    CorpusError,
};
pub use report::{
    AnalysisManifest, AnalysisReport, KeyPointReport, ReportArtifactPaths, ReportBundler,
    ReportError, ReportStats, KEY_POINT_BASELINE_FILE, KEY_POINT_SUMMARY_FILE,
};
pub use keypoint::{
    evaluate, jaccard, run_baseline, summarize_key_points, tokenize,
    BaselineConfig, BaselineReport, ClassificationMetrics, KeyPointPair,
    KeyPointSummary, TopicMatchStats,
};

/// Schema version for report artifacts.
/// Increment on breaking changes to any serialized type.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";
