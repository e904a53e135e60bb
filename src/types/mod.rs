//! Core types for the argument graph kernel.

pub mod component;
pub mod relation;
pub mod metrics;
pub mod stance;
pub mod comparison;

pub use component::{Component, ComponentId, ComponentKind};
pub use relation::{Relation, RelationKind};
pub use metrics::{MetricRecord, MetricSet, StructuralMetrics, TrackedMetric};
pub use stance::{StanceGroup, StanceLabel};
pub use comparison::{ComparisonSummary, OverallComparison};
