//! Relation types between argument components.

use serde::{Deserialize, Serialize};
use super::component::ComponentId;

/// Type of argumentative relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Source supports target.
    Supports,
    /// Source attacks target.
    Attacks,
    /// Any other relation label.
    Other,
}

impl RelationKind {
    /// Classify a raw relation label by case-insensitive prefix.
    ///
    /// Tolerates morphological variants: `Supports`, `supporting`, `attack`.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.starts_with("support") {
            Self::Supports
        } else if lower.starts_with("attack") {
            Self::Attacks
        } else {
            Self::Other
        }
    }

    /// Whether this is a support relation.
    pub fn is_support(&self) -> bool {
        matches!(self, Self::Supports)
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Supports => write!(f, "supports"),
            Self::Attacks => write!(f, "attacks"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Directed, typed link: `source` supports or attacks `target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    /// Raw relation label as written in the annotation.
    pub label: String,
    /// Arguing component (`Arg1`).
    pub source: ComponentId,
    /// Argued-about component (`Arg2`).
    pub target: ComponentId,
}

impl Relation {
    /// Create a new relation.
    pub fn new(
        label: impl Into<String>,
        source: impl Into<ComponentId>,
        target: impl Into<ComponentId>,
    ) -> Self {
        Self {
            label: label.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Create a `Supports` relation.
    pub fn supports(source: impl Into<ComponentId>, target: impl Into<ComponentId>) -> Self {
        Self::new("supports", source, target)
    }

    /// Create an `Attacks` relation.
    pub fn attacks(source: impl Into<ComponentId>, target: impl Into<ComponentId>) -> Self {
        Self::new("attacks", source, target)
    }

    /// Classified kind of this relation.
    pub fn kind(&self) -> RelationKind {
        RelationKind::from_label(&self.label)
    }
}
