//! Argument component types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an annotated component, unique within one document (e.g. `T12`).
///
/// Implements `Ord` so component maps iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Create a new component id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ComponentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Argumentative role of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Thesis of the whole essay. Any label containing "major".
    MajorClaim,
    /// Claim supporting or attacking the major claim.
    Claim,
    /// Premise backing a claim or another premise.
    Premise,
    /// Label outside the closed set; counted nowhere.
    Other,
}

impl ComponentKind {
    /// Classify a raw annotation label (case-insensitive).
    ///
    /// "major" anywhere in the label wins over the exact matches, so
    /// `MajorClaim` never counts as a plain claim.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("major") {
            Self::MajorClaim
        } else if lower == "claim" {
            Self::Claim
        } else if lower == "premise" {
            Self::Premise
        } else {
            Self::Other
        }
    }

    /// Whether this kind anchors a support-chain depth computation.
    pub fn is_root(&self) -> bool {
        matches!(self, Self::MajorClaim | Self::Claim)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MajorClaim => write!(f, "major_claim"),
            Self::Claim => write!(f, "claim"),
            Self::Premise => write!(f, "premise"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// A single annotated argumentative unit.
///
/// The text span is carried for traceability only; no metric reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Component id.
    pub id: ComponentId,
    /// Raw label as written in the annotation (e.g. `MajorClaim`).
    pub label: String,
    /// Annotated text span.
    pub text: String,
}

impl Component {
    /// Create a new component.
    pub fn new(id: impl Into<ComponentId>, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            text: text.into(),
        }
    }

    /// Classified kind of this component.
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::from_label(&self.label)
    }
}
