//! Stance labels assigning documents to topic groups.

use serde::{Deserialize, Serialize};

/// One of the two admissible comparison groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StanceGroup {
    /// Essay argues for the prompt.
    Pro,
    /// Essay argues against the prompt.
    Con,
}

impl StanceGroup {
    /// Parse a stance from string (trimmed, case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pro" => Some(Self::Pro),
            "con" => Some(Self::Con),
            _ => None,
        }
    }
}

impl std::fmt::Display for StanceGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pro => write!(f, "pro"),
            Self::Con => write!(f, "con"),
        }
    }
}

/// Raw stance row as loaded from an external label sheet.
///
/// Fields are kept as strings; the comparison engine filters rows with an
/// empty id, empty topic, or unknown stance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceLabel {
    /// Document identifier matching [`crate::MetricRecord::essay_id`].
    #[serde(default)]
    pub essay_id: String,
    /// Topic or prompt shared by the compared documents.
    #[serde(default)]
    pub topic: String,
    /// Stance string, expected `pro` or `con`.
    #[serde(default)]
    pub stance: String,
}

impl StanceLabel {
    /// Create a new stance row.
    pub fn new(
        essay_id: impl Into<String>,
        topic: impl Into<String>,
        stance: impl Into<String>,
    ) -> Self {
        Self {
            essay_id: essay_id.into(),
            topic: topic.into(),
            stance: stance.into(),
        }
    }

    /// Validated `(essay_id, topic, group)` triple, or `None` if the row is unusable.
    pub fn resolve(&self) -> Option<(&str, &str, StanceGroup)> {
        let essay_id = self.essay_id.trim();
        let topic = self.topic.trim();
        if essay_id.is_empty() || topic.is_empty() {
            return None;
        }
        let group = StanceGroup::from_str(&self.stance)?;
        Some((essay_id, topic, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stance_parsing() {
        assert_eq!(StanceGroup::from_str("pro"), Some(StanceGroup::Pro));
        assert_eq!(StanceGroup::from_str(" CON "), Some(StanceGroup::Con));
        assert_eq!(StanceGroup::from_str("neutral"), None);
        assert_eq!(StanceGroup::from_str(""), None);
    }

    #[test]
    fn test_resolve_filters_incomplete_rows() {
        assert_eq!(
            StanceLabel::new(" e1.ann ", " Topic ", "Pro").resolve(),
            Some(("e1.ann", "Topic", StanceGroup::Pro))
        );
        assert!(StanceLabel::new("", "Topic", "pro").resolve().is_none());
        assert!(StanceLabel::new("e1.ann", "  ", "pro").resolve().is_none());
        assert!(StanceLabel::new("e1.ann", "Topic", "unsure").resolve().is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_empty() {
        let row: StanceLabel = serde_json::from_str(r#"{"essay_id": "e1.ann"}"#).unwrap();
        assert_eq!(row.topic, "");
        assert!(row.resolve().is_none());
    }
}
