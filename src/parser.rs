//! Parser for brat standoff annotation files (`.ann`).
//!
//! ## Line Formats
//!
//! ```text
//! T1<TAB>MajorClaim 503 575<TAB>we should attach more importance to cooperation
//! R1<TAB>supports Arg1:T4 Arg2:T3
//! ```
//!
//! Component lines start with `T`, relation lines with `R`. Every other line
//! (attributes, notes) is ignored.
//!
//! ## Error Policy
//!
//! Parsing never fails. A malformed line is skipped and counted in
//! [`ParsedAnnotation::skipped_lines`]; the rest of the document is still parsed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex_lite::Regex;

use crate::types::{Component, ComponentId, Relation};

/// Relation body pattern, anchored at the start of the field after the id.
const RELATION_PATTERN: &str = r"^(\w+)\s+Arg1:(T\d+)\s+Arg2:(T\d+)";

fn relation_regex() -> &'static Regex {
    static RELATION_RE: OnceLock<Regex> = OnceLock::new();
    RELATION_RE.get_or_init(|| {
        Regex::new(RELATION_PATTERN).expect("relation pattern is a valid regex")
    })
}

/// Components and relations of one annotation document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedAnnotation {
    /// Components by id. A repeated id keeps the last definition.
    pub components: BTreeMap<ComponentId, Component>,
    /// Relations in file order.
    pub relations: Vec<Relation>,
    /// Number of `T`/`R` lines that could not be parsed.
    pub skipped_lines: usize,
}

impl ParsedAnnotation {
    /// Build from already-parsed parts.
    pub fn from_parts(components: Vec<Component>, relations: Vec<Relation>) -> Self {
        Self {
            components: components.into_iter().map(|c| (c.id.clone(), c)).collect(),
            relations,
            skipped_lines: 0,
        }
    }

    /// True when no component and no relation was parsed.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty() && self.relations.is_empty()
    }
}

/// Parse the text of one annotation document.
pub fn parse_annotation(content: &str) -> ParsedAnnotation {
    let mut parsed = ParsedAnnotation::default();

    for (line_no, raw) in split_lines(content).enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('T') {
            match parse_component_line(line) {
                Some(component) => {
                    parsed.components.insert(component.id.clone(), component);
                }
                None => {
                    tracing::debug!(line = line_no + 1, "Skipping malformed component line");
                    parsed.skipped_lines += 1;
                }
            }
        } else if line.starts_with('R') {
            match parse_relation_line(line) {
                Some(relation) => parsed.relations.push(relation),
                None => {
                    tracing::debug!(line = line_no + 1, "Skipping malformed relation line");
                    parsed.skipped_lines += 1;
                }
            }
        }
    }

    parsed
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

/// `<id>\t<label> <start> <end>\t<text>`
fn parse_component_line(line: &str) -> Option<Component> {
    let (id, rest) = line.split_once('\t')?;
    let (label_span, text) = rest.split_once('\t')?;
    let label = label_span.split_whitespace().next()?;
    if id.is_empty() {
        return None;
    }
    Some(Component::new(id, label, text))
}

/// `<id>\t<type> Arg1:<source> Arg2:<target>`
fn parse_relation_line(line: &str) -> Option<Relation> {
    let (_, rest) = line.split_once('\t')?;
    let caps = relation_regex().captures(rest)?;
    Some(Relation::new(&caps[1], &caps[2], &caps[3]))
}
