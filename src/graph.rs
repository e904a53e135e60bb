//! Argument graph with forward and backward adjacency indices.
//!
//! Edges point from the arguing component to the component it argues about:
//! `R1 supports Arg1:T3 Arg2:T2` is the edge `T3 -> T2`. The depth
//! computation therefore walks **incoming** support edges from a claim back
//! towards its premises.

use std::collections::{BTreeMap, BTreeSet};

use crate::parser::ParsedAnnotation;
use crate::types::{Component, ComponentId, Relation, RelationKind};

/// One entry in an adjacency list: the relation kind and the other endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// Kind of the connecting relation.
    pub kind: RelationKind,
    /// Endpoint on the far side of the relation.
    pub node: ComponentId,
}

/// Adjacency index: node id to neighbors, in relation input order.
pub type AdjacencyIndex = BTreeMap<ComponentId, Vec<Neighbor>>;

/// Build `(out_edges, in_edges)` from a relation list.
///
/// `out_edges[source]` gets `(kind, target)` and `in_edges[target]` gets
/// `(kind, source)`. Endpoints need not be known components.
pub fn build_graph(relations: &[Relation]) -> (AdjacencyIndex, AdjacencyIndex) {
    let mut out_edges = AdjacencyIndex::new();
    let mut in_edges = AdjacencyIndex::new();

    for relation in relations {
        let kind = relation.kind();
        out_edges
            .entry(relation.source.clone())
            .or_default()
            .push(Neighbor { kind, node: relation.target.clone() });
        in_edges
            .entry(relation.target.clone())
            .or_default()
            .push(Neighbor { kind, node: relation.source.clone() });
    }

    (out_edges, in_edges)
}

/// Components, relations and adjacency indices of one document.
#[derive(Debug, Clone, Default)]
pub struct ArgumentGraph {
    components: BTreeMap<ComponentId, Component>,
    relations: Vec<Relation>,
    out_edges: AdjacencyIndex,
    in_edges: AdjacencyIndex,
}

impl ArgumentGraph {
    /// Build a graph from parsed components and relations.
    pub fn new(components: BTreeMap<ComponentId, Component>, relations: Vec<Relation>) -> Self {
        let (out_edges, in_edges) = build_graph(&relations);
        let graph = Self {
            components,
            relations,
            out_edges,
            in_edges,
        };

        let dangling = graph.dangling_relations().count();
        if dangling > 0 {
            tracing::debug!(dangling, "Relations reference unknown components");
        }

        graph
    }

    /// All components, ordered by id.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Look up a component.
    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.get(id)
    }

    /// All relations in input order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Outgoing neighbors of a node.
    pub fn outgoing(&self, id: &ComponentId) -> &[Neighbor] {
        self.out_edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming neighbors of a node.
    pub fn incoming(&self, id: &ComponentId) -> &[Neighbor] {
        self.in_edges.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Components that directly support `id`, one entry per support edge.
    pub fn supporters<'a>(&'a self, id: &ComponentId) -> impl Iterator<Item = &'a ComponentId> + 'a {
        self.incoming(id)
            .iter()
            .filter(|n| n.kind.is_support())
            .map(|n| &n.node)
    }

    /// Relations whose source or target is not a known component.
    pub fn dangling_relations(&self) -> impl Iterator<Item = &Relation> {
        self.relations.iter().filter(|r| {
            !self.components.contains_key(&r.source) || !self.components.contains_key(&r.target)
        })
    }

    /// Number of components.
    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Number of relations.
    pub fn num_relations(&self) -> usize {
        self.relations.len()
    }

    /// Length of the longest acyclic support chain ending at `root`.
    ///
    /// A node without supporters has depth 1. A node already on the current
    /// path contributes 0, so support cycles terminate instead of recursing
    /// forever. The visiting set starts empty for every call.
    pub fn support_depth(&self, root: &ComponentId) -> u32 {
        let mut visiting = BTreeSet::new();
        self.support_depth_inner(root, &mut visiting)
    }

    fn support_depth_inner<'a>(
        &'a self,
        node: &'a ComponentId,
        visiting: &mut BTreeSet<&'a ComponentId>,
    ) -> u32 {
        if !visiting.insert(node) {
            tracing::trace!(node = %node, "Support cycle detected");
            return 0;
        }

        let deepest_parent = self
            .supporters(node)
            .map(|parent| self.support_depth_inner(parent, visiting))
            .max()
            .unwrap_or(0);

        visiting.remove(node);
        1 + deepest_parent
    }
}

impl From<ParsedAnnotation> for ArgumentGraph {
    fn from(parsed: ParsedAnnotation) -> Self {
        Self::new(parsed.components, parsed.relations)
    }
}
