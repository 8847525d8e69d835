//! The concept graph snapshot and its `IConceptGraph` implementation.

pub mod dag_enforcement;
pub mod loader;
pub mod stable_graph;

use std::collections::BTreeSet;

use learney_core::errors::{LearneyError, LearneyResult};
use learney_core::traits::IConceptGraph;
use learney_core::{EdgeId, MapDocument, MapNode, NodeId};
use petgraph::Direction;

use crate::traversal;
use stable_graph::IndexedGraph;

/// An immutable, validated concept dependency graph, loaded once per session.
#[derive(Debug)]
pub struct ConceptGraph {
    inner: IndexedGraph,
}

impl ConceptGraph {
    /// Validate and load a map document.
    pub fn from_document(document: &MapDocument) -> LearneyResult<Self> {
        let inner = loader::build(document)?;
        tracing::info!(
            nodes = inner.node_count(),
            edges = inner.edge_count(),
            "concept graph loaded"
        );
        Ok(Self { inner })
    }

    /// Parse, validate, and load a map document from JSON.
    pub fn from_json(json: &str) -> LearneyResult<Self> {
        Self::from_document(&MapDocument::from_json(json)?)
    }

    /// Read access to the underlying indexed graph.
    pub fn indexed(&self) -> &IndexedGraph {
        &self.inner
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// All edges, ordered.
    pub fn edges(&self) -> BTreeSet<EdgeId> {
        self.inner
            .graph
            .edge_indices()
            .filter_map(|e| self.inner.graph.edge_weight(e))
            .map(|weight| weight.id.clone())
            .collect()
    }

    pub fn contains_edge(&self, edge: &EdgeId) -> bool {
        match (self.inner.get_node(&edge.source), self.inner.get_node(&edge.target)) {
            (Some(s), Some(t)) => self.inner.graph.contains_edge(s, t),
            _ => false,
        }
    }

    /// Concept nodes, ordered by id.
    pub fn concepts(&self) -> Vec<&MapNode> {
        let mut concepts: Vec<&MapNode> = self
            .inner
            .graph
            .node_indices()
            .filter_map(|i| self.inner.graph.node_weight(i))
            .filter(|n| n.is_concept())
            .collect();
        concepts.sort_by(|a, b| a.id.cmp(&b.id));
        concepts
    }

    /// Nodes whose `parent` is the given field, ordered by id.
    pub fn children(&self, field: &NodeId) -> Vec<&MapNode> {
        let mut children: Vec<&MapNode> = self
            .inner
            .graph
            .node_indices()
            .filter_map(|i| self.inner.graph.node_weight(i))
            .filter(|n| n.parent.as_ref() == Some(field))
            .collect();
        children.sort_by(|a, b| a.id.cmp(&b.id));
        children
    }
}

impl IConceptGraph for ConceptGraph {
    fn get_node(&self, id: &NodeId) -> LearneyResult<&MapNode> {
        self.inner
            .get_node(id)
            .and_then(|idx| self.inner.graph.node_weight(idx))
            .ok_or_else(|| LearneyError::NodeNotFound { id: id.to_string() })
    }

    fn contains(&self, id: &NodeId) -> bool {
        self.inner.node_index.contains_key(id)
    }

    fn predecessors(&self, id: &NodeId, transitive: bool) -> BTreeSet<NodeId> {
        traversal::linked_ids(&self.inner, id, Direction::Incoming, transitive)
    }

    fn successors(&self, id: &NodeId, transitive: bool) -> BTreeSet<NodeId> {
        traversal::linked_ids(&self.inner, id, Direction::Outgoing, transitive)
    }

    fn connected_edges(&self, id: &NodeId) -> BTreeSet<EdgeId> {
        traversal::incident_edges(&self.inner, id)
    }

    fn predecessor_edges(&self, id: &NodeId) -> BTreeSet<EdgeId> {
        traversal::prerequisite_edges(&self.inner, id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.inner.node_index.keys().cloned().collect();
        ids.sort();
        ids
    }
}
