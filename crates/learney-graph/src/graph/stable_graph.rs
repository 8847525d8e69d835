//! petgraph::StableGraph wrapper with an id → index lookup.

use std::collections::HashMap;

use learney_core::{EdgeId, MapNode, NodeId};
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;

/// Weight on a prerequisite edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisiteEdge {
    pub id: EdgeId,
}

/// The underlying directed graph type. Edges run prerequisite → dependent.
pub type ConceptStableGraph = StableGraph<MapNode, PrerequisiteEdge, Directed>;

/// Wrapper providing indexed access to the concept graph.
#[derive(Debug, Default)]
pub struct IndexedGraph {
    pub graph: ConceptStableGraph,
    /// Map from node id → NodeIndex for O(1) lookup.
    pub node_index: HashMap<NodeId, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Returns `None` if the id is already present.
    pub fn insert_node(&mut self, node: MapNode) -> Option<NodeIndex> {
        if self.node_index.contains_key(&node.id) {
            return None;
        }
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(id, idx);
        Some(idx)
    }

    /// Connect two existing nodes. Parallel edges collapse into one.
    pub fn connect(&mut self, source: NodeIndex, target: NodeIndex) -> bool {
        if self.graph.find_edge(source, target).is_some() {
            return false;
        }
        let id = EdgeId::new(
            self.graph[source].id.clone(),
            self.graph[target].id.clone(),
        );
        self.graph.add_edge(source, target, PrerequisiteEdge { id });
        true
    }

    /// Look up a node index by id.
    pub fn get_node(&self, id: &NodeId) -> Option<NodeIndex> {
        self.node_index.get(id).copied()
    }

    /// Id of the node at `idx`.
    pub fn id_of(&self, idx: NodeIndex) -> Option<&NodeId> {
        self.graph.node_weight(idx).map(|n| &n.id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
