use std::collections::BTreeSet;

use crate::errors::LearneyResult;
use crate::ids::{EdgeId, NodeId};
use crate::models::MapNode;

/// Read-only queries over an immutable concept dependency graph.
///
/// Edges point from prerequisite to dependent. Implementations must be
/// acyclic; every traversal below assumes it.
pub trait IConceptGraph: Send + Sync {
    /// Look up a node. Fails with `NodeNotFound` for unknown ids.
    fn get_node(&self, id: &NodeId) -> LearneyResult<&MapNode>;

    fn contains(&self, id: &NodeId) -> bool {
        self.get_node(id).is_ok()
    }

    /// Direct (`transitive = false`) or all prerequisites of a node,
    /// excluding the node itself. Empty for unknown ids.
    fn predecessors(&self, id: &NodeId, transitive: bool) -> BTreeSet<NodeId>;

    /// Direct or all dependents of a node, excluding the node itself.
    fn successors(&self, id: &NodeId, transitive: bool) -> BTreeSet<NodeId>;

    /// Edges incident to a node, in either direction.
    fn connected_edges(&self, id: &NodeId) -> BTreeSet<EdgeId>;

    /// Edges between a node's transitive prerequisites and the node itself,
    /// i.e. every edge of its prerequisite subgraph.
    fn predecessor_edges(&self, id: &NodeId) -> BTreeSet<EdgeId>;

    /// Every node id in the graph.
    fn node_ids(&self) -> Vec<NodeId>;
}
