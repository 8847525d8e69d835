//! Prerequisite traversal over the indexed graph.
//!
//! Backward traversal follows incoming edges ("what must be known first"),
//! forward traversal follows outgoing edges ("what does this unlock").

use std::collections::{BTreeSet, HashSet, VecDeque};

use learney_core::{EdgeId, NodeId};
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use crate::graph::stable_graph::IndexedGraph;

/// Nodes reachable from `start` in `direction`, excluding `start`.
/// Breadth-first; each node is visited once.
pub fn reachable(graph: &IndexedGraph, start: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::from([start]);
    let mut found = Vec::new();

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.graph.neighbors_directed(current, direction) {
            if visited.insert(neighbor) {
                found.push(neighbor);
                queue.push_back(neighbor);
            }
        }
    }

    found
}

/// Direct neighbours of `start` in `direction`.
pub fn adjacent(graph: &IndexedGraph, start: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
    graph.graph.neighbors_directed(start, direction).collect()
}

/// Ids of the nodes linked to `id` in `direction`, directly or transitively.
pub fn linked_ids(
    graph: &IndexedGraph,
    id: &NodeId,
    direction: Direction,
    transitive: bool,
) -> BTreeSet<NodeId> {
    let Some(start) = graph.get_node(id) else {
        return BTreeSet::new();
    };
    let indices = if transitive {
        reachable(graph, start, direction)
    } else {
        adjacent(graph, start, direction)
    };
    indices
        .into_iter()
        .filter_map(|idx| graph.id_of(idx).cloned())
        .collect()
}

/// Edges entering or leaving a node.
pub fn incident_edges(graph: &IndexedGraph, id: &NodeId) -> BTreeSet<EdgeId> {
    let Some(idx) = graph.get_node(id) else {
        return BTreeSet::new();
    };
    [Direction::Incoming, Direction::Outgoing]
        .into_iter()
        .flat_map(|dir| graph.graph.edges_directed(idx, dir))
        .map(|edge| edge.weight().id.clone())
        .collect()
}

/// Every edge of a node's prerequisite subgraph: the incoming edges of the
/// node and of each of its transitive prerequisites.
pub fn prerequisite_edges(graph: &IndexedGraph, id: &NodeId) -> BTreeSet<EdgeId> {
    let Some(start) = graph.get_node(id) else {
        return BTreeSet::new();
    };
    std::iter::once(start)
        .chain(reachable(graph, start, Direction::Incoming))
        .flat_map(|idx| graph.graph.edges_directed(idx, Direction::Incoming))
        .map(|edge| edge.weight().id.clone())
        .collect()
}
