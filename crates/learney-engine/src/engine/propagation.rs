//! Set computations behind the engine operations. Each takes the graph and
//! the current sets and returns what changed, leaving mutation to the caller.

use std::collections::BTreeSet;

use learney_core::traits::IConceptGraph;
use learney_core::{EdgeId, NodeId};

/// `id` and all of its transitive prerequisites.
pub fn learned_closure(graph: &dyn IConceptGraph, id: &NodeId) -> BTreeSet<NodeId> {
    let mut closure = graph.predecessors(id, true);
    closure.insert(id.clone());
    closure
}

/// Transitive prerequisites of `goal` that are not goals themselves.
pub fn path_for(graph: &dyn IConceptGraph, goal: &NodeId, goals: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    graph
        .predecessors(goal, true)
        .into_iter()
        .filter(|id| !goals.contains(id))
        .collect()
}

/// The path set derived from scratch: every goal's path, unioned.
pub fn rebuild_path(graph: &dyn IConceptGraph, goals: &BTreeSet<NodeId>) -> BTreeSet<NodeId> {
    goals
        .iter()
        .flat_map(|goal| path_for(graph, goal, goals))
        .collect()
}

/// Split `edges` into those whose endpoints are both learned and the rest.
pub fn classify_edges<'e>(
    edges: impl IntoIterator<Item = &'e EdgeId>,
    learned: &BTreeSet<NodeId>,
) -> (Vec<EdgeId>, Vec<EdgeId>) {
    edges
        .into_iter()
        .cloned()
        .partition(|edge| learned.contains(&edge.source) && learned.contains(&edge.target))
}
