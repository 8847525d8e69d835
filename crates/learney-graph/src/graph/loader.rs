//! Map document → validated concept graph.

use learney_core::errors::{GraphError, LearneyResult};
use learney_core::MapDocument;

use super::dag_enforcement::{describe_cycle, find_cycles};
use super::stable_graph::IndexedGraph;

/// Validate a map document and build the indexed graph from it.
///
/// Rejects empty maps, duplicate node ids, edges naming unknown nodes, and
/// prerequisite cycles. Repeated edges are collapsed.
pub fn build(document: &MapDocument) -> LearneyResult<IndexedGraph> {
    if document.nodes.is_empty() {
        return Err(GraphError::EmptyMap.into());
    }

    let mut graph = IndexedGraph::new();
    for node in &document.nodes {
        if graph.insert_node(node.clone()).is_none() {
            return Err(GraphError::DuplicateNode {
                id: node.id.to_string(),
            }
            .into());
        }
    }

    let mut duplicates = 0usize;
    for edge in &document.edges {
        let dangling = |missing: &learney_core::NodeId| GraphError::DanglingEdge {
            source_id: edge.source.to_string(),
            target_id: edge.target.to_string(),
            missing: missing.to_string(),
        };
        let source = graph.get_node(&edge.source).ok_or_else(|| dangling(&edge.source))?;
        let target = graph.get_node(&edge.target).ok_or_else(|| dangling(&edge.target))?;
        if !graph.connect(source, target) {
            duplicates += 1;
        }
    }
    if duplicates > 0 {
        tracing::debug!(duplicates, "collapsed repeated prerequisite edges");
    }

    if let Some(cycle) = find_cycles(&graph).first() {
        return Err(GraphError::CycleDetected {
            path: describe_cycle(&graph, cycle),
        }
        .into());
    }

    Ok(graph)
}
