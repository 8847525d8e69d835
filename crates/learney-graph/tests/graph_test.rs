//! Loading, validation, and traversal of concept graphs.

use std::collections::BTreeSet;

use learney_core::errors::{GraphError, LearneyError};
use learney_core::traits::IConceptGraph;
use learney_core::{EdgeId, MapDocument, MapEdge, MapNode, NodeId, NodeType};
use learney_graph::ConceptGraph;

fn ids(raw: &[&str]) -> BTreeSet<NodeId> {
    raw.iter().map(|s| NodeId::from(*s)).collect()
}

fn sample() -> ConceptGraph {
    ConceptGraph::from_document(&test_fixtures::load_map("ml_sample.json")).unwrap()
}

// =============================================================================
// Loading & validation
// =============================================================================

#[test]
fn loads_wrapped_fixture_map() {
    let graph = sample();
    assert_eq!(graph.node_count(), 10);
    assert_eq!(graph.edge_count(), 9);

    let node = graph.get_node(&"7".into()).unwrap();
    assert_eq!(node.name, "Neural Networks");
    assert_eq!(node.nodetype, NodeType::Concept);
    assert_eq!(node.parent, Some(NodeId::from("200")));
    assert_eq!(node.relative_importance, 1.5);
    assert_eq!(node.urls, vec!["https://example.org/nn".to_string()]);
}

#[test]
fn unknown_node_lookup_is_not_found() {
    let graph = sample();
    let err = graph.get_node(&"nope".into()).unwrap_err();
    assert!(matches!(err, LearneyError::NodeNotFound { ref id } if id == "nope"));
    assert!(!graph.contains(&"nope".into()));
}

#[test]
fn empty_map_is_rejected() {
    let err = ConceptGraph::from_document(&MapDocument::default()).unwrap_err();
    assert!(matches!(err, LearneyError::GraphError(GraphError::EmptyMap)));
}

#[test]
fn duplicate_node_is_rejected() {
    let doc = MapDocument::new(
        vec![MapNode::concept("1", "One"), MapNode::concept("1", "Again")],
        vec![],
    );
    let err = ConceptGraph::from_document(&doc).unwrap_err();
    assert!(matches!(
        err,
        LearneyError::GraphError(GraphError::DuplicateNode { ref id }) if id == "1"
    ));
}

#[test]
fn dangling_edge_is_rejected() {
    let err = ConceptGraph::from_json(&test_fixtures::fixture_string("dangling.json")).unwrap_err();
    assert!(matches!(
        err,
        LearneyError::GraphError(GraphError::DanglingEdge { ref missing, .. }) if missing == "99"
    ));
}

#[test]
fn cyclic_map_is_rejected() {
    let err = ConceptGraph::from_json(&test_fixtures::fixture_string("cyclic.json")).unwrap_err();
    match err {
        LearneyError::GraphError(GraphError::CycleDetected { path }) => {
            assert_eq!(path, "1 -> 2 -> 1");
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn cycle_path_follows_edge_direction() {
    let doc = MapDocument::new(
        vec![
            MapNode::concept("a", "Sets"),
            MapNode::concept("b", "Relations"),
            MapNode::concept("c", "Functions"),
        ],
        vec![
            MapEdge::new("a", "b"),
            MapEdge::new("b", "c"),
            MapEdge::new("c", "a"),
        ],
    );
    match ConceptGraph::from_document(&doc).unwrap_err() {
        LearneyError::GraphError(GraphError::CycleDetected { path }) => {
            assert_eq!(path, "a -> b -> c -> a");
        }
        other => panic!("expected cycle error, got {other:?}"),
    }
}

#[test]
fn self_loop_is_rejected() {
    let doc = MapDocument::new(
        vec![MapNode::concept("1", "Recursion")],
        vec![MapEdge::new("1", "1")],
    );
    assert!(ConceptGraph::from_document(&doc).is_err());
}

#[test]
fn repeated_edges_collapse() {
    let doc = MapDocument::new(
        vec![MapNode::concept("1", "A"), MapNode::concept("2", "B")],
        vec![MapEdge::new("1", "2"), MapEdge::new("1", "2")],
    );
    let graph = ConceptGraph::from_document(&doc).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.contains_edge(&EdgeId::new("1", "2")));
    assert!(!graph.contains_edge(&EdgeId::new("2", "1")));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = ConceptGraph::from_json("{\"nodes\": [").unwrap_err();
    assert!(matches!(err, LearneyError::SerializationError(_)));
}

// =============================================================================
// Traversal
// =============================================================================

#[test]
fn direct_predecessors() {
    let graph = sample();
    assert_eq!(graph.predecessors(&"6".into(), false), ids(&["3", "5"]));
    assert_eq!(graph.predecessors(&"1".into(), false), ids(&[]));
}

#[test]
fn transitive_predecessors_exclude_self() {
    let graph = sample();
    assert_eq!(graph.predecessors(&"5".into(), true), ids(&["1", "2", "4"]));
    assert_eq!(
        graph.predecessors(&"8".into(), true),
        ids(&["1", "2", "3", "4", "5", "6", "7"])
    );
}

#[test]
fn transitive_successors() {
    let graph = sample();
    assert_eq!(graph.successors(&"2".into(), true), ids(&["4", "5", "6", "7", "8"]));
    assert_eq!(graph.successors(&"2".into(), false), ids(&["4", "8"]));
}

#[test]
fn unknown_ids_traverse_to_nothing() {
    let graph = sample();
    assert!(graph.predecessors(&"zzz".into(), true).is_empty());
    assert!(graph.connected_edges(&"zzz".into()).is_empty());
    assert!(graph.predecessor_edges(&"zzz".into()).is_empty());
}

#[test]
fn connected_edges_cover_both_directions() {
    let graph = sample();
    let edges = graph.connected_edges(&"5".into());
    let expected: BTreeSet<EdgeId> = [
        EdgeId::new("1", "5"),
        EdgeId::new("4", "5"),
        EdgeId::new("5", "6"),
    ]
    .into_iter()
    .collect();
    assert_eq!(edges, expected);
}

#[test]
fn predecessor_edges_span_prerequisite_subgraph() {
    let graph = sample();
    let expected: BTreeSet<EdgeId> = [
        EdgeId::new("3", "6"),
        EdgeId::new("5", "6"),
        EdgeId::new("1", "5"),
        EdgeId::new("4", "5"),
        EdgeId::new("2", "4"),
    ]
    .into_iter()
    .collect();
    assert_eq!(graph.predecessor_edges(&"6".into()), expected);
}

#[test]
fn fields_group_their_concepts() {
    let graph = sample();
    let maths: Vec<&str> = graph
        .children(&"100".into())
        .into_iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(maths, vec!["1", "2", "3"]);
    assert_eq!(graph.concepts().len(), 8);
    assert_eq!(graph.node_ids().len(), 10);
    assert_eq!(graph.edges().len(), 9);
}
