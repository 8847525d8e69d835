//! Property tests over random DAGs.

use proptest::prelude::*;

use learney_core::errors::{GraphError, LearneyError};
use learney_core::traits::IConceptGraph;
use learney_core::MapEdge;
use learney_graph::graph::dag_enforcement;
use learney_graph::ConceptGraph;

fn pair_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..n, 0..n), 0..n * 2)
}

proptest! {
    #[test]
    fn generated_maps_load_without_cycles(pairs in pair_strategy(20)) {
        let graph = ConceptGraph::from_document(&test_fixtures::dag_from_pairs(20, &pairs)).unwrap();
        prop_assert!(dag_enforcement::find_cycles(graph.indexed()).is_empty());
    }

    #[test]
    fn predecessor_and_successor_are_mirrors(pairs in pair_strategy(15)) {
        let graph = ConceptGraph::from_document(&test_fixtures::dag_from_pairs(15, &pairs)).unwrap();
        for id in graph.node_ids() {
            for pred in graph.predecessors(&id, true) {
                prop_assert!(graph.successors(&pred, true).contains(&id));
            }
        }
    }

    #[test]
    fn transitive_predecessors_are_closed(pairs in pair_strategy(15)) {
        let graph = ConceptGraph::from_document(&test_fixtures::dag_from_pairs(15, &pairs)).unwrap();
        for id in graph.node_ids() {
            let all = graph.predecessors(&id, true);
            prop_assert!(!all.contains(&id));
            for pred in &all {
                for grand in graph.predecessors(pred, false) {
                    prop_assert!(all.contains(&grand));
                }
            }
        }
    }

    #[test]
    fn back_edges_are_rejected_as_cycles(pairs in pair_strategy(12)) {
        let doc = test_fixtures::dag_from_pairs(12, &pairs);
        let graph = ConceptGraph::from_document(&doc).unwrap();
        for id in graph.node_ids() {
            for pred in graph.predecessors(&id, true) {
                let mut cyclic = doc.clone();
                cyclic.edges.push(MapEdge::new(id.clone(), pred.clone()));
                match ConceptGraph::from_document(&cyclic) {
                    Err(LearneyError::GraphError(GraphError::CycleDetected { path })) => {
                        let steps: Vec<&str> = path.split(" -> ").collect();
                        prop_assert!(steps.len() >= 3);
                        prop_assert_eq!(steps.first(), steps.last());
                    }
                    other => prop_assert!(false, "expected cycle for {} -> {}, got {:?}", id, pred, other.map(|_| ())),
                }
            }
        }
    }
}
