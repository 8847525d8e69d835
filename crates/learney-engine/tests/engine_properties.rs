//! Property tests for the engine invariants over random DAGs and random
//! action sequences.

use proptest::prelude::*;

use learney_core::traits::IConceptGraph;
use learney_core::{NodeId, ProgressKind, ProgressMap};
use learney_engine::{EngineContext, StateEngine};
use learney_graph::ConceptGraph;
use test_fixtures::RecordingPersistence;

const NODES: usize = 12;

#[derive(Debug, Clone)]
enum Action {
    Learn(usize),
    Goal(usize),
}

fn pair_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..NODES, 0..NODES), 0..NODES * 2)
}

fn action_strategy() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(
        prop_oneof![(0..NODES).prop_map(Action::Learn), (0..NODES).prop_map(Action::Goal)],
        0..24,
    )
}

fn node(i: usize) -> NodeId {
    NodeId::from(format!("n{i}"))
}

fn graph(pairs: &[(usize, usize)]) -> ConceptGraph {
    ConceptGraph::from_document(&test_fixtures::dag_from_pairs(NODES, pairs)).unwrap()
}

fn run(engine: &mut StateEngine, ctx: &EngineContext<'_>, actions: &[Action]) {
    for action in actions {
        match action {
            Action::Learn(i) => engine.toggle_learned(ctx, &node(*i)),
            Action::Goal(i) => engine.toggle_goal(ctx, &node(*i)),
        };
    }
}

proptest! {
    #[test]
    fn learning_marks_every_prerequisite(pairs in pair_strategy(), actions in action_strategy(), target in 0..NODES) {
        let graph = graph(&pairs);
        let sink = RecordingPersistence::new();
        let ctx = EngineContext::new(&graph, &sink);
        let mut engine = StateEngine::new();
        run(&mut engine, &ctx, &actions);

        let id = node(target);
        prop_assume!(!engine.learned().contains(&id));
        engine.toggle_learned(&ctx, &id);
        for pred in graph.predecessors(&id, true) {
            prop_assert!(engine.learned().contains(&pred));
        }
    }

    #[test]
    fn unlearning_keeps_prerequisites(pairs in pair_strategy(), actions in action_strategy(), target in 0..NODES) {
        let graph = graph(&pairs);
        let sink = RecordingPersistence::new();
        let ctx = EngineContext::new(&graph, &sink);
        let mut engine = StateEngine::new();
        run(&mut engine, &ctx, &actions);

        let id = node(target);
        if !engine.learned().contains(&id) {
            engine.toggle_learned(&ctx, &id);
        }
        let before = engine.learned().clone();
        engine.toggle_learned(&ctx, &id);

        let mut expected = before;
        expected.remove(&id);
        prop_assert_eq!(engine.learned(), &expected);
    }

    #[test]
    fn goals_and_path_stay_disjoint_and_complete(pairs in pair_strategy(), actions in action_strategy()) {
        let graph = graph(&pairs);
        let sink = RecordingPersistence::new();
        let ctx = EngineContext::new(&graph, &sink);
        let mut engine = StateEngine::new();

        for action in &actions {
            run(&mut engine, &ctx, std::slice::from_ref(action));
            prop_assert!(engine.goals().is_disjoint(engine.path()));
            for goal in engine.goals() {
                for pred in graph.predecessors(goal, true) {
                    prop_assert!(engine.goals().contains(&pred) || engine.path().contains(&pred));
                }
            }
            for id in engine.path() {
                prop_assert!(engine.goals().iter().any(|g| graph.predecessors(g, true).contains(id)));
            }
        }
    }

    #[test]
    fn edges_are_learned_exactly_when_both_ends_are(pairs in pair_strategy(), actions in action_strategy()) {
        let graph = graph(&pairs);
        let sink = RecordingPersistence::new();
        let ctx = EngineContext::new(&graph, &sink);
        let mut engine = StateEngine::new();
        run(&mut engine, &ctx, &actions);

        for edge in graph.edges() {
            let both = engine.learned().contains(&edge.source) && engine.learned().contains(&edge.target);
            prop_assert_eq!(engine.edge_learned(&edge), both);
        }
    }

    #[test]
    fn initialisation_is_idempotent_and_prunes(
        pairs in pair_strategy(),
        learned in prop::collection::btree_map(0..NODES + 4, any::<bool>(), 0..8),
        goals in prop::collection::btree_set(0..NODES + 4, 0..4),
    ) {
        let graph = graph(&pairs);
        let sink = RecordingPersistence::new();
        let ctx = EngineContext::new(&graph, &sink);

        let learned: ProgressMap = learned.into_iter().map(|(i, v)| (node(i), v)).collect();
        let goals = ProgressMap::from_ids(goals.into_iter().map(node));
        let mut engine = StateEngine::from_progress(&learned, &goals);
        engine.initialise_graph_state(&ctx);
        let first = engine.snapshot();
        let first_progress = engine.learned_progress();
        engine.initialise_graph_state(&ctx);

        prop_assert_eq!(engine.snapshot(), first.clone());
        prop_assert_eq!(engine.learned_progress(), first_progress.clone());
        for (id, value) in learned.iter() {
            if !value && graph.contains(id) {
                prop_assert!(!engine.learned().contains(id));
                prop_assert_eq!(first_progress.get(id), Some(false));
            }
        }
        for id in first.learned.iter().chain(&first.goals).chain(&first.path) {
            prop_assert!(graph.contains(id));
        }
    }

    #[test]
    fn reset_empties_everything(pairs in pair_strategy(), actions in action_strategy()) {
        let graph = graph(&pairs);
        let sink = RecordingPersistence::new();
        let ctx = EngineContext::new(&graph, &sink);
        let mut engine = StateEngine::new();
        run(&mut engine, &ctx, &actions);

        engine.reset_progress(&ctx);
        prop_assert!(engine.snapshot().is_empty());
        prop_assert_eq!(sink.last(ProgressKind::Learned), Some(ProgressMap::new()));
        prop_assert_eq!(sink.last(ProgressKind::Goal), Some(ProgressMap::new()));
    }
}
