//! `LearningSession`: one learner on one map, wired end to end.

use learney_core::errors::LearneyResult;
use learney_core::traits::IConceptGraph;
use learney_core::{LearneyConfig, NodeId, ProgressKind};
use learney_graph::ConceptGraph;
use learney_progress::ProgressStore;

use crate::command::Command;
use crate::context::EngineContext;
use crate::engine::{NodeStatus, StateEngine};
use crate::notifier::{ChangeSet, SubscriptionId};

#[derive(Debug)]
pub struct LearningSession {
    graph: ConceptGraph,
    store: ProgressStore,
    engine: StateEngine,
}

impl LearningSession {
    /// Load progress from `store` and derive the initial state.
    ///
    /// With `legacy_cleanup`, stale locally cached progress is dropped first.
    pub fn open(graph: ConceptGraph, store: ProgressStore, legacy_cleanup: bool) -> Self {
        if legacy_cleanup {
            if let Err(e) = store.apply_legacy_cleanup() {
                tracing::warn!(error = %e, "legacy progress cleanup failed");
            }
        }

        let learned = store.load(ProgressKind::Learned);
        let goals = store.load(ProgressKind::Goal);
        let mut engine = StateEngine::from_progress(&learned, &goals);
        engine.initialise_graph_state(&EngineContext::new(&graph, &store));

        Self { graph, store, engine }
    }

    /// Build the store from `config` and open a session on `graph`.
    pub fn from_config(config: &LearneyConfig, graph: ConceptGraph) -> LearneyResult<Self> {
        let store = ProgressStore::from_config(config)?;
        Ok(Self::open(graph, store, config.progress.legacy_cleanup))
    }

    /// Apply a user action. Listeners are notified before this returns.
    pub fn dispatch(&mut self, command: Command) -> ChangeSet {
        let ctx = EngineContext::new(&self.graph, &self.store);
        match command {
            Command::ToggleLearned(id) => self.engine.toggle_learned(&ctx, &id),
            Command::ToggleGoal(id) => self.engine.toggle_goal(&ctx, &id),
            Command::ResetProgress => self.engine.reset_progress(&ctx),
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeSet) + Send + 'static,
    {
        self.engine.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.engine.unsubscribe(id)
    }

    pub fn status(&self, id: &NodeId) -> Option<NodeStatus> {
        self.engine.status(&self.graph, id)
    }

    pub fn next_concepts(&self) -> Vec<NodeId> {
        self.engine.next_concepts(&self.graph)
    }

    pub fn graph(&self) -> &dyn IConceptGraph {
        &self.graph
    }

    pub fn concept_graph(&self) -> &ConceptGraph {
        &self.graph
    }

    pub fn store(&self) -> &ProgressStore {
        &self.store
    }

    pub fn engine(&self) -> &StateEngine {
        &self.engine
    }
}
