//! The learned/goal/path state engine.
//!
//! Learning a concept marks all of its prerequisites learned as well;
//! unlearning touches only the concept itself. Setting a goal puts every
//! prerequisite that is not itself a goal on the path; unsetting one rebuilds
//! the path from the remaining goals. Every mutation completes before it
//! returns and flushes the mapping it changed.

mod propagation;
mod status;

pub use status::{EngineSnapshot, NodeStatus};

use std::collections::BTreeSet;

use learney_core::traits::IConceptGraph;
use learney_core::{EdgeId, NodeId, ProgressKind, ProgressMap};
use learney_observability::events;

use crate::context::EngineContext;
use crate::notifier::{ChangeNotifier, ChangeSet, EdgeChange, NodeChange, SubscriptionId};

#[derive(Debug, Default)]
pub struct StateEngine {
    learned: BTreeSet<NodeId>,
    /// Explicitly unlearned nodes, persisted as `false`.
    unlearned: BTreeSet<NodeId>,
    goals: BTreeSet<NodeId>,
    path: BTreeSet<NodeId>,
    learned_edges: BTreeSet<EdgeId>,
    notifier: ChangeNotifier,
}

impl StateEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the engine from persisted mappings. Nothing is derived until
    /// [`StateEngine::initialise_graph_state`] runs.
    pub fn from_progress(learned: &ProgressMap, goals: &ProgressMap) -> Self {
        let mut engine = Self::new();
        for (id, value) in learned.iter() {
            if ProgressKind::Learned.is_marked(value) {
                engine.learned.insert(id.clone());
            } else {
                engine.unlearned.insert(id.clone());
            }
        }
        engine.goals = goals.marked_ids(ProgressKind::Goal).cloned().collect();
        engine
    }

    // --- Mutations ---

    /// Learn `id` and all its prerequisites, or unlearn `id` alone.
    pub fn toggle_learned(&mut self, ctx: &EngineContext<'_>, id: &NodeId) -> ChangeSet {
        if !ctx.graph.contains(id) {
            events::unknown_node(id, "toggle_learned");
            return ChangeSet::default();
        }
        let before = self.snapshot();
        let edges_before = self.learned_edges.clone();

        let mut affected_edges = ctx.graph.connected_edges(id);
        let learned = if self.learned.contains(id) {
            self.learned.remove(id);
            self.unlearned.insert(id.clone());
            false
        } else {
            let closure = propagation::learned_closure(ctx.graph, id);
            for node in &closure {
                self.unlearned.remove(node);
                if !self.learned.contains(node) {
                    affected_edges.extend(ctx.graph.connected_edges(node));
                }
            }
            self.learned.extend(closure);
            true
        };
        self.reclassify_edges(&affected_edges);

        ctx.persistence.save(ProgressKind::Learned, &self.learned_progress());
        let changes = self.finish(&before, &edges_before);
        events::learned_toggled(id, learned, changes.nodes.len());
        changes
    }

    /// Set `id` as a goal, or unset it and rebuild the path.
    pub fn toggle_goal(&mut self, ctx: &EngineContext<'_>, id: &NodeId) -> ChangeSet {
        if !ctx.graph.contains(id) {
            events::unknown_node(id, "toggle_goal");
            return ChangeSet::default();
        }
        let before = self.snapshot();
        let edges_before = self.learned_edges.clone();

        let goal = if self.goals.remove(id) {
            self.path = propagation::rebuild_path(ctx.graph, &self.goals);
            false
        } else {
            self.goals.insert(id.clone());
            self.path.remove(id);
            let extra = propagation::path_for(ctx.graph, id, &self.goals);
            self.path.extend(extra);
            true
        };

        ctx.persistence.save(ProgressKind::Goal, &self.goal_progress());
        let changes = self.finish(&before, &edges_before);
        events::goal_toggled(id, goal, self.path.len());
        changes
    }

    /// Derive path and edge state from the seeded sets, dropping ids the
    /// graph does not contain. Running it twice changes nothing.
    ///
    /// Learned nodes cascade to their prerequisites except those explicitly
    /// unlearned.
    pub fn initialise_graph_state(&mut self, ctx: &EngineContext<'_>) -> ChangeSet {
        let before = self.snapshot();
        let edges_before = self.learned_edges.clone();

        prune_stale(ctx.graph, &mut self.learned, ProgressKind::Learned);
        prune_stale(ctx.graph, &mut self.unlearned, ProgressKind::Learned);
        prune_stale(ctx.graph, &mut self.goals, ProgressKind::Goal);

        let roots: Vec<NodeId> = self.learned.iter().cloned().collect();
        for root in &roots {
            let closure = propagation::learned_closure(ctx.graph, root);
            self.learned
                .extend(closure.into_iter().filter(|node| !self.unlearned.contains(node)));
        }

        let mut incident = BTreeSet::new();
        for node in &self.learned {
            incident.extend(ctx.graph.connected_edges(node));
        }
        let (learned_edges, _) = propagation::classify_edges(&incident, &self.learned);
        self.learned_edges = learned_edges.into_iter().collect();

        self.path = propagation::rebuild_path(ctx.graph, &self.goals);

        tracing::info!(
            learned = self.learned.len(),
            goals = self.goals.len(),
            path = self.path.len(),
            "graph state initialised"
        );
        self.finish(&before, &edges_before)
    }

    /// Unset every goal, unlearn every node, and persist empty mappings.
    pub fn reset_progress(&mut self, ctx: &EngineContext<'_>) -> ChangeSet {
        let before = self.snapshot();
        let edges_before = self.learned_edges.clone();
        let (goals_cleared, learned_cleared) = (self.goals.len(), self.learned.len());

        self.goals.clear();
        self.path.clear();
        self.learned.clear();
        self.unlearned.clear();
        self.learned_edges.clear();

        ctx.persistence.save(ProgressKind::Learned, &ProgressMap::new());
        ctx.persistence.save(ProgressKind::Goal, &ProgressMap::new());
        events::progress_reset(goals_cleared, learned_cleared);
        self.finish(&before, &edges_before)
    }

    // --- Queries ---

    /// Status of a node, or `None` if the graph does not contain it.
    pub fn status(&self, graph: &dyn IConceptGraph, id: &NodeId) -> Option<NodeStatus> {
        graph.contains(id).then(|| self.status_of(id))
    }

    pub fn edge_learned(&self, edge: &EdgeId) -> bool {
        self.learned_edges.contains(edge)
    }

    pub fn learned(&self) -> &BTreeSet<NodeId> {
        &self.learned
    }

    pub fn goals(&self) -> &BTreeSet<NodeId> {
        &self.goals
    }

    pub fn path(&self) -> &BTreeSet<NodeId> {
        &self.path
    }

    pub fn learned_edges(&self) -> &BTreeSet<EdgeId> {
        &self.learned_edges
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            learned: self.learned.clone(),
            goals: self.goals.clone(),
            path: self.path.clone(),
        }
    }

    /// Concepts the learner can study now: goal or path concepts that are not
    /// learned and whose direct prerequisites all are.
    pub fn next_concepts(&self, graph: &dyn IConceptGraph) -> Vec<NodeId> {
        self.goals
            .union(&self.path)
            .filter(|id| !self.learned.contains(*id))
            .filter(|id| graph.get_node(id).is_ok_and(|node| node.is_concept()))
            .filter(|id| {
                graph
                    .predecessors(id, false)
                    .iter()
                    .all(|pred| self.learned.contains(pred))
            })
            .cloned()
            .collect()
    }

    /// The learned mapping as persisted: `true` for learned, `false` for
    /// explicitly unlearned.
    pub fn learned_progress(&self) -> ProgressMap {
        self.learned
            .iter()
            .map(|id| (id.clone(), true))
            .chain(self.unlearned.iter().map(|id| (id.clone(), false)))
            .collect()
    }

    pub fn goal_progress(&self) -> ProgressMap {
        ProgressMap::from_ids(self.goals.iter().cloned())
    }

    // --- Change notification ---

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeSet) + Send + 'static,
    {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // --- Internals ---

    fn status_of(&self, id: &NodeId) -> NodeStatus {
        NodeStatus {
            learned: self.learned.contains(id),
            goal: self.goals.contains(id),
            path: self.path.contains(id),
        }
    }

    fn reclassify_edges(&mut self, edges: &BTreeSet<EdgeId>) {
        let (learned, unlearned) = propagation::classify_edges(edges, &self.learned);
        for edge in unlearned {
            self.learned_edges.remove(&edge);
        }
        self.learned_edges.extend(learned);
    }

    /// Diff against the pre-mutation state and deliver the result.
    fn finish(&self, before: &EngineSnapshot, edges_before: &BTreeSet<EdgeId>) -> ChangeSet {
        let after = self.snapshot();
        let nodes = before
            .changed_nodes(&after)
            .into_iter()
            .map(|id| NodeChange {
                status: after.status(&id),
                id,
            })
            .collect();
        let edges = edges_before
            .symmetric_difference(&self.learned_edges)
            .map(|edge| EdgeChange {
                edge: edge.clone(),
                learned: self.learned_edges.contains(edge),
            })
            .collect();

        let changes = ChangeSet { nodes, edges };
        self.notifier.notify(&changes);
        changes
    }
}

fn prune_stale(graph: &dyn IConceptGraph, ids: &mut BTreeSet<NodeId>, kind: ProgressKind) {
    ids.retain(|id| {
        let known = graph.contains(id);
        if !known {
            events::stale_reference_pruned(id, kind);
        }
        known
    });
}
