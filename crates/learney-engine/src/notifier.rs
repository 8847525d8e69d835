//! Change notification: listeners receive the node and edge changes of every
//! mutation once it has completed.

use serde::Serialize;

use learney_core::{EdgeId, NodeId};

use crate::engine::NodeStatus;

/// New status of a node whose classification changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeChange {
    pub id: NodeId,
    pub status: NodeStatus,
}

/// New learned classification of an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeChange {
    pub edge: EdgeId,
    pub learned: bool,
}

/// Everything one mutation changed, ordered by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSet {
    pub nodes: Vec<NodeChange>,
    pub edges: Vec<EdgeChange>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// The change recorded for a node, if it changed.
    pub fn node(&self, id: &NodeId) -> Option<&NodeStatus> {
        self.nodes.iter().find(|c| &c.id == id).map(|c| &c.status)
    }

    pub fn edge(&self, edge: &EdgeId) -> Option<bool> {
        self.edges.iter().find(|c| &c.edge == edge).map(|c| c.learned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&ChangeSet) + Send>;

/// Callback registry. Empty change sets are not delivered.
#[derive(Default)]
pub struct ChangeNotifier {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ChangeSet) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        tracing::debug!(subscription = id.0, "change listener subscribed");
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "change listener unsubscribed");
        }
        removed
    }

    /// Deliver `changes` to every listener in subscription order.
    pub fn notify(&self, changes: &ChangeSet) {
        if changes.is_empty() {
            return;
        }
        for (_, listener) in &self.listeners {
            listener(changes);
        }
    }
}
