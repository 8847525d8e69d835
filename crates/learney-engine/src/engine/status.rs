use std::collections::BTreeSet;

use serde::Serialize;

use learney_core::NodeId;

/// A node's position on the two independent axes: learned or not, and
/// goal, path, or neither. `goal` and `path` are never both set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NodeStatus {
    pub learned: bool,
    pub goal: bool,
    pub path: bool,
}

/// Owned copy of the three node sets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EngineSnapshot {
    pub learned: BTreeSet<NodeId>,
    pub goals: BTreeSet<NodeId>,
    pub path: BTreeSet<NodeId>,
}

impl EngineSnapshot {
    pub fn status(&self, id: &NodeId) -> NodeStatus {
        NodeStatus {
            learned: self.learned.contains(id),
            goal: self.goals.contains(id),
            path: self.path.contains(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.learned.is_empty() && self.goals.is_empty() && self.path.is_empty()
    }

    /// Ids whose status differs between `self` and `other`, in order.
    pub fn changed_nodes(&self, other: &EngineSnapshot) -> BTreeSet<NodeId> {
        let mut changed = BTreeSet::new();
        for (a, b) in [
            (&self.learned, &other.learned),
            (&self.goals, &other.goals),
            (&self.path, &other.path),
        ] {
            changed.extend(a.symmetric_difference(b).cloned());
        }
        changed
    }
}
