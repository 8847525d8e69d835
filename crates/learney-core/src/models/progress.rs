//! Persisted progress mappings (`{"<nodeId>": true|false}`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{GOAL_NODES_KEY, LEARNED_NODES_KEY};
use crate::errors::LearneyResult;
use crate::ids::NodeId;

/// The two persisted progress mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressKind {
    Learned,
    Goal,
}

impl ProgressKind {
    pub const ALL: [ProgressKind; 2] = [ProgressKind::Learned, ProgressKind::Goal];

    /// Key in the local key-value cache.
    pub fn storage_key(self) -> &'static str {
        match self {
            ProgressKind::Learned => LEARNED_NODES_KEY,
            ProgressKind::Goal => GOAL_NODES_KEY,
        }
    }

    /// Path segment of the remote endpoint.
    pub fn api_extension(self) -> &'static str {
        match self {
            ProgressKind::Learned => "learned",
            ProgressKind::Goal => "goals",
        }
    }

    /// Name of the mapping field in remote request/response bodies.
    pub fn payload_field(self) -> &'static str {
        match self {
            ProgressKind::Learned => "learned_concepts",
            ProgressKind::Goal => "goal_concepts",
        }
    }

    /// Whether an entry with this value marks the node. Learned mappings may
    /// carry `false` for explicitly unlearned nodes; goal mappings mark by
    /// presence alone.
    pub fn is_marked(self, value: bool) -> bool {
        match self {
            ProgressKind::Learned => value,
            ProgressKind::Goal => true,
        }
    }
}

impl std::fmt::Display for ProgressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ProgressKind::Learned => "learned",
            ProgressKind::Goal => "goal",
        })
    }
}

/// A node id → bool mapping, ordered by id so its JSON form is canonical.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap(BTreeMap<NodeId, bool>);

impl ProgressMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping marking every given id `true`.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<NodeId>,
    {
        Self(ids.into_iter().map(|id| (id.into(), true)).collect())
    }

    pub fn insert(&mut self, id: impl Into<NodeId>, value: bool) {
        self.0.insert(id.into(), value);
    }

    pub fn remove(&mut self, id: &NodeId) -> Option<bool> {
        self.0.remove(id)
    }

    pub fn get(&self, id: &NodeId) -> Option<bool> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, bool)> {
        self.0.iter().map(|(id, v)| (id, *v))
    }

    /// Ids that mark a node for the given kind.
    pub fn marked_ids(&self, kind: ProgressKind) -> impl Iterator<Item = &NodeId> {
        self.0
            .iter()
            .filter(move |(_, v)| kind.is_marked(**v))
            .map(|(id, _)| id)
    }

    /// Union of two mappings for the given kind: an id is marked if either
    /// side marks it. Unmarked entries survive only when neither side marks.
    pub fn union(&self, other: &ProgressMap, kind: ProgressKind) -> ProgressMap {
        let mut merged = self.clone();
        for (id, value) in other.iter() {
            let keep = merged.get(id).is_some_and(|v| kind.is_marked(v));
            if !keep {
                merged.insert(id.clone(), value);
            }
        }
        merged
    }

    /// Canonical JSON form.
    pub fn to_json(&self) -> LearneyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> LearneyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// blake3 hash over the ordered entries, used to tell diverged copies apart.
    pub fn content_hash(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (id, value) in &self.0 {
            hasher.update(id.as_str().as_bytes());
            hasher.update(&[0, u8::from(*value)]);
        }
        hasher.finalize().to_hex().to_string()
    }
}

impl FromIterator<(NodeId, bool)> for ProgressMap {
    fn from_iter<I: IntoIterator<Item = (NodeId, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
