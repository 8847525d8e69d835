//! User actions, as plain values a UI binding can construct and dispatch.

use serde::{Deserialize, Serialize};

use learney_core::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "node_id", rename_all = "snake_case")]
pub enum Command {
    ToggleLearned(NodeId),
    ToggleGoal(NodeId),
    ResetProgress,
}

impl Command {
    /// The node the command targets, if any.
    pub fn node_id(&self) -> Option<&NodeId> {
        match self {
            Command::ToggleLearned(id) | Command::ToggleGoal(id) => Some(id),
            Command::ResetProgress => None,
        }
    }
}
