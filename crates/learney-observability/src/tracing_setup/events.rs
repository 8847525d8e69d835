//! Structured log events for key engine and persistence operations.
//!
//! Each function emits a `tracing` event with structured fields.

use learney_core::{NodeId, ProgressKind};

/// Log a learned toggle.
pub fn learned_toggled(node_id: &NodeId, learned: bool, cascaded: usize) {
    tracing::info!(
        event = "learned_toggled",
        node_id = %node_id,
        learned = learned,
        cascaded = cascaded,
        "learned state toggled"
    );
}

/// Log a goal toggle.
pub fn goal_toggled(node_id: &NodeId, goal: bool, path_len: usize) {
    tracing::info!(
        event = "goal_toggled",
        node_id = %node_id,
        goal = goal,
        path_len = path_len,
        "goal state toggled"
    );
}

/// Log a full progress reset.
pub fn progress_reset(goals_cleared: usize, learned_cleared: usize) {
    tracing::info!(
        event = "progress_reset",
        goals_cleared = goals_cleared,
        learned_cleared = learned_cleared,
        "progress reset"
    );
}

/// Log an operation that referenced a node absent from the graph.
pub fn unknown_node(node_id: &NodeId, operation: &str) {
    tracing::warn!(
        event = "unknown_node",
        node_id = %node_id,
        operation = %operation,
        "ignoring operation on unknown node"
    );
}

/// Log a persisted id dropped because the current map no longer has it.
pub fn stale_reference_pruned(node_id: &NodeId, kind: ProgressKind) {
    tracing::debug!(
        event = "stale_reference_pruned",
        node_id = %node_id,
        kind = %kind,
        "pruned stale progress entry"
    );
}

/// Log a persistence failure that was swallowed.
pub fn persistence_failed(kind: ProgressKind, target: &str, error: &dyn std::fmt::Display) {
    tracing::warn!(
        event = "persistence_failed",
        kind = %kind,
        target = %target,
        error = %error,
        "progress persistence failed"
    );
}

/// Log where a mapping was loaded from at startup.
pub fn progress_loaded(kind: ProgressKind, source: &str, entries: usize) {
    tracing::info!(
        event = "progress_loaded",
        kind = %kind,
        source = %source,
        entries = entries,
        "progress loaded"
    );
}
