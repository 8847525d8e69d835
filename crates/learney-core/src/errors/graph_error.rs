/// Errors raised while building a concept graph from a map document.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("map document contains no nodes")]
    EmptyMap,

    #[error("duplicate node id {id}")]
    DuplicateNode { id: String },

    #[error("edge {source_id} -> {target_id} references unknown node {missing}")]
    DanglingEdge {
        source_id: String,
        target_id: String,
        missing: String,
    },

    #[error("cycle detected in prerequisite graph: {path}")]
    CycleDetected { path: String },

    #[error("invalid map document: {reason}")]
    InvalidDocument { reason: String },
}
