mod config_error;
mod graph_error;
mod persistence_error;

pub use config_error::ConfigError;
pub use graph_error::GraphError;
pub use persistence_error::PersistenceError;

/// Top-level error type for the learning state engine.
#[derive(Debug, thiserror::Error)]
pub enum LearneyError {
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("stale reference to node {id} absent from the current map")]
    StaleReference { id: String },

    #[error("graph error: {0}")]
    GraphError(#[from] GraphError),

    #[error("persistence error: {0}")]
    PersistenceError(#[from] PersistenceError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

/// Convenience alias used across every crate in the workspace.
pub type LearneyResult<T> = Result<T, LearneyError>;

impl LearneyError {
    /// Whether the error belongs to one of the categories the engine recovers
    /// from by logging and carrying on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LearneyError::NodeNotFound { .. }
                | LearneyError::StaleReference { .. }
                | LearneyError::PersistenceError(_)
        )
    }
}
