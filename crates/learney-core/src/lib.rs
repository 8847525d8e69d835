//! # learney-core
//!
//! Foundation crate for the knowledge-map learning state engine.
//! Defines ids, map document models, progress mappings, errors, config,
//! constants, and the traits the other crates plug into.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ids;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LearneyConfig;
pub use errors::{LearneyError, LearneyResult};
pub use ids::{EdgeId, NodeId};
pub use models::{MapDocument, MapEdge, MapNode, NodeType, ProgressKind, ProgressMap, UserIdentity};
