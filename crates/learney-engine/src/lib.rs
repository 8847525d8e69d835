//! # learney-engine
//!
//! Tracks which concepts a learner knows, which they have set as goals, and
//! which lie on the path to those goals, keeping the three sets consistent
//! as the learner toggles state.

pub mod command;
pub mod context;
pub mod engine;
pub mod notifier;
pub mod session;

pub use command::Command;
pub use context::EngineContext;
pub use engine::{EngineSnapshot, NodeStatus, StateEngine};
pub use notifier::{ChangeNotifier, ChangeSet, EdgeChange, NodeChange, SubscriptionId};
pub use session::LearningSession;
