use serde::{Deserialize, Serialize};

use super::defaults;

/// How local and remote copies of a mapping are reconciled at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// The local cache wins whenever it holds a copy.
    #[default]
    LocalWins,
    /// The remote copy wins whenever it holds one.
    RemoteWins,
    /// A node is marked if either copy marks it.
    Union,
}

/// Progress loading behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressConfig {
    pub merge_strategy: MergeStrategy,
    /// Run the one-time local-progress cleanup for returning visitors.
    pub legacy_cleanup: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            merge_strategy: MergeStrategy::default(),
            legacy_cleanup: defaults::DEFAULT_LEGACY_CLEANUP,
        }
    }
}
