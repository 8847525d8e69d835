use serde::{Deserialize, Serialize};

use super::defaults;

/// How remote writes are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Detached fire-and-forget write; never blocks the caller.
    #[default]
    Background,
    /// Synchronous write on the caller's thread. Failures are still swallowed.
    Inline,
}

/// Remote progress API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Base URL of the progress API. `None` keeps all progress local.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    pub write_mode: WriteMode,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: defaults::DEFAULT_REMOTE_TIMEOUT_SECS,
            write_mode: WriteMode::default(),
        }
    }
}
