pub mod defaults;
mod observability_config;
mod progress_config;
mod remote_config;
mod session_config;
mod storage_config;

pub use observability_config::ObservabilityConfig;
pub use progress_config::{MergeStrategy, ProgressConfig};
pub use remote_config::{RemoteConfig, WriteMode};
pub use session_config::SessionConfig;
pub use storage_config::{StorageBackend, StorageConfig};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LearneyResult};

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LearneyConfig {
    pub session: SessionConfig,
    pub remote: RemoteConfig,
    pub storage: StorageConfig,
    pub progress: ProgressConfig,
    pub observability: ObservabilityConfig,
}

impl LearneyConfig {
    /// Parse and validate a TOML document. Missing sections and fields take
    /// their defaults.
    pub fn from_toml(toml_str: &str) -> LearneyResult<Self> {
        let config: LearneyConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject combinations that cannot work.
    pub fn validate(&self) -> LearneyResult<()> {
        if self.remote.timeout_secs == 0 {
            return Err(invalid("remote.timeout_secs", "must be greater than zero"));
        }
        if let Some(url) = &self.remote.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(invalid("remote.base_url", "must be an http(s) URL"));
            }
        }
        if self.storage.backend == StorageBackend::Sqlite && self.storage.db_path.trim().is_empty() {
            return Err(invalid("storage.db_path", "required for the sqlite backend"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> crate::errors::LearneyError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}
