//! Blocking HTTP client for the remote progress API.
//!
//! One attempt per request, no retry: a failed write is logged by the
//! caller and the next toggle writes the full mapping again.

use std::time::Duration;

use uuid::Uuid;

use learney_core::config::defaults::DEFAULT_REMOTE_TIMEOUT_SECS;
use learney_core::config::{RemoteConfig, SessionConfig};
use learney_core::constants::API_PREFIX;
use learney_core::errors::{LearneyResult, PersistenceError};
use learney_core::traits::IProgressRemote;
use learney_core::{ProgressKind, ProgressMap};

#[cfg(feature = "remote")]
use super::protocol::{ProgressResponse, ProgressUpload};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL of the progress API, without the `/api/v0` prefix.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout: Duration::from_secs(DEFAULT_REMOTE_TIMEOUT_SECS),
        }
    }
}

impl HttpClientConfig {
    /// Build from the `[remote]` section. `None` when no base URL is set.
    pub fn from_remote_config(remote: &RemoteConfig) -> Option<Self> {
        remote.base_url.as_ref().map(|base_url| Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(remote.timeout_secs),
        })
    }
}

/// Convert a string into a PersistenceError::NetworkError.
#[cfg_attr(not(feature = "remote"), allow(dead_code))]
fn net_err(reason: String) -> learney_core::LearneyError {
    PersistenceError::NetworkError { reason }.into()
}

/// Progress remote for one signed-in user and one map.
#[derive(Debug)]
#[cfg_attr(not(feature = "remote"), allow(dead_code))]
pub struct HttpProgressRemote {
    config: HttpClientConfig,
    user_id: String,
    map_uuid: Uuid,
    session_id: Option<String>,
    #[cfg(feature = "remote")]
    client: reqwest::blocking::Client,
}

impl HttpProgressRemote {
    pub fn new(
        config: HttpClientConfig,
        user_id: impl Into<String>,
        map_uuid: Uuid,
        session_id: Option<String>,
    ) -> LearneyResult<Self> {
        #[cfg(feature = "remote")]
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(true)
            .build()
            .map_err(|e| net_err(e.to_string()))?;

        Ok(Self {
            config,
            user_id: user_id.into(),
            map_uuid,
            session_id,
            #[cfg(feature = "remote")]
            client,
        })
    }

    /// Build from config. `None` for anonymous sessions or without a base URL.
    pub fn from_config(remote: &RemoteConfig, session: &SessionConfig) -> LearneyResult<Option<Self>> {
        let identity = session.identity();
        let (Some(config), Some(user_id)) = (HttpClientConfig::from_remote_config(remote), identity.user_id())
        else {
            return Ok(None);
        };
        Self::new(config, user_id, session.map_uuid, session.session_id.clone()).map(Some)
    }

    /// Full endpoint URL for a kind.
    pub fn endpoint(&self, kind: ProgressKind) -> String {
        format!("{}{}/{}", self.config.base_url, API_PREFIX, kind.api_extension())
    }

    #[cfg(feature = "remote")]
    fn do_fetch(&self, kind: ProgressKind) -> LearneyResult<Option<ProgressMap>> {
        let map_uuid = self.map_uuid.to_string();
        let resp = self
            .client
            .get(self.endpoint(kind))
            .query(&[("user_id", self.user_id.as_str()), ("map_uuid", map_uuid.as_str())])
            .send()
            .map_err(|e| net_err(e.to_string()))?;

        match resp.status().as_u16() {
            200 => {
                let body: ProgressResponse = resp
                    .json()
                    .map_err(|e| net_err(format!("deserialization failed: {e}")))?;
                Ok(body.into_map(kind))
            }
            204 | 404 => Ok(None),
            status => Err(PersistenceError::UnexpectedStatus {
                status,
                body: resp.text().unwrap_or_default(),
            }
            .into()),
        }
    }

    #[cfg(feature = "remote")]
    fn do_push(&self, kind: ProgressKind, map: &ProgressMap) -> LearneyResult<()> {
        let upload = ProgressUpload::new(
            self.user_id.clone(),
            self.map_uuid,
            self.session_id.clone(),
            kind,
            map,
        );
        let resp = self
            .client
            .post(self.endpoint(kind))
            .json(&upload)
            .send()
            .map_err(|e| net_err(e.to_string()))?;

        match resp.status().as_u16() {
            200 | 201 => Ok(()),
            status => Err(PersistenceError::UnexpectedStatus {
                status,
                body: resp.text().unwrap_or_default(),
            }
            .into()),
        }
    }
}

impl IProgressRemote for HttpProgressRemote {
    fn fetch(&self, kind: ProgressKind) -> LearneyResult<Option<ProgressMap>> {
        #[cfg(feature = "remote")]
        {
            self.do_fetch(kind)
        }

        #[cfg(not(feature = "remote"))]
        {
            let _ = kind;
            Err(PersistenceError::RemoteDisabled {
                reason: "remote feature not enabled".into(),
            }
            .into())
        }
    }

    fn push(&self, kind: ProgressKind, map: &ProgressMap) -> LearneyResult<()> {
        #[cfg(feature = "remote")]
        {
            self.do_push(kind, map)
        }

        #[cfg(not(feature = "remote"))]
        {
            let _ = (kind, map);
            Err(PersistenceError::RemoteDisabled {
                reason: "remote feature not enabled".into(),
            }
            .into())
        }
    }
}
