//! `ProgressStore`: the local cache plus the optional remote, behind the
//! load/save contract the engine relies on.

use std::path::Path;
use std::sync::Arc;

use learney_core::config::{LearneyConfig, MergeStrategy, StorageBackend, WriteMode};
use learney_core::errors::LearneyResult;
use learney_core::traits::{IKeyValueStore, IProgressPersistence, IProgressRemote};
use learney_core::{ProgressKind, ProgressMap, UserIdentity};
use learney_observability::events;

use crate::dispatch::RemoteWriter;
use crate::legacy::{self, LegacyOutcome};
use crate::local::{MemoryKvStore, SqliteKvStore};
use crate::reconcile::{reconcile, LoadSource, RemoteCopy};
use crate::transport::HttpProgressRemote;

/// Durable learned/goal mappings for one user and one map.
///
/// Loading never fails: any error degrades to the local copy, then to an
/// empty mapping. Saving writes the local cache first and the remote after,
/// logging rather than returning failures.
#[derive(Clone)]
pub struct ProgressStore {
    local: Arc<dyn IKeyValueStore>,
    writer: Option<RemoteWriter>,
    identity: UserIdentity,
    strategy: MergeStrategy,
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("identity", &self.identity)
            .field("strategy", &self.strategy)
            .field("remote", &self.writer)
            .finish_non_exhaustive()
    }
}

impl ProgressStore {
    /// A local-only store.
    pub fn new(local: Arc<dyn IKeyValueStore>, identity: UserIdentity) -> Self {
        Self {
            local,
            writer: None,
            identity,
            strategy: MergeStrategy::default(),
        }
    }

    /// Attach a remote. Anonymous sessions stay local-only and ignore it.
    pub fn with_remote(mut self, remote: Arc<dyn IProgressRemote>, mode: WriteMode) -> Self {
        if self.identity.is_anonymous() {
            tracing::debug!("anonymous session, remote progress disabled");
            return self;
        }
        self.writer = Some(RemoteWriter::new(remote, mode));
        self
    }

    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Build the local cache, and the HTTP remote when configured.
    pub fn from_config(config: &LearneyConfig) -> LearneyResult<Self> {
        let local: Arc<dyn IKeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryKvStore::new()),
            StorageBackend::Sqlite => Arc::new(SqliteKvStore::open(
                Path::new(&config.storage.db_path),
                config.storage.busy_timeout_ms,
            )?),
        };

        let mut store = Self::new(local, config.session.identity())
            .with_merge_strategy(config.progress.merge_strategy);

        if cfg!(feature = "remote") {
            if let Some(remote) = HttpProgressRemote::from_config(&config.remote, &config.session)? {
                store = store.with_remote(Arc::new(remote), config.remote.write_mode);
            }
        } else if config.remote.base_url.is_some() {
            tracing::warn!("remote.base_url is set but the remote feature is not enabled; progress stays local");
        }

        Ok(store)
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn has_remote(&self) -> bool {
        self.writer.is_some()
    }

    pub fn local(&self) -> &Arc<dyn IKeyValueStore> {
        &self.local
    }

    /// The best-known mapping for `kind`, reconciled with the remote when
    /// one is attached. The result is cached locally.
    pub fn load(&self, kind: ProgressKind) -> ProgressMap {
        let local = self.read_local(kind);
        let remote = match &self.writer {
            None => RemoteCopy::Unavailable,
            Some(writer) => match writer.remote().fetch(kind) {
                Ok(Some(map)) => RemoteCopy::Found(map),
                Ok(None) => RemoteCopy::Missing,
                Err(e) => {
                    events::persistence_failed(kind, "remote", &e);
                    RemoteCopy::Failed
                }
            },
        };

        let reconciled = reconcile(kind, local, remote, self.strategy);
        if matches!(reconciled.source, LoadSource::Remote | LoadSource::Merged) {
            self.write_local(kind, &reconciled.map);
        }
        if reconciled.push_to_remote {
            if let Some(writer) = &self.writer {
                writer.write(kind, reconciled.map.clone());
            }
        }

        events::progress_loaded(kind, reconciled.source.as_str(), reconciled.map.len());
        reconciled.map
    }

    /// Write `map` to the local cache, then to the remote if attached.
    pub fn save(&self, kind: ProgressKind, map: &ProgressMap) {
        self.write_local(kind, map);
        if let Some(writer) = &self.writer {
            writer.write(kind, map.clone());
        }
    }

    /// Remove both cached mappings. The remote is left alone.
    pub fn clear_local(&self) -> LearneyResult<()> {
        for kind in ProgressKind::ALL {
            self.local.remove(kind.storage_key())?;
        }
        Ok(())
    }

    pub fn apply_legacy_cleanup(&self) -> LearneyResult<LegacyOutcome> {
        legacy::apply_legacy_cleanup(self.local.as_ref(), &self.identity)
    }

    fn read_local(&self, kind: ProgressKind) -> Option<ProgressMap> {
        let raw = match self.local.get(kind.storage_key()) {
            Ok(raw) => raw?,
            Err(e) => {
                events::persistence_failed(kind, "local", &e);
                return None;
            }
        };
        match ProgressMap::from_json(&raw) {
            Ok(map) => Some(map),
            Err(e) => {
                events::persistence_failed(kind, "local", &e);
                None
            }
        }
    }

    fn write_local(&self, kind: ProgressKind, map: &ProgressMap) {
        let result = map
            .to_json()
            .and_then(|json| self.local.set(kind.storage_key(), &json));
        if let Err(e) = result {
            events::persistence_failed(kind, "local", &e);
        }
    }
}

impl IProgressPersistence for ProgressStore {
    fn save(&self, kind: ProgressKind, map: &ProgressMap) {
        ProgressStore::save(self, kind, map);
    }
}
