//! Dispatch of remote writes, inline or on a detached thread.

use std::sync::Arc;

use learney_core::config::WriteMode;
use learney_core::traits::IProgressRemote;
use learney_core::{ProgressKind, ProgressMap};
use learney_observability::events;

/// Sends full mappings to the remote. Failures are logged, never returned.
#[derive(Clone)]
pub struct RemoteWriter {
    remote: Arc<dyn IProgressRemote>,
    mode: WriteMode,
}

impl std::fmt::Debug for RemoteWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteWriter").field("mode", &self.mode).finish_non_exhaustive()
    }
}

impl RemoteWriter {
    pub fn new(remote: Arc<dyn IProgressRemote>, mode: WriteMode) -> Self {
        Self { remote, mode }
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    pub fn remote(&self) -> &Arc<dyn IProgressRemote> {
        &self.remote
    }

    /// Write `map` for `kind`. In background mode this returns immediately.
    pub fn write(&self, kind: ProgressKind, map: ProgressMap) {
        match self.mode {
            WriteMode::Inline => push_logged(self.remote.as_ref(), kind, &map),
            WriteMode::Background => {
                let remote = Arc::clone(&self.remote);
                let spawned = std::thread::Builder::new()
                    .name(format!("learney-push-{kind}"))
                    .spawn(move || push_logged(remote.as_ref(), kind, &map));
                if let Err(e) = spawned {
                    events::persistence_failed(kind, "remote", &e);
                }
            }
        }
    }
}

fn push_logged(remote: &dyn IProgressRemote, kind: ProgressKind, map: &ProgressMap) {
    match remote.push(kind, map) {
        Ok(()) => tracing::debug!(kind = %kind, entries = map.len(), "pushed progress to remote"),
        Err(e) => events::persistence_failed(kind, "remote", &e),
    }
}
