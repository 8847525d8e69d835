//! In-process stand-ins for progress persistence and the remote progress API.

use std::collections::HashMap;
use std::sync::Mutex;

use learney_core::errors::{LearneyResult, PersistenceError};
use learney_core::traits::{IProgressPersistence, IProgressRemote};
use learney_core::{ProgressKind, ProgressMap};

/// A remote that keeps mappings in memory and records every push.
#[derive(Debug, Default)]
pub struct FakeRemote {
    stored: Mutex<HashMap<ProgressKind, ProgressMap>>,
    pushes: Mutex<Vec<(ProgressKind, ProgressMap)>>,
    fail_fetch: bool,
    fail_push: bool,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// A remote that already holds `map` for `kind`.
    pub fn with_stored(self, kind: ProgressKind, map: ProgressMap) -> Self {
        self.stored.lock().unwrap().insert(kind, map);
        self
    }

    /// Every fetch fails with a network error.
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }

    /// Every push fails with a network error.
    pub fn failing_push(mut self) -> Self {
        self.fail_push = true;
        self
    }

    /// Pushes received so far, in order.
    pub fn pushes(&self) -> Vec<(ProgressKind, ProgressMap)> {
        self.pushes.lock().unwrap().clone()
    }

    /// The mapping currently held for `kind`.
    pub fn stored(&self, kind: ProgressKind) -> Option<ProgressMap> {
        self.stored.lock().unwrap().get(&kind).cloned()
    }
}

impl IProgressRemote for FakeRemote {
    fn fetch(&self, kind: ProgressKind) -> LearneyResult<Option<ProgressMap>> {
        if self.fail_fetch {
            return Err(PersistenceError::NetworkError {
                reason: "connection refused".into(),
            }
            .into());
        }
        Ok(self.stored.lock().unwrap().get(&kind).cloned())
    }

    fn push(&self, kind: ProgressKind, map: &ProgressMap) -> LearneyResult<()> {
        self.pushes.lock().unwrap().push((kind, map.clone()));
        if self.fail_push {
            return Err(PersistenceError::NetworkError {
                reason: "connection reset".into(),
            }
            .into());
        }
        self.stored.lock().unwrap().insert(kind, map.clone());
        Ok(())
    }
}

/// Persistence sink that records every save.
#[derive(Debug, Default)]
pub struct RecordingPersistence {
    saves: Mutex<Vec<(ProgressKind, ProgressMap)>>,
}

impl RecordingPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent mapping saved for `kind`.
    pub fn last(&self, kind: ProgressKind) -> Option<ProgressMap> {
        self.saves
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(k, _)| *k == kind)
            .map(|(_, map)| map.clone())
    }

    pub fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

impl IProgressPersistence for RecordingPersistence {
    fn save(&self, kind: ProgressKind, map: &ProgressMap) {
        self.saves.lock().unwrap().push((kind, map.clone()));
    }
}
