//! Local key-value caches for progress mappings and legacy flags.

mod sqlite;

pub use sqlite::SqliteKvStore;

use std::collections::HashMap;
use std::sync::RwLock;

use learney_core::errors::{LearneyError, LearneyResult};
use learney_core::traits::IKeyValueStore;

/// Process-lifetime cache backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> LearneyError {
    LearneyError::ConcurrencyError(format!("memory store lock poisoned: {e}"))
}

impl IKeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> LearneyResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> LearneyResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> LearneyResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}
