//! SQLite-backed key-value cache. One connection behind a `Mutex`;
//! every access is serialized.

use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use learney_core::errors::{LearneyError, LearneyResult};
use learney_core::traits::IKeyValueStore;

use crate::migrations::run_migrations;
use crate::to_storage_err;

/// Apply journal and locking pragmas to a fresh connection.
fn apply_pragmas(conn: &Connection, busy_timeout_ms: u32) -> LearneyResult<()> {
    conn.execute_batch(&format!(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {busy_timeout_ms};
        "
    ))
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

#[derive(Debug)]
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
}

impl SqliteKvStore {
    /// Open (or create) the database at `path` and bring its schema up to date.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> LearneyResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::init(conn, busy_timeout_ms)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> LearneyResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::init(conn, learney_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS)
    }

    fn init(conn: Connection, busy_timeout_ms: u32) -> LearneyResult<Self> {
        apply_pragmas(&conn, busy_timeout_ms)?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> LearneyResult<T>
    where
        F: FnOnce(&Connection) -> LearneyResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| LearneyError::ConcurrencyError(format!("sqlite connection lock poisoned: {e}")))?;
        f(&guard)
    }

    /// When `key` was last written, if it exists.
    pub fn updated_at(&self, key: &str) -> LearneyResult<Option<DateTime<Utc>>> {
        let raw: Option<String> = self.with_conn(|conn| {
            conn.query_row(
                "SELECT updated_at FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| to_storage_err(e.to_string()))
        })?;

        raw.map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|e| to_storage_err(format!("bad updated_at for {key}: {e}")))
        })
        .transpose()
    }
}

impl IKeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> LearneyResult<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM kv_entries WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| to_storage_err(e.to_string()))
        })
    }

    fn set(&self, key: &str, value: &str) -> LearneyResult<()> {
        let now = Utc::now().to_rfc3339();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO kv_entries (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> LearneyResult<()> {
        self.with_conn(|conn| {
            conn.execute("DELETE FROM kv_entries WHERE key = ?1", params![key])
                .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(())
        })
    }
}
