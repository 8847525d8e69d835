//! Schema migrations using PRAGMA user_version.

pub mod v001_kv_entries;

use rusqlite::Connection;

use learney_core::errors::{LearneyResult, PersistenceError};

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> LearneyResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[(v001_kv_entries::MIGRATION_SQL, 1)];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql).map_err(|e| PersistenceError::MigrationFailed {
                version: *version,
                reason: e.to_string(),
            })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| PersistenceError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> LearneyResult<u32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| PersistenceError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;
    Ok(version)
}
