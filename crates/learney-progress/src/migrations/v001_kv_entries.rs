//! v001: the key-value table holding progress mappings and legacy flags.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS kv_entries (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
";
