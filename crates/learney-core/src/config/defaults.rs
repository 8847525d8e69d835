// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "learney_progress.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Remote ---
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

// --- Progress ---
pub const DEFAULT_LEGACY_CLEANUP: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
pub const LOG_FILTER_ENV: &str = "LEARNEY_LOG";
