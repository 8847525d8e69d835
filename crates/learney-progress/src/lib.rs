//! # learney-progress
//!
//! Progress persistence for the learning state engine: a local key-value
//! cache (in memory or SQLite), the remote progress API client, startup
//! reconciliation between the two, and the one-time legacy cleanup.

pub mod dispatch;
pub mod legacy;
pub mod local;
pub mod migrations;
pub mod reconcile;
pub mod store;
pub mod transport;

pub use dispatch::RemoteWriter;
pub use legacy::{apply_legacy_cleanup, LegacyOutcome};
pub use local::{MemoryKvStore, SqliteKvStore};
pub use reconcile::{reconcile, LoadSource, Reconciled, RemoteCopy};
pub use store::ProgressStore;
pub use transport::{HttpClientConfig, HttpProgressRemote};

use learney_core::errors::{LearneyError, PersistenceError};

/// Convert a string error into a LearneyError::PersistenceError::StorageError.
pub(crate) fn to_storage_err(msg: impl Into<String>) -> LearneyError {
    PersistenceError::StorageError {
        message: msg.into(),
    }
    .into()
}
