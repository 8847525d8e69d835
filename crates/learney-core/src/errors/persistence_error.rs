/// Errors from the local cache or the remote progress API.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("network error: {reason}")]
    NetworkError { reason: String },

    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("storage error: {message}")]
    StorageError { message: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("remote persistence is disabled: {reason}")]
    RemoteDisabled { reason: String },
}
