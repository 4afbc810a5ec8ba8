use thiserror::Error;

/// Errors emitted by the preference stores.
#[derive(Debug, Error)]
pub(crate) enum StoreError {
    /// Filesystem operation failed.
    #[error("preferences IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("preferences JSON failed")]
    Json(#[from] serde_json::Error),
    /// Another writer panicked while holding the preferences lock.
    #[error("preferences lock poisoned")]
    Poisoned,
}
