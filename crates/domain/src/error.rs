//! Common error types used across the workspace.
//!
//! Each port boundary has its own typed error. Adapters convert their native
//! errors into these so the application layer never sees a framework type.

/// Failure reading the remote character listing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The request never produced a response (DNS, TLS, CORS, offline, …).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body could not be decoded into a character page.
    #[error("malformed response body: {0}")]
    Decode(String),
}

/// Failure reading or writing the persisted key-value store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No store is reachable (e.g. storage disabled by the browser).
    #[error("storage unavailable")]
    Unavailable,

    /// The store refused the write.
    #[error("storage write rejected: {0}")]
    Write(String),
}
