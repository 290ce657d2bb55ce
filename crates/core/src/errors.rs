//! Error types shared across the armory crates.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error taxonomy for reconciliation and import runs.
#[derive(Debug, Error)]
pub enum Error {
    /// No stored user under the requested id.
    #[error("User '{0}' not found")]
    UserNotFound(String),

    /// The remote profile service rejected the stored access token.
    #[error("Remote profile service rejected the access token")]
    Unauthorized,

    /// The remote profile service failed for a reason unrelated to auth.
    #[error("Remote profile service unavailable: {0}")]
    Upstream(String),

    /// A required read or batch write against the record store failed.
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Persistence failures, produced by the storage crate.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// True when the failure means the user must re-authenticate upstream.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}
