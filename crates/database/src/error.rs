//! Database error types.

use thiserror::Error;

/// Errors that can occur during database operations.
///
/// These are fatal from the pipeline's point of view: no operation is
/// retried and nothing is substituted for a failed read or write.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
