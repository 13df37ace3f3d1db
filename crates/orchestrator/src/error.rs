//! Error types for pipeline operations.

use database::DatabaseError;
use thiserror::Error;

/// Errors that escape the pipeline.
///
/// AI-call failures never appear here: they are absorbed inside the
/// pipeline and replaced with a localized apology. What remains is fatal
/// storage trouble and transport-level send failures.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Storage failed. Fatal: nothing is retried or substituted.
    #[error("storage error: {0}")]
    Storage(#[from] DatabaseError),

    /// The transport could not deliver a message.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// The transport could not edit an already-sent message.
    ///
    /// The pipeline recovers from this during delivery by resending all
    /// chunks; it only escapes when an edit is the whole operation.
    #[error("edit failed: {0}")]
    EditFailed(String),
}
