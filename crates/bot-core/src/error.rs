//! Error types for backend operations.

use thiserror::Error;

/// Errors that can occur while talking to an AI completion backend.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The backend is misconfigured (missing key, bad URL, etc.).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered but the response was unusable.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The backend is temporarily unavailable.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,
}
