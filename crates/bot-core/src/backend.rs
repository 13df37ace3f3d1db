//! The ChatBackend trait definition.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::message::ChatMessage;

/// A trait for AI completion backends.
///
/// Implementations take an ordered, role-tagged message list (system
/// instruction first, then history, then the current question) and return a
/// single text reply. This trait is object-safe and can be used with
/// `Box<dyn ChatBackend>`.
///
/// Failures are expected and recoverable: the pipeline substitutes a
/// localized apology for any error, so implementations should report what
/// went wrong rather than paper over it.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Request a completion for the assembled context.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, BrainError>;

    /// Get a human-readable name for this backend implementation.
    fn name(&self) -> &str;

    /// Check if the backend is ready to serve completions.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
