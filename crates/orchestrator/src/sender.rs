//! Transport trait and implementations.

use async_trait::async_trait;

use crate::error::OrchestratorError;

/// Opaque identifier for a delivered message, used for later edits.
pub type MessageId = i64;

/// Trait for delivering text to a user.
///
/// Abstracted to support different transports (Telegram, tests, etc.).
/// The pipeline needs exactly three primitives: send a new message, edit
/// an already-sent one, and send a message carrying inline choice buttons.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a new text message and return its identifier.
    async fn send_message(
        &self,
        user_id: i64,
        text: &str,
    ) -> Result<MessageId, OrchestratorError>;

    /// Replace the text of an already-sent message.
    ///
    /// Implementations should fail (rather than silently no-op) when the
    /// message is gone or editing is unsupported; the pipeline falls back
    /// to fresh sends on failure.
    async fn edit_message(
        &self,
        user_id: i64,
        message_id: MessageId,
        text: &str,
    ) -> Result<(), OrchestratorError>;

    /// Send a message with inline choice buttons.
    ///
    /// Each button is a `(label, callback_payload)` pair; the payload comes
    /// back verbatim through [`Pipeline::handle_callback`]. Default
    /// implementation drops the buttons and sends plain text.
    ///
    /// [`Pipeline::handle_callback`]: crate::Pipeline::handle_callback
    async fn send_with_buttons(
        &self,
        user_id: i64,
        text: &str,
        buttons: &[(String, String)],
    ) -> Result<MessageId, OrchestratorError> {
        let _ = buttons;
        self.send_message(user_id, text).await
    }
}

/// A no-op transport for testing that discards all messages.
#[derive(Debug, Clone, Default)]
pub struct NoOpTransport;

#[async_trait]
impl Transport for NoOpTransport {
    async fn send_message(
        &self,
        _user_id: i64,
        _text: &str,
    ) -> Result<MessageId, OrchestratorError> {
        Ok(0)
    }

    async fn edit_message(
        &self,
        _user_id: i64,
        _message_id: MessageId,
        _text: &str,
    ) -> Result<(), OrchestratorError> {
        Ok(())
    }
}

/// A logging transport for debugging that logs all operations.
#[derive(Debug, Clone, Default)]
pub struct LoggingTransport;

#[async_trait]
impl Transport for LoggingTransport {
    async fn send_message(
        &self,
        user_id: i64,
        text: &str,
    ) -> Result<MessageId, OrchestratorError> {
        tracing::info!("Sending to {}: {}", user_id, text);
        Ok(0)
    }

    async fn edit_message(
        &self,
        user_id: i64,
        message_id: MessageId,
        text: &str,
    ) -> Result<(), OrchestratorError> {
        tracing::info!("Editing message {} for {}: {}", message_id, user_id, text);
        Ok(())
    }
}
