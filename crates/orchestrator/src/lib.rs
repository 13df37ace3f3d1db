//! Conversation orchestrator for the Marhaba bot.
//!
//! Wires the storage layer, the auto-reply rules, and an AI backend into a
//! per-message pipeline behind a transport-agnostic delivery trait:
//!
//! - [`Pipeline`] - the end-to-end message/command/callback handlers
//! - [`Transport`] - the delivery seam (send, edit, buttons)
//! - [`auto_reply`] - ordered per-language canned-reply rules
//! - [`chunking`] - transport-safe splitting of long replies
//! - [`context`] - completion-payload assembly from logged history
//! - [`commands`] - slash-command and callback-payload parsing
//! - [`PreferenceStore`] - typed language/auto-detect preferences
//!
//! The pipeline is generic over [`ChatBackend`](bot_core::ChatBackend) and
//! [`Transport`], so production glue and tests compose the same way: build a
//! [`database::Database`], pick a backend, pick a transport, hand all three
//! to [`Pipeline::new`].

pub mod auto_reply;
pub mod chunking;
pub mod commands;
pub mod context;
mod error;
mod pipeline;
mod preferences;
mod sender;

pub use commands::Command;
pub use error::OrchestratorError;
pub use pipeline::{Pipeline, PipelineConfig};
pub use preferences::PreferenceStore;
pub use sender::{LoggingTransport, MessageId, NoOpTransport, Transport};
