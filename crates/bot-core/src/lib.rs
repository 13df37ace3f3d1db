//! Core trait and types for the Marhaba chat bot.
//!
//! This crate provides the shared vocabulary for the conversation pipeline:
//!
//! - [`Language`] - The closed language set (`ar`/`fr`/`en`) with uniform
//!   English fallback via [`Localized`] lookup tables
//! - [`ChatMessage`] / [`Role`] - Role-tagged message types for history
//!   entries and completion payloads
//! - [`ChatBackend`] - The trait that AI completion backends implement
//! - [`BrainError`] - Error types for backend operations
//! - [`lexicon`] - Localized UI strings and system prompts
//! - [`detect`] - Effective-language resolution
//!
//! # Example
//!
//! ```rust
//! use bot_core::{ChatBackend, ChatMessage, BrainError};
//! use async_trait::async_trait;
//!
//! struct CannedBackend;
//!
//! #[async_trait]
//! impl ChatBackend for CannedBackend {
//!     async fn complete(&self, _messages: Vec<ChatMessage>) -> Result<String, BrainError> {
//!         Ok("Hello!".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedBackend"
//!     }
//! }
//! ```

mod backend;
pub mod detect;
mod error;
mod lang;
pub mod lexicon;
mod message;

pub use backend::ChatBackend;
pub use error::BrainError;
pub use lang::{Language, Localized};
pub use message::{ChatMessage, Role};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
