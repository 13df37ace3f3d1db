//! Mistral API completion backend for the Marhaba chat bot.
//!
//! This crate implements [`bot_core::ChatBackend`] against the Mistral
//! chat-completions HTTP API. It holds no conversation state of its own:
//! the pipeline assembles the full message list (system instruction plus
//! bounded history) and passes it in per call.
//!
//! # Example
//!
//! ```no_run
//! use bot_core::{ChatBackend, ChatMessage};
//! use mistral_brain::{MistralBrain, MistralConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bot_core::BrainError> {
//!     let config = MistralConfig::builder().api_key("sk-...").build();
//!     let brain = MistralBrain::new(config)?;
//!
//!     let reply = brain
//!         .complete(vec![
//!             ChatMessage::system("You are concise."),
//!             ChatMessage::user("What is Rust?"),
//!         ])
//!         .await?;
//!     println!("{reply}");
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use api_types::{
    ApiError, ChatCompletionRequest, ChatCompletionResponse, Choice, ResponseMessage, Usage,
};
pub use brain::MistralBrain;
pub use config::{MistralConfig, MistralConfigBuilder};
