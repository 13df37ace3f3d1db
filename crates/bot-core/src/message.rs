//! Role-tagged message types for history entries and completion payloads.

use serde::{Deserialize, Serialize};

/// Role of a logged conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A message sent by the end user.
    User,
    /// A message delivered by the bot (auto-reply, AI reply, or apology).
    Bot,
}

impl Role {
    /// Storage tag, matching the history table's CHECK constraint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }

    /// Parse a storage tag back into a role.
    pub fn from_str(tag: &str) -> Option<Self> {
        match tag {
            "user" => Some(Self::User),
            "bot" => Some(Self::Bot),
            _ => None,
        }
    }
}

/// A chat message for the completion payload.
///
/// Roles follow the chat-completions convention: `system`, `user`, or
/// `assistant`. History entries tagged [`Role::Bot`] are re-tagged as
/// `assistant` when the context is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}
