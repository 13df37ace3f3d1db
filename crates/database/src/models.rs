//! Row types for the persisted schema.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user's stored preferences.
///
/// `language` is nullable: a row created by an auto-detect toggle has no
/// language yet, and readers fall back to `"en"`.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserPrefs {
    /// Opaque numeric user identifier.
    pub user_id: i64,
    /// Stored language code from the closed set, if one was ever chosen.
    pub language: Option<String>,
    /// Whether per-message language detection is enabled.
    pub auto_detect: bool,
}

/// One logged conversation turn.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The user this turn belongs to.
    pub user_id: i64,
    /// `"user"` or `"bot"`, enforced by the table's CHECK constraint.
    pub role: String,
    /// The message text, unbounded at write time.
    pub message: String,
}
