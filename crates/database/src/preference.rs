//! Per-user language preference storage.
//!
//! Both writers are single-statement upserts that preserve the sibling
//! field through a COALESCE subselect, so concurrent `set_language` and
//! `set_auto_detect` calls for the same user cannot clobber each other:
//! SQLite executes each statement atomically.

use sqlx::SqlitePool;

use crate::Result;

/// Get a user's `(language, auto_detect)` pair.
///
/// Unknown users and rows without a stored language both resolve to the
/// defaults `("en", true)`; there is no "not found" case.
pub async fn get_preferences(pool: &SqlitePool, user_id: i64) -> Result<(String, bool)> {
    let row: Option<(Option<String>, bool)> = sqlx::query_as(
        r#"
        SELECT language, auto_detect
        FROM users
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(match row {
        Some((language, auto_detect)) => (language.unwrap_or_else(|| "en".to_string()), auto_detect),
        None => ("en".to_string(), true),
    })
}

/// Set a user's language, creating the row if needed.
///
/// An existing `auto_detect` value survives; a fresh row gets the default.
/// The language code is stored as given - validation against the closed
/// set happens at the UI boundary, not here.
pub async fn set_language(pool: &SqlitePool, user_id: i64, language: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (user_id, language, auto_detect)
        VALUES (?, ?, COALESCE((SELECT auto_detect FROM users WHERE user_id = ?), 1))
        ON CONFLICT(user_id) DO UPDATE SET language = excluded.language
        "#,
    )
    .bind(user_id)
    .bind(language)
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Set a user's auto-detect flag, creating the row if needed.
///
/// An existing `language` value survives; a fresh row keeps it NULL so
/// readers still see the `"en"` default.
pub async fn set_auto_detect(pool: &SqlitePool, user_id: i64, enabled: bool) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO users (user_id, language, auto_detect)
        VALUES (?, (SELECT language FROM users WHERE user_id = ?), ?)
        ON CONFLICT(user_id) DO UPDATE SET auto_detect = excluded.auto_detect
        "#,
    )
    .bind(user_id)
    .bind(user_id)
    .bind(enabled)
    .execute(pool)
    .await?;

    Ok(())
}
