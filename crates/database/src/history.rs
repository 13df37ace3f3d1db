//! Append-only conversation log.

use sqlx::SqlitePool;

use crate::Result;

/// Append one turn to a user's log.
pub async fn append(pool: &SqlitePool, user_id: i64, role: &str, message: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO history (user_id, role, message)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(role)
    .bind(message)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get the `limit` most recent turns for a user, oldest first.
pub async fn get_history(
    pool: &SqlitePool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<(String, String)>> {
    let mut rows: Vec<(String, String)> = sqlx::query_as(
        r#"
        SELECT role, message
        FROM history
        WHERE user_id = ?
        ORDER BY id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.reverse();
    Ok(rows)
}

/// Delete all turns for a user. Idempotent.
pub async fn clear(pool: &SqlitePool, user_id: i64) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM history
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Get the most recent turn with the given role, if any.
///
/// With `role = "bot"` this is the last delivered answer (used by the
/// voice feature); with `role = "user"` it is the last question (used by
/// the detail feature).
pub async fn last_by_role(
    pool: &SqlitePool,
    user_id: i64,
    role: &str,
) -> Result<Option<String>> {
    let message: Option<String> = sqlx::query_scalar(
        r#"
        SELECT message
        FROM history
        WHERE user_id = ? AND role = ?
        ORDER BY id DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .bind(role)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}
