//! SQLite persistence layer for the Marhaba chat bot.
//!
//! This crate provides async database operations for user preferences and
//! the append-only conversation log using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, history, preference};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:marhaba.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     preference::set_language(db.pool(), 42, "fr").await?;
//!     history::append(db.pool(), 42, "user", "bonjour").await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod history;
pub mod models;
pub mod preference;

pub use error::{DatabaseError, Result};
pub use models::{HistoryEntry, UserPrefs};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/marhaba.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect_with_pool_size("sqlite::memory:", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    ///
    /// In-memory databases must use a pool size of 1: each SQLite
    /// connection to `:memory:` opens its own separate database.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect_with_pool_size("sqlite::memory:", 1)
            .await
            .unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_unknown_user_gets_defaults() {
        let db = test_db().await;

        let (lang, auto) = preference::get_preferences(db.pool(), 1).await.unwrap();
        assert_eq!(lang, "en");
        assert!(auto);
    }

    #[tokio::test]
    async fn test_set_language_then_auto_detect_preserves_both() {
        let db = test_db().await;

        preference::set_language(db.pool(), 7, "fr").await.unwrap();
        preference::set_auto_detect(db.pool(), 7, false).await.unwrap();

        let (lang, auto) = preference::get_preferences(db.pool(), 7).await.unwrap();
        assert_eq!(lang, "fr");
        assert!(!auto);
    }

    #[tokio::test]
    async fn test_set_auto_detect_then_language_preserves_both() {
        let db = test_db().await;

        preference::set_auto_detect(db.pool(), 7, false).await.unwrap();
        preference::set_language(db.pool(), 7, "ar").await.unwrap();

        let (lang, auto) = preference::get_preferences(db.pool(), 7).await.unwrap();
        assert_eq!(lang, "ar");
        assert!(!auto);
    }

    #[tokio::test]
    async fn test_auto_toggle_row_defaults_language_to_en() {
        let db = test_db().await;

        // Row created by a toggle alone has no stored language.
        preference::set_auto_detect(db.pool(), 9, false).await.unwrap();

        let (lang, auto) = preference::get_preferences(db.pool(), 9).await.unwrap();
        assert_eq!(lang, "en");
        assert!(!auto);
    }

    #[tokio::test]
    async fn test_history_limit_returns_most_recent_oldest_first() {
        let db = test_db().await;

        history::append(db.pool(), 5, "user", "A").await.unwrap();
        history::append(db.pool(), 5, "bot", "B").await.unwrap();
        history::append(db.pool(), 5, "user", "C").await.unwrap();

        let rows = history::get_history(db.pool(), 5, 2).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("bot".to_string(), "B".to_string()));
        assert_eq!(rows[1], ("user".to_string(), "C".to_string()));
    }

    #[tokio::test]
    async fn test_history_is_per_user() {
        let db = test_db().await;

        history::append(db.pool(), 1, "user", "mine").await.unwrap();
        history::append(db.pool(), 2, "user", "theirs").await.unwrap();

        let rows = history::get_history(db.pool(), 1, 10).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1, "mine");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let db = test_db().await;

        history::append(db.pool(), 3, "user", "hello").await.unwrap();
        history::clear(db.pool(), 3).await.unwrap();
        history::clear(db.pool(), 3).await.unwrap();

        let rows = history::get_history(db.pool(), 3, 10).await.unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_last_by_role() {
        let db = test_db().await;

        history::append(db.pool(), 4, "user", "question one").await.unwrap();
        history::append(db.pool(), 4, "bot", "answer one").await.unwrap();
        history::append(db.pool(), 4, "user", "question two").await.unwrap();

        let last_bot = history::last_by_role(db.pool(), 4, "bot").await.unwrap();
        assert_eq!(last_bot.as_deref(), Some("answer one"));

        let last_user = history::last_by_role(db.pool(), 4, "user").await.unwrap();
        assert_eq!(last_user.as_deref(), Some("question two"));

        let none = history::last_by_role(db.pool(), 99, "bot").await.unwrap();
        assert!(none.is_none());
    }
}
