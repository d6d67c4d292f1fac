use std::path::Path;

use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::models::{Paste, PasteSummary, PublicPaste};

/// The pastes table, created on startup if absent.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS pastes (
    id TEXT PRIMARY KEY,
    content TEXT NOT NULL,
    format TEXT DEFAULT 'text',
    created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
    updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
)";

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if necessary) the database at `path`.
    pub async fn connect(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// List every paste without its content, most recently touched first.
    pub async fn list_summaries(&self) -> crate::ApiResult<Vec<PasteSummary>> {
        Ok(sqlx::query_as::<_, PasteSummary>(
            "SELECT id, format, created_at, updated_at FROM pastes ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    /// Get a paste with all of its fields by id.
    pub async fn get_full(&self, id: &str) -> crate::ApiResult<Paste> {
        let paste = sqlx::query_as::<_, Paste>(
            "SELECT id, content, format, created_at, updated_at FROM pastes WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(paste)
    }

    /// Get the public projection of a paste by id.
    pub async fn get_public(&self, id: &str) -> crate::ApiResult<PublicPaste> {
        let paste =
            sqlx::query_as::<_, PublicPaste>("SELECT content, format FROM pastes WHERE id = ?")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
        Ok(paste)
    }

    /// Insert a paste. Fails if `id` already exists.
    pub async fn insert(&self, id: &str, content: &str, format: &str) -> crate::ApiResult<Paste> {
        let now = Utc::now();
        let paste = sqlx::query_as::<_, Paste>(
            "INSERT INTO pastes (id, content, format, created_at, updated_at) VALUES (?, ?, ?, \
             ?, ?) RETURNING id, content, format, created_at, updated_at",
        )
        .bind(id)
        .bind(content)
        .bind(format)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(paste)
    }

    /// Replace a paste's content and format, refreshing `updated_at`.
    /// Returns the number of rows affected; 0 means the id is unknown.
    pub async fn update(&self, id: &str, content: &str, format: &str) -> crate::ApiResult<u64> {
        let result =
            sqlx::query("UPDATE pastes SET content = ?, format = ?, updated_at = ? WHERE id = ?")
                .bind(content)
                .bind(format)
                .bind(Utc::now())
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected())
    }

    /// Delete a paste by id. Returns the number of rows affected.
    pub async fn delete(&self, id: &str) -> crate::ApiResult<u64> {
        let result = sqlx::query("DELETE FROM pastes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Close the underlying pool. Called on shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
