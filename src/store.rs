//! SQLite-backed post storage.
//!
//! [`PostStore`] wraps a `SqlitePool`; cloning it is cheap (the pool is
//! Arc-backed), which is how each request gets its own handle. Every write
//! runs inside a scoped transaction committed before the call returns, so a
//! response is never sent for a half-applied mutation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS posts (
    id    INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body  TEXT NOT NULL
)";

/// Handle to the posts table.
#[derive(Clone)]
pub struct PostStore {
    pool: SqlitePool,
}

impl PostStore {
    /// Opens (creating if missing) the database at `database_url`
    /// (e.g. `sqlite://posts.db`) and ensures the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);
        let pool = SqlitePool::connect_with(opts).await?;
        sqlx::query(SCHEMA).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// One round-trip to the database; used by the readiness probe.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// All posts, ascending by id, optionally narrowed to those whose title
    /// and/or body contain the given substrings.
    ///
    /// Matching happens in the database via `instr`, which is exact and
    /// case-sensitive (`LIKE` folds ASCII case and would need `%` escaping).
    pub async fn list(
        &self,
        title_like: Option<&str>,
        body_like: Option<&str>,
    ) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as(
            "SELECT id, title, body FROM posts \
             WHERE (?1 IS NULL OR instr(title, ?1) > 0) \
               AND (?2 IS NULL OR instr(body, ?2) > 0) \
             ORDER BY id",
        )
        .bind(title_like)
        .bind(body_like)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as("SELECT id, title, body FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Inserts a new post and returns it with its assigned id.
    pub async fn create(&self, title: &str, body: &str) -> Result<Post, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("INSERT INTO posts (title, body) VALUES (?, ?)")
            .bind(title)
            .bind(body)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Post {
            id: result.last_insert_rowid(),
            title: title.to_owned(),
            body: body.to_owned(),
        })
    }

    /// Overwrites title and body of an existing post. The caller checks
    /// existence first; updating an absent id is a silent no-op here.
    pub async fn update(&self, id: i64, title: &str, body: &str) -> Result<Post, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE posts SET title = ?, body = ? WHERE id = ?")
            .bind(title)
            .bind(body)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Post { id, title: title.to_owned(), body: body.to_owned() })
    }

    /// Removes a post. Committed before return, so a subsequent read from
    /// any handle no longer sees the row.
    pub async fn delete(&self, id: i64) -> Result<(), sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }
}
