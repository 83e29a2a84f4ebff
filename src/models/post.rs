use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// A blog entry as stored by the repository. The repository owns the
/// sort order: every listing query returns newest first.
#[derive(Debug, Serialize, FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Post {
    pub async fn list(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, content, tags, created_at FROM post ORDER BY created_at DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn get(pool: &PgPool, id: i64) -> Result<Option<Post>, sqlx::Error> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, content, tags, created_at FROM post WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Insert a new post; `created_at` is assigned by the database.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO post (title, content, tags) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(title)
        .bind(content)
        .bind(tags)
        .fetch_one(pool)
        .await
    }

    /// Overwrite title, content and tags. `created_at` is left
    /// untouched; there is no edit history.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        title: &str,
        content: &str,
        tags: &[String],
    ) -> Result<u64, sqlx::Error> {
        let result =
            sqlx::query("UPDATE post SET title = $1, content = $2, tags = $3 WHERE id = $4")
                .bind(title)
                .bind(content)
                .bind(tags)
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM post WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
