//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkSummary, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::normalize_code;
use crate::utils::db_error::is_unique_violation_on_code;

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    long_url: String,
    short_code: String,
    image_payload: Option<Vec<u8>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(r.id, r.long_url, r.short_code, r.image_payload, r.created_at)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Uniqueness of `short_code` is enforced by the `links_short_code_key`
/// unique index, so concurrent inserts of the same code cannot both commit.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn exists(&self, short_code: &str) -> Result<bool, AppError> {
        let found: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM links WHERE short_code = ?1)")
                .bind(short_code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(found != 0)
    }

    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let short_code = normalize_code(&new_link.short_code);

        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (long_url, short_code, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, long_url, short_code, image_payload, created_at
            "#,
        )
        .bind(&new_link.long_url)
        .bind(&short_code)
        .bind(Utc::now())
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                AppError::duplicate_code(&short_code)
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT id, long_url, short_code, image_payload, created_at
            FROM links
            WHERE short_code = ?1
            "#,
        )
        .bind(normalize_code(short_code))
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn attach_image(&self, short_code: &str, payload: Vec<u8>) -> Result<(), AppError> {
        let short_code = normalize_code(short_code);

        let result = sqlx::query("UPDATE links SET image_payload = ?1 WHERE short_code = ?2")
            .bind(payload)
            .bind(&short_code)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::link_not_found(&short_code));
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<LinkSummary>, AppError> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT short_code, long_url FROM links ORDER BY id")
                .fetch_all(self.pool.as_ref())
                .await?;

        Ok(rows
            .into_iter()
            .map(|(short_code, long_url)| LinkSummary {
                short_code,
                long_url,
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
