//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LinkTotals, NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by every query that returns a link.
///
/// `clicks` is nullable in tables created by older deployments, so queries
/// coalesce it to zero.
#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i32,
    short_code: String,
    original_url: String,
    clicks: i32,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(row: ShortLinkRow) -> Self {
        ShortLink::new(row.id, row.short_code, row.original_url, row.clicks)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// Each call borrows a pooled connection for one statement. Queries are
/// parameterized, never string-formatted.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO urls (short_code, original_url, clicks)
            VALUES ($1, $2, 0)
            RETURNING id, short_code, original_url, COALESCE(clicks, 0) AS clicks
            "#,
        )
        .bind(&new_link.short_code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, short_code, original_url, COALESCE(clicks, 0) AS clicks
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM urls WHERE short_code = $1)")
                .bind(code)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn record_click(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            UPDATE urls
            SET clicks = COALESCE(clicks, 0) + 1
            WHERE short_code = $1
            RETURNING id, short_code, original_url, COALESCE(clicks, 0) AS clicks
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        let (links, clicks): (i64, i64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(clicks), 0)::BIGINT FROM urls",
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(LinkTotals { links, clicks })
    }

    async fn top(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, short_code, original_url, COALESCE(clicks, 0) AS clicks
            FROM urls
            ORDER BY COALESCE(clicks, 0) DESC, id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
