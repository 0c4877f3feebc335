//! Startup schema initialization.

use sqlx::PgPool;

/// DDL for the single `urls` table.
///
/// The layout matches tables created by earlier deployments, including the
/// nullable `clicks` column.
pub const CREATE_URLS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS urls (
    id SERIAL PRIMARY KEY,
    short_code TEXT UNIQUE NOT NULL,
    original_url TEXT NOT NULL,
    clicks INTEGER DEFAULT 0
)
"#;

/// Ensures the `urls` table exists. Safe to run on every start.
///
/// # Errors
///
/// Returns the driver error if the database is unreachable or the statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_URLS_TABLE).execute(pool).await?;
    tracing::info!("Schema ready (table `urls`)");
    Ok(())
}
