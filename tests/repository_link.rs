//! PostgreSQL repository tests.
//!
//! Run against the database in `DATABASE_URL`.

use sqlx::PgPool;
use std::sync::Arc;
use tinylink::domain::entities::NewShortLink;
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::infrastructure::persistence::{PgLinkRepository, ensure_schema};

async fn setup(pool: PgPool) -> PgLinkRepository {
    ensure_schema(&pool).await.unwrap();
    PgLinkRepository::new(Arc::new(pool))
}

fn new_link(code: &str, url: &str) -> NewShortLink {
    NewShortLink {
        short_code: code.to_string(),
        original_url: url.to_string(),
    }
}

#[sqlx::test]
async fn test_ensure_schema_is_idempotent(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    ensure_schema(&pool).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = setup(pool).await;

    let link = repo
        .create(new_link("abc123", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(link.short_code, "abc123");
    assert_eq!(link.original_url, "https://example.com");
    assert_eq!(link.clicks, 0);
}

#[sqlx::test]
async fn test_create_duplicate_code_conflicts(pool: PgPool) {
    let repo = setup(pool).await;

    repo.create(new_link("dup001", "https://a.com"))
        .await
        .unwrap();
    let result = repo.create(new_link("dup001", "https://b.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[sqlx::test]
async fn test_find_by_code(pool: PgPool) {
    let repo = setup(pool).await;
    repo.create(new_link("find01", "https://example.com"))
        .await
        .unwrap();

    let found = repo.find_by_code("find01").await.unwrap();
    assert_eq!(found.unwrap().original_url, "https://example.com");

    let missing = repo.find_by_code("nope00").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_code_exists(pool: PgPool) {
    let repo = setup(pool).await;
    repo.create(new_link("exist1", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.code_exists("exist1").await.unwrap());
    assert!(!repo.code_exists("exist2").await.unwrap());
}

#[sqlx::test]
async fn test_record_click_increments(pool: PgPool) {
    let repo = setup(pool).await;
    repo.create(new_link("click1", "https://example.com"))
        .await
        .unwrap();

    for expected in 1..=3 {
        let link = repo.record_click("click1").await.unwrap().unwrap();
        assert_eq!(link.clicks, expected);
    }

    let link = repo.find_by_code("click1").await.unwrap().unwrap();
    assert_eq!(link.clicks, 3);
}

#[sqlx::test]
async fn test_record_click_unknown_code(pool: PgPool) {
    let repo = setup(pool).await;

    assert!(repo.record_click("ghost1").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_null_clicks_read_as_zero(pool: PgPool) {
    ensure_schema(&pool).await.unwrap();
    sqlx::query("INSERT INTO urls (short_code, original_url, clicks) VALUES ($1, $2, NULL)")
        .bind("legacy")
        .bind("https://example.com")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.find_by_code("legacy").await.unwrap().unwrap().clicks, 0);
    assert_eq!(repo.record_click("legacy").await.unwrap().unwrap().clicks, 1);
}

#[sqlx::test]
async fn test_totals_and_top(pool: PgPool) {
    let repo = setup(pool).await;
    repo.create(new_link("top001", "https://a.com")).await.unwrap();
    repo.create(new_link("top002", "https://b.com")).await.unwrap();

    repo.record_click("top002").await.unwrap();
    repo.record_click("top002").await.unwrap();
    repo.record_click("top001").await.unwrap();

    let totals = repo.totals().await.unwrap();
    assert_eq!(totals.links, 2);
    assert_eq!(totals.clicks, 3);

    let top = repo.top(1).await.unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].short_code, "top002");
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = setup(pool).await;

    assert!(repo.ping().await.is_ok());
}
