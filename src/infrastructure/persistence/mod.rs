//! PostgreSQL persistence.
//!
//! - [`pool`] - Connection pool construction from [`crate::config::Config`]
//! - [`schema`] - Idempotent table creation at startup
//! - [`PgLinkRepository`] - Link storage, lookup and click counting

pub mod pg_link_repository;
pub mod pool;
pub mod schema;

pub use pg_link_repository::PgLinkRepository;
pub use pool::connect_pool;
pub use schema::ensure_schema;
