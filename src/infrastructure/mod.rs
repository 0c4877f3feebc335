//! Infrastructure layer for external integrations.
//!
//! Implements the repository interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - PostgreSQL pool, schema and repository implementations

pub mod persistence;
