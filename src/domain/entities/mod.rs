//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`ShortLink`] - A shortened URL mapping with its click counter
//! - [`NewShortLink`] - Input for creating a link
//! - [`LinkTotals`] - Aggregate counters used by the admin CLI

pub mod link;

pub use link::{LinkTotals, NewShortLink, ShortLink};
