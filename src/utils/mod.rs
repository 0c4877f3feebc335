//! Utility functions for code generation and URL processing.
//!
//! - [`code_generator`] - Random short code generation and shape checks
//! - [`url_normalizer`] - Scheme defaulting and URL validation

pub mod code_generator;
pub mod url_normalizer;
