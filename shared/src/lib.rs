//! Shared types for the blog content backend
//!
//! Contains the types that cross crate boundaries: provider identifiers and
//! metadata, the generation request/result records, and tracing setup.
//! Component-internal types (database rows, HTTP payloads) are kept in their
//! respective crates.

pub mod logging;
pub mod types;

pub use types::*;
