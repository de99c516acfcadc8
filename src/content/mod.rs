//! Content documents
//!
//! Typed page content parsed from JSON fixtures:
//! - `types`: document, section and record shapes
//! - `store`: one-time loading and the `load(id)` accessor

pub mod types;
pub mod store;

pub use types::*;
pub use store::{ContentError, ContentStore};
