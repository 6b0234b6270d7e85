//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, validated query strings, and
//! record identifiers in the path.

mod path;
mod validated;

pub use path::RecordIdPath;
pub use validated::{ValidatedJson, ValidatedQuery};
