//! Pure domain types for the yamdb CSV loader.
//!
//! Nothing in this crate touches the database, the filesystem, or an async
//! runtime.

pub mod csv_schema;
pub mod entity_kind;
pub mod error;
pub mod import;
pub mod types;
