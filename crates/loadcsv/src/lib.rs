//! `loadcsv`: bulk-load yamdb CSV exports into PostgreSQL.
//!
//! Files are imported one row at a time. Rows of `titles`, `genre_title`,
//! `review`, and `comments` have their foreign keys resolved against
//! records that already exist, so exports must be loaded in
//! [`EntityKind::LOAD_ORDER`](yamdb_core::entity_kind::EntityKind::LOAD_ORDER).

pub mod cli;
pub mod config;
pub mod error;
pub mod importer;
pub mod rows;
pub mod runner;
pub mod store;
