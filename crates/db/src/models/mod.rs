//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts; primary keys are supplied by
//!   the caller because they come from the CSV exports

pub mod category;
pub mod comment;
pub mod genre;
pub mod genre_title;
pub mod review;
pub mod title;
pub mod user;
