//! Title model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yamdb_core::types::DbId;

/// A row from the `titles` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Title {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    /// `None` once the referenced category has been deleted.
    pub category_id: Option<DbId>,
}

/// DTO for creating a title with an already-resolved category.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTitle {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub description: Option<String>,
    pub category_id: DbId,
}
