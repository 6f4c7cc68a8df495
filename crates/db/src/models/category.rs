//! Category model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yamdb_core::types::DbId;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// DTO for creating a category. Deserializes directly from a `category.csv` row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}
