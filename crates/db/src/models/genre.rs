use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yamdb_core::types::DbId;

/// A row from the `genres` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Genre {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// DTO for creating a genre. Deserializes directly from a `genre.csv` row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}
