use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yamdb_core::types::DbId;

/// A row from the `genre_title` junction table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct GenreTitle {
    pub id: DbId,
    pub title_id: DbId,
    pub genre_id: DbId,
}

/// DTO for linking an existing title to an existing genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenreTitle {
    pub id: DbId,
    pub title_id: DbId,
    pub genre_id: DbId,
}
