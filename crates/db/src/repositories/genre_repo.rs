//! Repository for the `genres` table.

use sqlx::PgConnection;
use yamdb_core::types::DbId;

use crate::models::genre::{CreateGenre, Genre};

const COLUMNS: &str = "id, name, slug";

/// Provides insert and lookup operations for genres.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (id, name, slug)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a genre by its primary key.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(&mut *conn)
            .await
    }
}
