//! Repository for the `genre_title` junction table.

use sqlx::PgConnection;

use crate::models::genre_title::{CreateGenreTitle, GenreTitle};

const COLUMNS: &str = "id, title_id, genre_id";

/// Provides insert and count operations for title-genre links.
pub struct GenreTitleRepo;

impl GenreTitleRepo {
    /// Insert a new link row, returning it.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateGenreTitle,
    ) -> Result<GenreTitle, sqlx::Error> {
        let query = format!(
            "INSERT INTO genre_title (id, title_id, genre_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GenreTitle>(&query)
            .bind(input.id)
            .bind(input.title_id)
            .bind(input.genre_id)
            .fetch_one(&mut *conn)
            .await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM genre_title")
            .fetch_one(&mut *conn)
            .await
    }
}
