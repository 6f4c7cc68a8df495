//! Repository for the `comments` table.

use sqlx::PgConnection;

use crate::models::comment::{Comment, CreateComment};

const COLUMNS: &str = "id, review_id, text, author_id, pub_date";

/// Provides insert and count operations for review comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (id, review_id, text, author_id, pub_date)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.id)
            .bind(input.review_id)
            .bind(&input.text)
            .bind(input.author_id)
            .bind(input.pub_date)
            .fetch_one(&mut *conn)
            .await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments")
            .fetch_one(&mut *conn)
            .await
    }
}
