//! Repository for the `reviews` table.

use sqlx::PgConnection;
use yamdb_core::types::DbId;

use crate::models::review::{CreateReview, Review};

const COLUMNS: &str = "id, title_id, text, author_id, score, pub_date";

/// Provides insert and lookup operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    ///
    /// Fails with a unique violation if the author already reviewed the title,
    /// and with a check violation for scores outside 1..=10.
    pub async fn create(conn: &mut PgConnection, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (id, title_id, text, author_id, score, pub_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.id)
            .bind(input.title_id)
            .bind(&input.text)
            .bind(input.author_id)
            .bind(input.score)
            .bind(input.pub_date)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a review by its primary key.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(&mut *conn)
            .await
    }
}
