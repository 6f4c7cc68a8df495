//! Repository for the `titles` table.

use sqlx::PgConnection;
use yamdb_core::types::DbId;

use crate::models::title::{CreateTitle, Title};

const COLUMNS: &str = "id, name, year, description, category_id";

/// Provides insert and lookup operations for titles.
pub struct TitleRepo;

impl TitleRepo {
    /// Insert a new title, returning the created row.
    ///
    /// The caller is expected to have resolved `category_id` already; the
    /// foreign key still rejects dangling IDs.
    pub async fn create(conn: &mut PgConnection, input: &CreateTitle) -> Result<Title, sqlx::Error> {
        let query = format!(
            "INSERT INTO titles (id, name, year, description, category_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Title>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(input.year)
            .bind(&input.description)
            .bind(input.category_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a title by its primary key.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Title>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM titles WHERE id = $1");
        sqlx::query_as::<_, Title>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM titles")
            .fetch_one(&mut *conn)
            .await
    }
}
