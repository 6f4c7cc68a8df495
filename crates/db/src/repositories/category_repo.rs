//! Repository for the `categories` table.

use sqlx::PgConnection;
use yamdb_core::types::DbId;

use crate::models::category::{Category, CreateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, slug";

/// Provides insert and lookup operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category with a caller-supplied ID, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (id, name, slug)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(input.id)
            .bind(&input.name)
            .bind(&input.slug)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a category by its primary key.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Count all categories.
    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&mut *conn)
            .await
    }
}
