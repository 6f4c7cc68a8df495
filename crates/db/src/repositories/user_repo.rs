//! Repository for the `users` table.

use sqlx::PgConnection;
use yamdb_core::types::DbId;

use crate::models::user::{CreateUser, User, DEFAULT_ROLE};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, role, bio, first_name, last_name";

/// Provides insert and lookup operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// A missing `role` falls back to [`DEFAULT_ROLE`]; any other value is
    /// checked by the table constraint.
    pub async fn create(conn: &mut PgConnection, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, username, email, role, bio, first_name, last_name)
             VALUES ($1, $2, $3, COALESCE($4, '{DEFAULT_ROLE}'), $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(input.id)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a user by primary key.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    pub async fn count(conn: &mut PgConnection) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&mut *conn)
            .await
    }
}
