//! User entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yamdb_core::types::DbId;

/// Role assigned when the export leaves the `role` cell empty.
pub const DEFAULT_ROLE: &str = "user";

/// A row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    /// One of `user`, `moderator`, `admin` (enforced by a CHECK constraint).
    pub role: String,
    pub bio: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// DTO for creating a user. Deserializes directly from a `users.csv` row;
/// empty optional cells become `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub id: DbId,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}
