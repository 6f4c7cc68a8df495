use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yamdb_core::types::{DbId, Timestamp};

/// A row from the `comments` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub review_id: DbId,
    pub text: String,
    pub author_id: DbId,
    pub pub_date: Timestamp,
}

/// DTO for creating a comment against a resolved review and author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComment {
    pub id: DbId,
    pub review_id: DbId,
    pub text: String,
    pub author_id: DbId,
    pub pub_date: Timestamp,
}
