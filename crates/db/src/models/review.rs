//! Review model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yamdb_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub title_id: DbId,
    pub text: String,
    pub author_id: DbId,
    /// 1 through 10 inclusive.
    pub score: i16,
    pub pub_date: Timestamp,
}

/// DTO for creating a review against a resolved title and author.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub id: DbId,
    pub title_id: DbId,
    pub text: String,
    pub author_id: DbId,
    pub score: i16,
    pub pub_date: Timestamp,
}
