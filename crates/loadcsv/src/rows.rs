//! CSV row shapes for the kinds whose columns hold foreign keys.
//!
//! Plain kinds (`category`, `genre`, `users`) deserialize straight into
//! their create DTOs from `yamdb_db::models`. The types here carry the raw
//! referenced IDs as they appear in the export; the importer resolves them
//! to existing records before building the create DTO.

use serde::Deserialize;
use yamdb_core::types::{DbId, Timestamp};

/// A `titles.csv` row. `category` is the category's primary key.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRow {
    pub id: DbId,
    pub name: String,
    pub year: i32,
    pub category: DbId,
    #[serde(default)]
    pub description: Option<String>,
}

/// A `genre_title.csv` row.
#[derive(Debug, Clone, Deserialize)]
pub struct GenreTitleRow {
    pub id: DbId,
    pub title_id: DbId,
    pub genre_id: DbId,
}

/// A `review.csv` row. `author` is the user's primary key.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRow {
    pub id: DbId,
    pub title_id: DbId,
    pub text: String,
    pub author: DbId,
    pub score: i16,
    pub pub_date: Timestamp,
}

/// A `comments.csv` row. `author` is the user's primary key.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentRow {
    pub id: DbId,
    pub review_id: DbId,
    pub text: String,
    pub author: DbId,
    pub pub_date: Timestamp,
}
