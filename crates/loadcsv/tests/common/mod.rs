//! In-memory [`CatalogStore`] for importer tests.
//!
//! Records live in ordered maps keyed by primary key. Creating a record
//! whose key already exists fails with a database error, mirroring the primary
//! key constraint in the real schema.

use std::collections::BTreeMap;

use async_trait::async_trait;
use yamdb_core::types::DbId;
use yamdb_db::models::category::{Category, CreateCategory};
use yamdb_db::models::comment::{Comment, CreateComment};
use yamdb_db::models::genre::{CreateGenre, Genre};
use yamdb_db::models::genre_title::{CreateGenreTitle, GenreTitle};
use yamdb_db::models::review::{CreateReview, Review};
use yamdb_db::models::title::{CreateTitle, Title};
use yamdb_db::models::user::{CreateUser, User, DEFAULT_ROLE};
use yamdb_loadcsv::error::{LoaderError, LoaderResult};
use yamdb_loadcsv::store::CatalogStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    pub categories: BTreeMap<DbId, Category>,
    pub genres: BTreeMap<DbId, Genre>,
    pub users: BTreeMap<DbId, User>,
    pub titles: BTreeMap<DbId, Title>,
    pub genre_titles: BTreeMap<DbId, GenreTitle>,
    pub reviews: BTreeMap<DbId, Review>,
    pub comments: BTreeMap<DbId, Comment>,
    /// Number of create calls, successful or not.
    pub creates: usize,
    /// Number of lookup calls.
    pub lookups: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored records across every kind.
    pub fn total_rows(&self) -> usize {
        self.categories.len()
            + self.genres.len()
            + self.users.len()
            + self.titles.len()
            + self.genre_titles.len()
            + self.reviews.len()
            + self.comments.len()
    }

    pub fn with_category(mut self, id: DbId, slug: &str) -> Self {
        self.categories.insert(
            id,
            Category {
                id,
                name: slug.to_uppercase(),
                slug: slug.to_string(),
            },
        );
        self
    }

    pub fn with_genre(mut self, id: DbId, slug: &str) -> Self {
        self.genres.insert(
            id,
            Genre {
                id,
                name: slug.to_uppercase(),
                slug: slug.to_string(),
            },
        );
        self
    }

    pub fn with_user(mut self, id: DbId, username: &str) -> Self {
        self.users.insert(
            id,
            User {
                id,
                username: username.to_string(),
                email: format!("{username}@yamdb.fake"),
                role: DEFAULT_ROLE.to_string(),
                bio: None,
                first_name: None,
                last_name: None,
            },
        );
        self
    }

    pub fn with_title(mut self, id: DbId, category_id: DbId) -> Self {
        self.titles.insert(
            id,
            Title {
                id,
                name: format!("Title {id}"),
                year: 1994,
                description: None,
                category_id: Some(category_id),
            },
        );
        self
    }

    pub fn with_review(mut self, id: DbId, title_id: DbId, author_id: DbId) -> Self {
        self.reviews.insert(
            id,
            Review {
                id,
                title_id,
                text: "Review".to_string(),
                author_id,
                score: 5,
                pub_date: chrono::Utc::now(),
            },
        );
        self
    }
}

/// Insert `record` under `id`, failing with a storage error like a primary
/// key violation does.
fn insert<T: Clone>(
    table: &mut BTreeMap<DbId, T>,
    name: &str,
    id: DbId,
    record: T,
) -> LoaderResult<T> {
    if table.contains_key(&id) {
        return Err(LoaderError::Database(sqlx::Error::Protocol(format!(
            "duplicate key value violates unique constraint \"{name}_pkey\" (id={id})"
        ))));
    }
    table.insert(id, record.clone());
    Ok(record)
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn find_category(&mut self, id: DbId) -> LoaderResult<Option<Category>> {
        self.lookups += 1;
        Ok(self.categories.get(&id).cloned())
    }

    async fn find_genre(&mut self, id: DbId) -> LoaderResult<Option<Genre>> {
        self.lookups += 1;
        Ok(self.genres.get(&id).cloned())
    }

    async fn find_title(&mut self, id: DbId) -> LoaderResult<Option<Title>> {
        self.lookups += 1;
        Ok(self.titles.get(&id).cloned())
    }

    async fn find_review(&mut self, id: DbId) -> LoaderResult<Option<Review>> {
        self.lookups += 1;
        Ok(self.reviews.get(&id).cloned())
    }

    async fn find_user(&mut self, id: DbId) -> LoaderResult<Option<User>> {
        self.lookups += 1;
        Ok(self.users.get(&id).cloned())
    }

    async fn create_category(&mut self, input: &CreateCategory) -> LoaderResult<Category> {
        self.creates += 1;
        let record = Category {
            id: input.id,
            name: input.name.clone(),
            slug: input.slug.clone(),
        };
        insert(&mut self.categories, "categories", input.id, record)
    }

    async fn create_genre(&mut self, input: &CreateGenre) -> LoaderResult<Genre> {
        self.creates += 1;
        let record = Genre {
            id: input.id,
            name: input.name.clone(),
            slug: input.slug.clone(),
        };
        insert(&mut self.genres, "genres", input.id, record)
    }

    async fn create_user(&mut self, input: &CreateUser) -> LoaderResult<User> {
        self.creates += 1;
        let record = User {
            id: input.id,
            username: input.username.clone(),
            email: input.email.clone(),
            role: input.role.clone().unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            bio: input.bio.clone(),
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
        };
        insert(&mut self.users, "users", input.id, record)
    }

    async fn create_title(&mut self, input: &CreateTitle) -> LoaderResult<Title> {
        self.creates += 1;
        let record = Title {
            id: input.id,
            name: input.name.clone(),
            year: input.year,
            description: input.description.clone(),
            category_id: Some(input.category_id),
        };
        insert(&mut self.titles, "titles", input.id, record)
    }

    async fn create_genre_title(&mut self, input: &CreateGenreTitle) -> LoaderResult<GenreTitle> {
        self.creates += 1;
        let record = GenreTitle {
            id: input.id,
            title_id: input.title_id,
            genre_id: input.genre_id,
        };
        insert(&mut self.genre_titles, "genre_title", input.id, record)
    }

    async fn create_review(&mut self, input: &CreateReview) -> LoaderResult<Review> {
        self.creates += 1;
        let record = Review {
            id: input.id,
            title_id: input.title_id,
            text: input.text.clone(),
            author_id: input.author_id,
            score: input.score,
            pub_date: input.pub_date,
        };
        insert(&mut self.reviews, "reviews", input.id, record)
    }

    async fn create_comment(&mut self, input: &CreateComment) -> LoaderResult<Comment> {
        self.creates += 1;
        let record = Comment {
            id: input.id,
            review_id: input.review_id,
            text: input.text.clone(),
            author_id: input.author_id,
            pub_date: input.pub_date,
        };
        insert(&mut self.comments, "comments", input.id, record)
    }
}
