//! The storage seam the importer writes through.
//!
//! [`CatalogStore`] exposes exactly what an import needs: a primary-key
//! lookup for every kind that is referenced by another kind, and a create
//! for every kind. [`PgCatalogStore`] backs it with the `yamdb_db`
//! repositories on a single connection.

use async_trait::async_trait;
use sqlx::PgConnection;
use yamdb_core::types::DbId;
use yamdb_db::models::category::{Category, CreateCategory};
use yamdb_db::models::comment::{Comment, CreateComment};
use yamdb_db::models::genre::{CreateGenre, Genre};
use yamdb_db::models::genre_title::{CreateGenreTitle, GenreTitle};
use yamdb_db::models::review::{CreateReview, Review};
use yamdb_db::models::title::{CreateTitle, Title};
use yamdb_db::models::user::{CreateUser, User};
use yamdb_db::repositories::{
    CategoryRepo, CommentRepo, GenreRepo, GenreTitleRepo, ReviewRepo, TitleRepo, UserRepo,
};

use crate::error::LoaderResult;

/// Create and lookup-by-primary-key operations for the seven catalog kinds.
#[async_trait]
pub trait CatalogStore: Send {
    // -- lookups -------------------------------------------------------------

    async fn find_category(&mut self, id: DbId) -> LoaderResult<Option<Category>>;
    async fn find_genre(&mut self, id: DbId) -> LoaderResult<Option<Genre>>;
    async fn find_title(&mut self, id: DbId) -> LoaderResult<Option<Title>>;
    async fn find_review(&mut self, id: DbId) -> LoaderResult<Option<Review>>;
    async fn find_user(&mut self, id: DbId) -> LoaderResult<Option<User>>;

    // -- creates -------------------------------------------------------------

    async fn create_category(&mut self, input: &CreateCategory) -> LoaderResult<Category>;
    async fn create_genre(&mut self, input: &CreateGenre) -> LoaderResult<Genre>;
    async fn create_user(&mut self, input: &CreateUser) -> LoaderResult<User>;
    async fn create_title(&mut self, input: &CreateTitle) -> LoaderResult<Title>;
    async fn create_genre_title(&mut self, input: &CreateGenreTitle) -> LoaderResult<GenreTitle>;
    async fn create_review(&mut self, input: &CreateReview) -> LoaderResult<Review>;
    async fn create_comment(&mut self, input: &CreateComment) -> LoaderResult<Comment>;
}

/// PostgreSQL-backed store.
///
/// Borrowing a bare `PgConnection` lets the same store run on a pooled
/// connection (every statement autocommits) or on an open transaction.
pub struct PgCatalogStore<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> PgCatalogStore<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore<'_> {
    async fn find_category(&mut self, id: DbId) -> LoaderResult<Option<Category>> {
        Ok(CategoryRepo::find_by_id(self.conn, id).await?)
    }

    async fn find_genre(&mut self, id: DbId) -> LoaderResult<Option<Genre>> {
        Ok(GenreRepo::find_by_id(self.conn, id).await?)
    }

    async fn find_title(&mut self, id: DbId) -> LoaderResult<Option<Title>> {
        Ok(TitleRepo::find_by_id(self.conn, id).await?)
    }

    async fn find_review(&mut self, id: DbId) -> LoaderResult<Option<Review>> {
        Ok(ReviewRepo::find_by_id(self.conn, id).await?)
    }

    async fn find_user(&mut self, id: DbId) -> LoaderResult<Option<User>> {
        Ok(UserRepo::find_by_id(self.conn, id).await?)
    }

    async fn create_category(&mut self, input: &CreateCategory) -> LoaderResult<Category> {
        Ok(CategoryRepo::create(self.conn, input).await?)
    }

    async fn create_genre(&mut self, input: &CreateGenre) -> LoaderResult<Genre> {
        Ok(GenreRepo::create(self.conn, input).await?)
    }

    async fn create_user(&mut self, input: &CreateUser) -> LoaderResult<User> {
        Ok(UserRepo::create(self.conn, input).await?)
    }

    async fn create_title(&mut self, input: &CreateTitle) -> LoaderResult<Title> {
        Ok(TitleRepo::create(self.conn, input).await?)
    }

    async fn create_genre_title(&mut self, input: &CreateGenreTitle) -> LoaderResult<GenreTitle> {
        Ok(GenreTitleRepo::create(self.conn, input).await?)
    }

    async fn create_review(&mut self, input: &CreateReview) -> LoaderResult<Review> {
        Ok(ReviewRepo::create(self.conn, input).await?)
    }

    async fn create_comment(&mut self, input: &CreateComment) -> LoaderResult<Comment> {
        Ok(CommentRepo::create(self.conn, input).await?)
    }
}
