//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&mut PgConnection` as the first argument, so callers can run
//! them on a pooled connection or inside an open transaction.

pub mod category_repo;
pub mod comment_repo;
pub mod genre_repo;
pub mod genre_title_repo;
pub mod review_repo;
pub mod title_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use genre_repo::GenreRepo;
pub use genre_title_repo::GenreTitleRepo;
pub use review_repo::ReviewRepo;
pub use title_repo::TitleRepo;
pub use user_repo::UserRepo;
