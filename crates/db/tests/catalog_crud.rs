//! Integration tests for the catalog repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create the full reference chain (category -> title -> review -> comment)
//! - Lookups by primary key
//! - Primary key, unique, check, and foreign key violations

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use yamdb_db::models::category::CreateCategory;
use yamdb_db::models::comment::CreateComment;
use yamdb_db::models::genre::CreateGenre;
use yamdb_db::models::genre_title::CreateGenreTitle;
use yamdb_db::models::review::CreateReview;
use yamdb_db::models::title::CreateTitle;
use yamdb_db::models::user::CreateUser;
use yamdb_db::repositories::{
    CategoryRepo, CommentRepo, GenreRepo, GenreTitleRepo, ReviewRepo, TitleRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(id: i64, slug: &str) -> CreateCategory {
    CreateCategory {
        id,
        name: format!("Category {slug}"),
        slug: slug.to_string(),
    }
}

fn new_user(id: i64, username: &str) -> CreateUser {
    CreateUser {
        id,
        username: username.to_string(),
        email: format!("{username}@yamdb.fake"),
        role: None,
        bio: None,
        first_name: None,
        last_name: None,
    }
}

fn new_title(id: i64, category_id: i64) -> CreateTitle {
    CreateTitle {
        id,
        name: format!("Title {id}"),
        year: 1994,
        description: None,
        category_id,
    }
}

fn new_review(id: i64, title_id: i64, author_id: i64, score: i16) -> CreateReview {
    CreateReview {
        id,
        title_id,
        text: "Worth watching".to_string(),
        author_id,
        score,
        pub_date: Utc.with_ymd_and_hms(2019, 9, 24, 21, 8, 21).unwrap(),
    }
}

// ---------------------------------------------------------------------------
// Test: full reference chain
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_reference_chain(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let category = CategoryRepo::create(&mut conn, &new_category(1, "movie"))
        .await
        .unwrap();
    assert_eq!(category.slug, "movie");

    let genre = GenreRepo::create(
        &mut conn,
        &CreateGenre {
            id: 1,
            name: "Drama".to_string(),
            slug: "drama".to_string(),
        },
    )
    .await
    .unwrap();

    let user = UserRepo::create(&mut conn, &new_user(100, "bingobongo"))
        .await
        .unwrap();
    assert_eq!(user.role, "user", "role should default to 'user'");

    let title = TitleRepo::create(&mut conn, &new_title(1, category.id))
        .await
        .unwrap();
    assert_eq!(title.category_id, Some(category.id));

    let link = GenreTitleRepo::create(
        &mut conn,
        &CreateGenreTitle {
            id: 1,
            title_id: title.id,
            genre_id: genre.id,
        },
    )
    .await
    .unwrap();
    assert_eq!(link.genre_id, genre.id);

    let review = ReviewRepo::create(&mut conn, &new_review(1, title.id, user.id, 10))
        .await
        .unwrap();
    assert_eq!(review.score, 10);

    let comment = CommentRepo::create(
        &mut conn,
        &CreateComment {
            id: 1,
            review_id: review.id,
            text: "Agreed".to_string(),
            author_id: user.id,
            pub_date: review.pub_date,
        },
    )
    .await
    .unwrap();
    assert_eq!(comment.review_id, review.id);

    assert_eq!(CommentRepo::count(&mut conn).await.unwrap(), 1);
    assert_eq!(GenreTitleRepo::count(&mut conn).await.unwrap(), 1);
}

// ---------------------------------------------------------------------------
// Test: lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_by_id_returns_none_for_missing_rows(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    assert!(CategoryRepo::find_by_id(&mut conn, 99).await.unwrap().is_none());
    assert!(GenreRepo::find_by_id(&mut conn, 99).await.unwrap().is_none());
    assert!(TitleRepo::find_by_id(&mut conn, 99).await.unwrap().is_none());
    assert!(ReviewRepo::find_by_id(&mut conn, 99).await.unwrap().is_none());
    assert!(UserRepo::find_by_id(&mut conn, 99).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lookups_return_created_rows(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let created = CategoryRepo::create(&mut conn, &new_category(3, "music"))
        .await
        .unwrap();
    let found = CategoryRepo::find_by_id(&mut conn, 3).await.unwrap();
    assert_eq!(found, Some(created));

    UserRepo::create(&mut conn, &new_user(7, "capt_obvious"))
        .await
        .unwrap();
    let user = UserRepo::find_by_id(&mut conn, 7)
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(user.username, "capt_obvious");

    TitleRepo::create(&mut conn, &new_title(10, 3)).await.unwrap();
    let title = TitleRepo::find_by_id(&mut conn, 10)
        .await
        .unwrap()
        .expect("title should exist");
    assert_eq!(title.category_id, Some(3));
}

// ---------------------------------------------------------------------------
// Test: constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_primary_key_is_rejected(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    CategoryRepo::create(&mut conn, &new_category(1, "movie"))
        .await
        .unwrap();
    let result = CategoryRepo::create(&mut conn, &new_category(1, "book")).await;
    assert!(result.is_err(), "re-inserting id 1 should fail");
    assert_eq!(CategoryRepo::count(&mut conn).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_title_with_dangling_category_is_rejected(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let result = TitleRepo::create(&mut conn, &new_title(1, 99)).await;
    assert!(result.is_err(), "foreign key should reject category 99");
    assert_eq!(TitleRepo::count(&mut conn).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_score_out_of_range_is_rejected(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    CategoryRepo::create(&mut conn, &new_category(1, "movie"))
        .await
        .unwrap();
    TitleRepo::create(&mut conn, &new_title(1, 1)).await.unwrap();
    UserRepo::create(&mut conn, &new_user(1, "critic")).await.unwrap();

    let result = ReviewRepo::create(&mut conn, &new_review(1, 1, 1, 11)).await;
    assert!(result.is_err(), "score 11 should violate the check constraint");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_review_by_same_author_is_rejected(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    CategoryRepo::create(&mut conn, &new_category(1, "movie"))
        .await
        .unwrap();
    TitleRepo::create(&mut conn, &new_title(1, 1)).await.unwrap();
    UserRepo::create(&mut conn, &new_user(1, "critic")).await.unwrap();

    ReviewRepo::create(&mut conn, &new_review(1, 1, 1, 7))
        .await
        .unwrap();
    let result = ReviewRepo::create(&mut conn, &new_review(2, 1, 1, 3)).await;
    assert!(result.is_err(), "(title, author) must be unique");
    assert_eq!(ReviewRepo::count(&mut conn).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_role_is_rejected(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let mut input = new_user(1, "root");
    input.role = Some("superuser".to_string());
    assert!(UserRepo::create(&mut conn, &input).await.is_err());
    assert_eq!(UserRepo::count(&mut conn).await.unwrap(), 0);
}
