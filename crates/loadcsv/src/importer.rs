//! Streaming CSV import for a single entity kind.
//!
//! One pass, no retries: the header is validated, then every data row is
//! deserialized, its foreign keys (if any) are resolved, and the record is
//! created before the next row is read. The first error aborts the pass.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use yamdb_core::csv_schema::validate_header;
use yamdb_core::entity_kind::EntityKind;
use yamdb_core::error::CoreError;
use yamdb_core::types::DbId;
use yamdb_db::models::category::CreateCategory;
use yamdb_db::models::comment::CreateComment;
use yamdb_db::models::genre::CreateGenre;
use yamdb_db::models::genre_title::CreateGenreTitle;
use yamdb_db::models::review::CreateReview;
use yamdb_db::models::title::CreateTitle;
use yamdb_db::models::user::CreateUser;

use crate::error::{LoaderError, LoaderResult};
use crate::rows::{CommentRow, GenreTitleRow, ReviewRow, TitleRow};
use crate::store::CatalogStore;

/// Read buffer for CSV files.
const READ_BUFFER_BYTES: usize = 64 * 1024;

/// Open a CSV file, mapping any open failure to [`LoaderError::FileNotFound`].
///
/// Directories and other non-regular files count as unopenable.
pub fn open_csv(path: &Path) -> LoaderResult<BufReader<File>> {
    let not_found = |source| LoaderError::FileNotFound {
        path: path.display().to_string(),
        source,
    };
    let file = File::open(path).map_err(not_found)?;
    if !file.metadata().map_err(not_found)?.is_file() {
        return Err(not_found(io::Error::other("not a regular file")));
    }
    Ok(BufReader::with_capacity(READ_BUFFER_BYTES, file))
}

/// Import the file at `path` as rows of `kind`. Returns the number of
/// records created.
///
/// No store call is made if the file cannot be opened or its header does
/// not match `kind`.
pub async fn import_path<S>(store: &mut S, kind: EntityKind, path: &Path) -> LoaderResult<u64>
where
    S: CatalogStore + ?Sized,
{
    let source = open_csv(path)?;
    import_records(store, kind, source).await
}

/// Import CSV data from any reader as rows of `kind`.
pub async fn import_records<S, R>(store: &mut S, kind: EntityKind, source: R) -> LoaderResult<u64>
where
    S: CatalogStore + ?Sized,
    R: Read,
{
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .trim(Trim::Headers)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    validate_header(kind, headers.iter())?;

    let mut created: u64 = 0;
    let mut record = StringRecord::new();
    while reader.read_record(&mut record).map_err(record_error)? {
        let line = record.position().map_or(0, |p| p.line());
        import_row(store, kind, &headers, &record, line).await?;
        created += 1;
    }

    Ok(created)
}

/// Attach the line number to a read error when the reader knows it (e.g. a
/// row with the wrong number of cells).
fn record_error(source: csv::Error) -> LoaderError {
    match source.position().map(|p| p.line()) {
        Some(line) => LoaderError::Row { line, source },
        None => LoaderError::Csv(source),
    }
}

/// Deserialize `record` by header name into `T`.
fn parse_row<T: DeserializeOwned>(
    headers: &StringRecord,
    record: &StringRecord,
    line: u64,
) -> LoaderResult<T> {
    record
        .deserialize(Some(headers))
        .map_err(|source| LoaderError::Row { line, source })
}

/// Turn a lookup result into the referenced record or a not-found error.
fn require<T>(found: Option<T>, kind: EntityKind, id: DbId) -> LoaderResult<T> {
    found.ok_or_else(|| {
        LoaderError::Core(CoreError::NotFound {
            entity: kind.entity_name(),
            id,
        })
    })
}

async fn import_row<S>(
    store: &mut S,
    kind: EntityKind,
    headers: &StringRecord,
    record: &StringRecord,
    line: u64,
) -> LoaderResult<()>
where
    S: CatalogStore + ?Sized,
{
    match kind {
        EntityKind::Category => {
            let input: CreateCategory = parse_row(headers, record, line)?;
            let category = store.create_category(&input).await?;
            tracing::debug!(line, id = category.id, slug = %category.slug, "Created category");
        }
        EntityKind::Genre => {
            let input: CreateGenre = parse_row(headers, record, line)?;
            let genre = store.create_genre(&input).await?;
            tracing::debug!(line, id = genre.id, slug = %genre.slug, "Created genre");
        }
        EntityKind::Users => {
            let input: CreateUser = parse_row(headers, record, line)?;
            let user = store.create_user(&input).await?;
            tracing::debug!(line, id = user.id, username = %user.username, "Created user");
        }
        EntityKind::Titles => {
            let row: TitleRow = parse_row(headers, record, line)?;
            let category = require(
                store.find_category(row.category).await?,
                EntityKind::Category,
                row.category,
            )?;
            let title = store
                .create_title(&CreateTitle {
                    id: row.id,
                    name: row.name,
                    year: row.year,
                    description: row.description,
                    category_id: category.id,
                })
                .await?;
            tracing::debug!(line, id = title.id, category_id = category.id, "Created title");
        }
        EntityKind::GenreTitle => {
            let row: GenreTitleRow = parse_row(headers, record, line)?;
            let title = require(
                store.find_title(row.title_id).await?,
                EntityKind::Titles,
                row.title_id,
            )?;
            let genre = require(
                store.find_genre(row.genre_id).await?,
                EntityKind::Genre,
                row.genre_id,
            )?;
            let link = store
                .create_genre_title(&CreateGenreTitle {
                    id: row.id,
                    title_id: title.id,
                    genre_id: genre.id,
                })
                .await?;
            tracing::debug!(line, id = link.id, title_id = title.id, genre_id = genre.id, "Linked genre to title");
        }
        EntityKind::Review => {
            let row: ReviewRow = parse_row(headers, record, line)?;
            let title = require(
                store.find_title(row.title_id).await?,
                EntityKind::Titles,
                row.title_id,
            )?;
            let author = require(store.find_user(row.author).await?, EntityKind::Users, row.author)?;
            let review = store
                .create_review(&CreateReview {
                    id: row.id,
                    title_id: title.id,
                    text: row.text,
                    author_id: author.id,
                    score: row.score,
                    pub_date: row.pub_date,
                })
                .await?;
            tracing::debug!(line, id = review.id, title_id = title.id, author_id = author.id, "Created review");
        }
        EntityKind::Comments => {
            let row: CommentRow = parse_row(headers, record, line)?;
            let review = require(
                store.find_review(row.review_id).await?,
                EntityKind::Review,
                row.review_id,
            )?;
            let author = require(store.find_user(row.author).await?, EntityKind::Users, row.author)?;
            let comment = store
                .create_comment(&CreateComment {
                    id: row.id,
                    review_id: review.id,
                    text: row.text,
                    author_id: author.id,
                    pub_date: row.pub_date,
                })
                .await?;
            tracing::debug!(line, id = comment.id, review_id = review.id, author_id = author.id, "Created comment");
        }
    }

    Ok(())
}

/// List the export files of a seed directory in load order.
///
/// Kinds without a `<kind>.csv` file in `dir` are skipped with a warning.
/// Fails with [`LoaderError::FileNotFound`] if `dir` cannot be read.
pub fn plan_seed_dir(dir: &Path) -> LoaderResult<Vec<(EntityKind, PathBuf)>> {
    std::fs::read_dir(dir).map_err(|source| LoaderError::FileNotFound {
        path: dir.display().to_string(),
        source,
    })?;

    let mut plan = Vec::with_capacity(EntityKind::LOAD_ORDER.len());
    for kind in EntityKind::LOAD_ORDER {
        let path = dir.join(kind.file_name());
        if path.is_file() {
            plan.push((*kind, path));
        } else {
            tracing::warn!(entity = %kind, path = %path.display(), "No export for entity, skipping");
        }
    }
    Ok(plan)
}
