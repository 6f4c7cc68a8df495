//! Expected CSV column sets per entity kind and header validation.
//!
//! Headers are checked before any data row is read so that a file exported
//! for the wrong kind fails on line 1 instead of half-way through.

use std::collections::HashSet;

use crate::entity_kind::EntityKind;
use crate::error::CoreError;

/// Columns every file of the given kind must carry.
pub fn required_columns(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Category | EntityKind::Genre => &["id", "name", "slug"],
        EntityKind::Users => &["id", "username", "email"],
        EntityKind::Titles => &["id", "name", "year", "category"],
        EntityKind::GenreTitle => &["id", "title_id", "genre_id"],
        EntityKind::Review => &["id", "title_id", "text", "author", "score", "pub_date"],
        EntityKind::Comments => &["id", "review_id", "text", "author", "pub_date"],
    }
}

/// Columns a file of the given kind may carry in addition to the required ones.
pub fn optional_columns(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Users => &["role", "bio", "first_name", "last_name"],
        EntityKind::Titles => &["description"],
        _ => &[],
    }
}

/// Strip surrounding whitespace and a leading byte-order mark.
fn normalize(column: &str) -> &str {
    column.trim_start_matches('\u{feff}').trim()
}

/// Check a header row against the column set of `kind`.
///
/// Column order does not matter. Fails on the first duplicate, the first
/// unknown column, or the full list of missing required columns.
pub fn validate_header<'a, I>(kind: EntityKind, headers: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = &'a str>,
{
    let required = required_columns(kind);
    let optional = optional_columns(kind);

    let mut seen: HashSet<&str> = HashSet::new();
    for raw in headers {
        let column = normalize(raw);
        if !seen.insert(column) {
            return Err(CoreError::Validation(format!(
                "{kind}: duplicate column '{column}' in header"
            )));
        }
        if !required.contains(&column) && !optional.contains(&column) {
            return Err(CoreError::Validation(format!(
                "{kind}: unexpected column '{column}' in header"
            )));
        }
    }

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|c| !seen.contains(c))
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "{kind}: missing required column(s): {}",
            missing.join(", ")
        )));
    }

    Ok(())
}
