//! The seven importable entity kinds and their load order.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One kind of importable CSV export.
///
/// The string names are the ones operators pass on the command line and
/// match the conventional export file stems (`titles.csv`, `review.csv`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Category,
    Comments,
    Genre,
    GenreTitle,
    Review,
    Titles,
    Users,
}

impl EntityKind {
    /// All kinds in alphabetical order of their names.
    pub const ALL: &'static [EntityKind] = &[
        Self::Category,
        Self::Comments,
        Self::Genre,
        Self::GenreTitle,
        Self::Review,
        Self::Titles,
        Self::Users,
    ];

    /// All kinds in foreign-key dependency order.
    ///
    /// Every kind appears after each kind it references.
    pub const LOAD_ORDER: &'static [EntityKind] = &[
        Self::Category,
        Self::Genre,
        Self::Users,
        Self::Titles,
        Self::GenreTitle,
        Self::Review,
        Self::Comments,
    ];

    /// Return the command-line name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Comments => "comments",
            Self::Genre => "genre",
            Self::GenreTitle => "genre_title",
            Self::Review => "review",
            Self::Titles => "titles",
            Self::Users => "users",
        }
    }

    /// Parse a command-line name. Returns `None` for unknown values.
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "category" => Some(Self::Category),
            "comments" => Some(Self::Comments),
            "genre" => Some(Self::Genre),
            "genre_title" => Some(Self::GenreTitle),
            "review" => Some(Self::Review),
            "titles" => Some(Self::Titles),
            "users" => Some(Self::Users),
            _ => None,
        }
    }

    /// Singular name used when reporting a missing record of this kind.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Comments => "comment",
            Self::Genre => "genre",
            Self::GenreTitle => "genre_title",
            Self::Review => "review",
            Self::Titles => "title",
            Self::Users => "user",
        }
    }

    /// Conventional export file name, e.g. `genre_title.csv`.
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }

    /// Kinds whose rows must be resolved against existing records before
    /// insertion.
    pub fn references(&self) -> &'static [EntityKind] {
        match self {
            Self::Category | Self::Genre | Self::Users => &[],
            Self::Titles => &[Self::Category],
            Self::GenreTitle => &[Self::Titles, Self::Genre],
            Self::Review => &[Self::Titles, Self::Users],
            Self::Comments => &[Self::Review, Self::Users],
        }
    }

    /// Whether rows of this kind carry foreign-key columns.
    pub fn has_foreign_keys(&self) -> bool {
        !self.references().is_empty()
    }

    /// Comma-separated list of every valid name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(EntityKind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            CoreError::Validation(format!(
                "unknown entity type '{s}' (expected one of: {})",
                Self::valid_names()
            ))
        })
    }
}
