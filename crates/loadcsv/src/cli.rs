//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use yamdb_core::entity_kind::EntityKind;
use yamdb_core::error::CoreError;
use yamdb_core::import::ImportMode;

const LONG_ABOUT: &str = "\
Load a CSV export into the yamdb database, one row at a time.

Example: loadcsv review static/data/review.csv

Files must be loaded in dependency order: category, genre and users first,
then titles, then genre_title and review, then comments. Use the `all`
target to load a whole directory of exports in that order.";

/// `loadcsv <ENTITY> <PATH>`
#[derive(Parser, Debug)]
#[command(name = "loadcsv", version, about = "Load yamdb CSV exports into the database", long_about = LONG_ABOUT)]
pub struct Cli {
    /// Entity type: category, comments, genre, genre_title, review, titles,
    /// users, or `all` to load a directory of exports
    pub target: ImportTarget,

    /// CSV file to load (a directory when the target is `all`)
    pub path: PathBuf,

    /// Transaction scope: `per-row` commits each row, `atomic` commits the
    /// whole file at once [env: IMPORT_MODE]
    #[arg(long)]
    pub mode: Option<ImportMode>,

    /// Validate and load inside a transaction, then roll it back
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Print the import summary as JSON instead of a message
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// PostgreSQL connection URL [env: DATABASE_URL]
    #[arg(long)]
    pub database_url: Option<String>,

    /// Apply the bundled migrations before importing [env: RUN_MIGRATIONS]
    #[arg(long, default_value_t = false)]
    pub migrate: bool,
}

/// What to import: a single entity file or a seed directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget {
    Entity(EntityKind),
    All,
}

impl std::str::FromStr for ImportTarget {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Entity)
    }
}
