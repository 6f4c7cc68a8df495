use yamdb_core::error::CoreError;

/// Error type for the CSV loader.
///
/// Wraps [`CoreError`] for domain errors and adds I/O, CSV, and storage
/// variants. Storage errors carry the database's own message unchanged.
#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    /// The CSV file (or seed directory) could not be opened.
    #[error("File '{path}' does not exist")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A domain-level error from `yamdb_core`: unknown kind, header
    /// mismatch, or a foreign key that resolves to nothing.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The CSV stream is unreadable before any row position is known
    /// (e.g. invalid UTF-8 in the header).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row with the wrong number of cells, or cells that do not fit the
    /// entity's field types.
    #[error("Invalid row at line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Missing or unparsable configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias for loader results.
pub type LoaderResult<T> = Result<T, LoaderError>;
