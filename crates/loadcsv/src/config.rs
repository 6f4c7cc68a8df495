use yamdb_core::import::ImportMode;

use crate::cli::Cli;
use crate::error::{LoaderError, LoaderResult};

/// Default connection pool size. Imports are sequential, so one
/// connection does the work and one is spare for the health check.
const DEFAULT_MAX_CONNECTIONS: u32 = 2;

/// Loader configuration resolved from command-line flags and environment
/// variables. Flags win over the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub mode: ImportMode,
    pub run_migrations: bool,
}

impl LoaderConfig {
    /// Resolve configuration from `cli` and the process environment.
    ///
    /// | Env Var              | Default   |
    /// |----------------------|-----------|
    /// | `DATABASE_URL`       | required  |
    /// | `DB_MAX_CONNECTIONS` | `2`       |
    /// | `IMPORT_MODE`        | `per_row` |
    /// | `RUN_MIGRATIONS`     | `false`   |
    ///
    /// Logging is configured in `main` before this runs: `RUST_LOG` sets the
    /// filter and `LOG_FORMAT=json` switches the stderr logs to JSON lines.
    pub fn from_env(cli: &Cli) -> LoaderResult<Self> {
        Self::from_sources(cli, |key| std::env::var(key).ok())
    }

    /// Resolve configuration from `cli` and an arbitrary variable lookup.
    pub fn from_sources<F>(cli: &Cli, env: F) -> LoaderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = cli
            .database_url
            .clone()
            .or_else(|| env("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                LoaderError::Config("DATABASE_URL must be set (or pass --database-url)".into())
            })?;

        let max_connections = match env("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    LoaderError::Config(format!(
                        "DB_MAX_CONNECTIONS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let mode = match (cli.mode, env("IMPORT_MODE")) {
            (Some(mode), _) => mode,
            (None, Some(raw)) => raw
                .trim()
                .parse()
                .map_err(|e| LoaderError::Config(format!("IMPORT_MODE: {e}")))?,
            (None, None) => ImportMode::default(),
        };

        let run_migrations = cli.migrate
            || match env("RUN_MIGRATIONS") {
                Some(raw) => parse_bool(&raw).ok_or_else(|| {
                    LoaderError::Config(format!("RUN_MIGRATIONS must be true or false, got '{raw}'"))
                })?,
                None => false,
            };

        Ok(Self {
            database_url,
            max_connections,
            mode,
            run_migrations,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
