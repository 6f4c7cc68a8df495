//! Connects to the database and drives one import run.
//!
//! The connection scope follows [`ImportMode`]: per-row imports run on a
//! plain pooled connection, atomic imports and dry runs run inside a
//! transaction that is committed or rolled back at the end.

use std::path::{Path, PathBuf};
use std::time::Instant;

use yamdb_core::entity_kind::EntityKind;
use yamdb_core::import::{ImportMode, ImportSummary};
use yamdb_db::DbPool;

use crate::cli::{Cli, ImportTarget};
use crate::config::LoaderConfig;
use crate::error::LoaderResult;
use crate::importer::{import_path, open_csv, plan_seed_dir};
use crate::store::PgCatalogStore;

/// How rows reach the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOptions {
    pub mode: ImportMode,
    /// Run everything in a transaction that is always rolled back.
    pub dry_run: bool,
}

/// Run the import described by the command line.
pub async fn run(cli: &Cli) -> LoaderResult<Vec<ImportSummary>> {
    let config = LoaderConfig::from_env(cli)?;
    let options = ImportOptions {
        mode: config.mode,
        dry_run: cli.dry_run,
    };

    // Fail on a missing file or directory before touching the database.
    let plan = match cli.target {
        ImportTarget::Entity(_) => {
            open_csv(&cli.path)?;
            Vec::new()
        }
        ImportTarget::All => plan_seed_dir(&cli.path)?,
    };

    let pool = yamdb_db::create_pool(&config.database_url, config.max_connections).await?;
    yamdb_db::health_check(&pool).await?;
    tracing::info!("Database connection established");

    if config.run_migrations {
        yamdb_db::run_migrations(&pool).await?;
        tracing::info!("Database migrations applied");
    }

    match cli.target {
        ImportTarget::Entity(kind) => Ok(vec![import_file(&pool, kind, &cli.path, options).await?]),
        ImportTarget::All => import_plan(&pool, &plan, options).await,
    }
}

/// Import one file, scoping the connection according to `options`.
pub async fn import_file(
    pool: &DbPool,
    kind: EntityKind,
    path: &Path,
    options: ImportOptions,
) -> LoaderResult<ImportSummary> {
    tracing::info!(entity = %kind, path = %path.display(), mode = %options.mode, dry_run = options.dry_run, "Importing file");
    let started = Instant::now();

    let result = if options.dry_run || options.mode == ImportMode::Atomic {
        let mut tx = pool.begin().await?;
        let outcome = import_path(&mut PgCatalogStore::new(&mut *tx), kind, path).await;
        match outcome {
            Ok(rows) if options.dry_run => {
                tx.rollback().await?;
                Ok(rows)
            }
            Ok(rows) => {
                tx.commit().await?;
                Ok(rows)
            }
            // Dropping the transaction rolls it back.
            Err(err) => Err(err),
        }
    } else {
        let mut conn = pool.acquire().await?;
        import_path(&mut PgCatalogStore::new(&mut *conn), kind, path).await
    };

    match result {
        Ok(rows_created) => {
            tracing::info!(
                entity = %kind,
                rows = rows_created,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "File imported"
            );
            Ok(summary(kind, path, rows_created, options))
        }
        Err(err) => {
            tracing::error!(entity = %kind, path = %path.display(), error = %err, "Import aborted");
            Err(err)
        }
    }
}

/// Import the given files in order, stopping at the first failure.
///
/// Outside a dry run every file is scoped on its own, so in atomic mode a
/// failing file rolls back only itself.
///
/// A dry run shares one rolled-back transaction across all files so that
/// later files can resolve rows created by earlier ones.
pub async fn import_plan(
    pool: &DbPool,
    plan: &[(EntityKind, PathBuf)],
    options: ImportOptions,
) -> LoaderResult<Vec<ImportSummary>> {
    if !options.dry_run {
        let mut summaries = Vec::with_capacity(plan.len());
        for (kind, path) in plan {
            summaries.push(import_file(pool, *kind, path, options).await?);
        }
        return Ok(summaries);
    }

    let mut tx = pool.begin().await?;
    let mut summaries = Vec::with_capacity(plan.len());
    for (kind, path) in plan {
        let rows = import_path(&mut PgCatalogStore::new(&mut *tx), *kind, path).await?;
        tracing::info!(entity = %kind, rows, "File checked");
        summaries.push(summary(*kind, path, rows, options));
    }
    tx.rollback().await?;
    Ok(summaries)
}

fn summary(kind: EntityKind, path: &Path, rows_created: u64, options: ImportOptions) -> ImportSummary {
    ImportSummary {
        entity: kind,
        path: path.display().to_string(),
        rows_created,
        mode: options.mode,
        dry_run: options.dry_run,
    }
}
