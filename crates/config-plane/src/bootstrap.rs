use std::sync::Arc;

use crate::pg_repository::PgConfigRepository;
use crate::repository::{ConfigRepository, RepositoryError};
use crate::settings::SystemSettings;
use crate::sqlite_repository::SqliteConfigRepository;

pub fn resolve_repository(
    settings: &SystemSettings,
) -> Result<Arc<dyn ConfigRepository>, RepositoryError> {
    let dsn = settings.get_string("storage.dsn");
    if dsn.trim().is_empty() {
        let path = settings.get_string("storage.sqlite_path");
        let repo = SqliteConfigRepository::open(&path)?;
        repo.ensure_schema()?;
        return Ok(Arc::new(repo));
    }
    if is_sqlite_dsn(&dsn) {
        let repo = SqliteConfigRepository::open(sqlite_path_from_dsn(&dsn))?;
        repo.ensure_schema()?;
        return Ok(Arc::new(repo));
    }
    let repo = PgConfigRepository::connect(&dsn)?;
    repo.ensure_schema()?;
    Ok(Arc::new(repo))
}

fn is_sqlite_dsn(dsn: &str) -> bool {
    let trimmed = dsn.trim().to_lowercase();
    trimmed.starts_with("sqlite://") || trimmed.starts_with("sqlite:")
}

fn sqlite_path_from_dsn(dsn: &str) -> &str {
    dsn.trim()
        .strip_prefix("sqlite://")
        .or_else(|| dsn.trim().strip_prefix("sqlite:"))
        .unwrap_or(dsn)
}
