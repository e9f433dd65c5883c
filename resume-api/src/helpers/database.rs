use std::path::PathBuf;
use std::sync::Arc;

use crate::config::StorageConfig;
use crate::database::Database;

/// Returns the path to the resume database
///
/// An explicit `storage.database_path` wins. Otherwise the platform's local
/// data directory is used:
///
/// - **macOS**: `~/Library/Application Support/resume-extractor/resumes.db`
/// - **Linux**: `~/.local/share/resume-extractor/resumes.db`
/// - **Windows**: `%LOCALAPPDATA%\resume-extractor\resumes.db`
pub fn get_db_path(storage: &StorageConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = &storage.database_path {
        return Ok(path.clone());
    }

    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("resume-extractor").join("resumes.db"))
}

/// Open the database and run migrations
pub fn initialize_database(storage: &StorageConfig) -> anyhow::Result<Arc<Database>> {
    let db_path = get_db_path(storage)?;
    let db = Database::new(&db_path)?;
    tracing::info!("Database initialized at: {}", db_path.display());
    Ok(Arc::new(db))
}
