//! Idempotent directory creation, safe under concurrent organizer workers.

use crate::models::OrganizeError;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Directories already materialized during this run.
///
/// Purely an optimization to skip redundant syscalls: `create_dir_all` is
/// itself idempotent and race-safe, so correctness never depends on the
/// ledger. Discarded with the run.
#[derive(Debug, Default)]
pub struct DirectoryLedger {
    seen: Mutex<HashSet<PathBuf>>,
}

impl DirectoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ensures `path` and all missing ancestors exist. Already-existing
/// directories are success, including when racing callers create the same
/// path concurrently.
pub async fn ensure_dir(ledger: &DirectoryLedger, path: &Path) -> Result<(), OrganizeError> {
    if ledger.seen.lock().await.contains(path) {
        return Ok(());
    }
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| OrganizeError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
    ledger.seen.lock().await.insert(path.to_path_buf());
    Ok(())
}
