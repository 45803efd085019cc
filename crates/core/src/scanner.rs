//! Walks filesystem roots for files to organize.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File extension to match, case-sensitively, with or without a
    /// leading dot.
    pub extension: String,
    /// Glob patterns excluded from the walk.
    pub exclude: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extension: "mp3".to_string(),
            exclude: Vec::new(),
        }
    }
}

/// Starts a fresh walk over `roots` and returns the channel of discovered
/// paths. The traversal runs on the blocking pool; dropping the receiver
/// stops it. Unreadable subtrees are skipped, never aborting the walk.
pub fn spawn_scan(
    roots: Vec<PathBuf>,
    options: ScanOptions,
) -> anyhow::Result<mpsc::Receiver<PathBuf>> {
    let exclude = build_globset(&options.exclude)?;
    let extension = options
        .extension
        .trim_start_matches('.')
        .to_string();
    let (tx, rx) = mpsc::channel(100);

    task::spawn_blocking(move || {
        for root in roots {
            for entry in WalkDir::new(&root)
                .follow_links(true)
                .into_iter()
                .filter_entry(|e| !is_excluded(e.path(), &exclude))
            {
                let entry = match entry {
                    Ok(e) => e,
                    // Permission errors and the like: drop the subtree,
                    // keep walking.
                    Err(_) => continue,
                };

                let path = entry.path();
                if !entry.file_type().is_file() || !has_extension(path, &extension) {
                    continue;
                }

                if tx.blocking_send(path.to_path_buf()).is_err() {
                    // Receiver dropped, stop walking.
                    return;
                }
            }
        }
    });

    Ok(rx)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        let glob = Glob::new(pat)?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

fn is_excluded(path: &Path, excludes: &GlobSet) -> bool {
    excludes.is_match(path)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext == extension)
        .unwrap_or(false)
}
