//! Concurrent organize fan-out with per-file failure isolation.

use crate::materialize::{self, DirectoryLedger};
use crate::models::{FileOutcome, OrganizeError, OrganizeReport};
use crate::placement;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;
use tracing::{info, warn};
use tunesort_providers::TagReader;

/// Processes every discovered file and returns once each one has reached a
/// terminal outcome. Outcomes complete in any order; a failure in one file
/// never affects another. `max_in_flight` bounds concurrency, 0 removes
/// the bound.
pub async fn organize(
    mut files: mpsc::Receiver<PathBuf>,
    destination: &Path,
    tags: Arc<dyn TagReader>,
    max_in_flight: usize,
) -> OrganizeReport {
    let permits = if max_in_flight == 0 {
        Semaphore::MAX_PERMITS
    } else {
        max_in_flight
    };
    let semaphore = Arc::new(Semaphore::new(permits));
    let ledger = Arc::new(DirectoryLedger::new());
    let mut workers: JoinSet<(PathBuf, FileOutcome)> = JoinSet::new();

    while let Some(path) = files.recv().await {
        let permit = match semaphore.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => break,
        };
        let tags = tags.clone();
        let ledger = ledger.clone();
        let destination = destination.to_path_buf();
        workers.spawn(async move {
            let outcome = process_file(&path, &destination, tags.as_ref(), &ledger).await;
            drop(permit);
            (path, outcome)
        });
    }

    let mut report = OrganizeReport::default();
    while let Some(joined) = workers.join_next().await {
        match joined {
            Ok((path, outcome)) => {
                log_outcome(&path, &outcome);
                report.record(path, outcome);
            }
            Err(err) => {
                warn!("organize worker aborted: {err}");
                report.failed += 1;
            }
        }
    }
    report
}

/// One file, start to finish: decode, plan, materialize, copy. A decode
/// failure is a skip with no destination side effects.
async fn process_file(
    path: &Path,
    destination: &Path,
    tags: &dyn TagReader,
    ledger: &DirectoryLedger,
) -> FileOutcome {
    let tags = match tags.read_tags(path).await {
        Ok(tags) => tags,
        Err(err) => {
            return FileOutcome::Skipped {
                reason: err.to_string(),
            }
        }
    };

    let album_dir = placement::plan(&tags).album_dir(destination);
    if let Err(error) = materialize::ensure_dir(ledger, &album_dir).await {
        return FileOutcome::Failed { error };
    }

    let file_name = match path.file_name() {
        Some(name) => name,
        None => {
            return FileOutcome::Failed {
                error: OrganizeError::NoFileName {
                    path: path.to_path_buf(),
                },
            }
        }
    };
    let target = album_dir.join(file_name);
    // Overwrite-if-exists: a repeat run replaces the previous copy.
    match tokio::fs::copy(path, &target).await {
        Ok(_) => FileOutcome::Organized {
            destination: target,
        },
        Err(source) => FileOutcome::Failed {
            error: OrganizeError::Copy {
                from: path.to_path_buf(),
                to: target,
                source,
            },
        },
    }
}

fn log_outcome(path: &Path, outcome: &FileOutcome) {
    match outcome {
        FileOutcome::Organized { destination } => {
            info!("organized {} -> {}", path.display(), destination.display());
        }
        FileOutcome::Skipped { reason } => {
            info!("skipped {}: {}", path.display(), reason);
        }
        FileOutcome::Failed { error } => {
            warn!("failed {}: {}", path.display(), error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use tunesort_providers::fixed::FixedTagReader;
    use tunesort_providers::TrackTags;

    fn tags(year: Option<u32>, album: Option<&str>) -> TrackTags {
        TrackTags {
            year,
            album: album.map(str::to_string),
        }
    }

    async fn send_all(paths: Vec<PathBuf>) -> mpsc::Receiver<PathBuf> {
        let (tx, rx) = mpsc::channel(paths.len().max(1));
        for path in paths {
            tx.send(path).await.unwrap();
        }
        rx
    }

    #[tokio::test]
    async fn files_with_equal_placement_share_one_album_directory() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let a = src.path().join("a.mp3");
        let b = src.path().join("b.mp3");
        fs::write(&a, b"aaa").unwrap();
        fs::write(&b, b"bbb").unwrap();

        let reader = FixedTagReader::new()
            .with_tags(&a, tags(Some(2001), Some("X")))
            .with_tags(&b, tags(Some(2001), Some("X")));

        let rx = send_all(vec![a, b]).await;
        let report = organize(rx, dest.path(), Arc::new(reader), 8).await;

        assert_eq!(report.organized, 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.failed, 0);
        let album = dest.path().join("2001").join("X");
        assert!(album.join("a.mp3").is_file());
        assert!(album.join("b.mp3").is_file());
    }

    #[tokio::test]
    async fn undecodable_file_leaves_no_destination_side_effects() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let untagged = src.path().join("untagged.mp3");
        fs::write(&untagged, b"???").unwrap();

        let rx = send_all(vec![untagged]).await;
        let report = organize(rx, dest.path(), Arc::new(FixedTagReader::new()), 8).await;

        assert_eq!(report.skipped, 1);
        assert_eq!(report.organized, 0);
        assert_eq!(report.failed, 0);
        let entries: Vec<_> = fs::read_dir(dest.path()).unwrap().collect();
        assert!(entries.is_empty(), "skip must not touch the destination");
    }

    #[tokio::test]
    async fn copy_failures_are_isolated_and_counted_exactly() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();

        let mut reader = FixedTagReader::new();
        let mut paths = Vec::new();
        // Three real files, two that vanish before the copy step.
        for name in ["a.mp3", "b.mp3", "c.mp3"] {
            let path = src.path().join(name);
            fs::write(&path, b"x").unwrap();
            reader = reader.with_tags(&path, tags(Some(2001), Some("X")));
            paths.push(path);
        }
        for name in ["gone1.mp3", "gone2.mp3"] {
            let path = src.path().join(name);
            reader = reader.with_tags(&path, tags(Some(2002), Some("Y")));
            paths.push(path);
        }

        let rx = send_all(paths).await;
        let report = organize(rx, dest.path(), Arc::new(reader), 8).await;

        assert_eq!(report.total(), 5);
        assert_eq!(report.organized, 3);
        assert_eq!(report.failed, 2);
        assert_eq!(report.skipped, 0);
        for (_, outcome) in &report.outcomes {
            if let FileOutcome::Failed { error } = outcome {
                assert!(matches!(error, OrganizeError::Copy { .. }));
            }
        }
    }

    #[tokio::test]
    async fn repeat_run_overwrites_existing_copies() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let track = src.path().join("track.mp3");
        fs::write(&track, b"new contents").unwrap();

        let album = dest.path().join("2001").join("X");
        fs::create_dir_all(&album).unwrap();
        fs::write(album.join("track.mp3"), b"old").unwrap();

        let reader =
            FixedTagReader::new().with_tags(&track, tags(Some(2001), Some("X")));
        let rx = send_all(vec![track]).await;
        let report = organize(rx, dest.path(), Arc::new(reader), 8).await;

        assert_eq!(report.organized, 1);
        assert_eq!(
            fs::read(album.join("track.mp3")).unwrap(),
            b"new contents".to_vec()
        );
    }

    #[tokio::test]
    async fn unbounded_mode_processes_everything() {
        let src = tempdir().unwrap();
        let dest = tempdir().unwrap();
        let mut reader = FixedTagReader::new();
        let mut paths = Vec::new();
        for i in 0..20 {
            let path = src.path().join(format!("t{i}.mp3"));
            fs::write(&path, b"x").unwrap();
            reader = reader.with_tags(&path, tags(Some(1990 + (i % 3)), Some("A")));
            paths.push(path);
        }

        let rx = send_all(paths).await;
        let report = organize(rx, dest.path(), Arc::new(reader), 0).await;

        assert_eq!(report.organized, 20);
    }
}
