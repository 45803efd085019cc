use std::path::PathBuf;
use thiserror::Error;

/// Per-file I/O failures during placement. Decode failures are not errors
/// at this level; they surface as [`FileOutcome::Skipped`].
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to copy {} to {}: {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} has no file name", .path.display())]
    NoFileName { path: PathBuf },
}

/// Terminal state of one file's processing.
#[derive(Debug)]
pub enum FileOutcome {
    Organized { destination: PathBuf },
    Skipped { reason: String },
    Failed { error: OrganizeError },
}

/// Aggregate result of one organize run. Partial success is the normal
/// terminal state; failed files never abort the run.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    pub organized: usize,
    pub skipped: usize,
    pub failed: usize,
    pub outcomes: Vec<(PathBuf, FileOutcome)>,
}

impl OrganizeReport {
    pub fn record(&mut self, path: PathBuf, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Organized { .. } => self.organized += 1,
            FileOutcome::Skipped { .. } => self.skipped += 1,
            FileOutcome::Failed { .. } => self.failed += 1,
        }
        self.outcomes.push((path, outcome));
    }

    pub fn total(&self) -> usize {
        self.organized + self.skipped + self.failed
    }
}
