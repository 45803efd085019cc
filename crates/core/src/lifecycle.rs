//! Run sequencing: discovery, sampler start, organize to completion,
//! stop handshake, sampler drain.

use crate::models::OrganizeReport;
use crate::scanner::{self, ScanOptions};
use crate::{organizer, sampler};
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};
use tunesort_providers::{FrameCapturer, FrameEncoder, Region, TagReader};

/// Fully-resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub roots: Vec<PathBuf>,
    pub destination: PathBuf,
    pub screenshots_dir: PathBuf,
    pub extension: String,
    pub exclude: Vec<String>,
    pub max_in_flight: usize,
    pub sampler_enabled: bool,
    pub sample_interval: Duration,
    pub region: Region,
}

/// External collaborators the run is wired with.
pub struct Providers {
    pub tags: Arc<dyn TagReader>,
    pub capturer: Arc<dyn FrameCapturer>,
    pub encoder: Arc<dyn FrameEncoder>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub report: OrganizeReport,
    pub capture_cycles: u64,
}

/// Runs organize and the background sampler to completion.
///
/// The stop signal flips exactly once, after every per-file task has
/// reached a terminal state; the coordinator then waits for the sampler's
/// in-flight cycle to observe it. Sampler failures never halt organizing.
pub async fn run(options: RunOptions, providers: Providers) -> anyhow::Result<RunSummary> {
    // An unusable destination root aborts the run before any file is
    // touched.
    tokio::fs::create_dir_all(&options.destination)
        .await
        .with_context(|| {
            format!(
                "create destination root {}",
                options.destination.display()
            )
        })?;

    let files = scanner::spawn_scan(
        options.roots.clone(),
        ScanOptions {
            extension: options.extension.clone(),
            exclude: options.exclude.clone(),
        },
    )?;

    let (stop_tx, stop_rx) = watch::channel(false);
    let sampler_task = if options.sampler_enabled {
        info!(
            "starting background sampler, one capture every {}ms",
            options.sample_interval.as_millis()
        );
        Some(tokio::spawn(sampler::run(
            stop_rx,
            providers.capturer.clone(),
            providers.encoder.clone(),
            options.screenshots_dir.clone(),
            options.region,
            options.sample_interval,
        )))
    } else {
        None
    };

    let report = organizer::organize(
        files,
        &options.destination,
        providers.tags.clone(),
        options.max_in_flight,
    )
    .await;
    info!(
        "organize complete: {} organized, {} skipped, {} failed",
        report.organized, report.skipped, report.failed
    );

    let _ = stop_tx.send(true);
    let capture_cycles = match sampler_task {
        Some(handle) => match handle.await {
            Ok(cycles) => cycles,
            Err(err) => {
                warn!("sampler task aborted: {err}");
                0
            }
        },
        None => 0,
    };

    Ok(RunSummary {
        report,
        capture_cycles,
    })
}
