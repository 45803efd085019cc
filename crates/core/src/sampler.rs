//! Cooperative background capture loop.

use anyhow::Context;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};
use tunesort_providers::{FrameCapturer, FrameEncoder, Region};

/// Captures and persists frames until `stop` flips to true, checking the
/// signal at the top of each cycle. A cycle already in flight when the
/// signal is raised runs to completion, so the loop may overrun by at most
/// one cycle. Cycle failures are logged and never terminate the loop.
///
/// Returns the number of successful cycles.
pub async fn run(
    mut stop: watch::Receiver<bool>,
    capturer: Arc<dyn FrameCapturer>,
    encoder: Arc<dyn FrameEncoder>,
    output_dir: PathBuf,
    region: Region,
    interval: Duration,
) -> u64 {
    let mut cycles = 0u64;
    while !*stop.borrow() {
        // Sequence numbers start at 1 and advance only on success; a
        // failed cycle retries under the same number.
        let sequence = cycles + 1;
        match sample_once(
            capturer.as_ref(),
            encoder.as_ref(),
            &output_dir,
            region,
            sequence,
        )
        .await
        {
            Ok(path) => {
                cycles = sequence;
                info!("capture {} saved to {}", sequence, path.display());
            }
            Err(err) => warn!("capture cycle failed: {err:#}"),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = stop.changed() => {
                // A dropped sender means no stop can ever arrive; treat
                // it as stopped.
                if changed.is_err() {
                    break;
                }
            }
        }
    }
    cycles
}

async fn sample_once(
    capturer: &dyn FrameCapturer,
    encoder: &dyn FrameEncoder,
    output_dir: &Path,
    region: Region,
    sequence: u64,
) -> anyhow::Result<PathBuf> {
    let frame = capturer.capture(region).await.context("capture frame")?;
    let encoded = encoder.encode(&frame).context("encode frame")?;
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_dir.join(format!("screenshot_{sequence}.png"));
    tokio::fs::write(&path, &encoded)
        .await
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
