//! Turns the loaded config into fully-resolved run options.

use crate::paths;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tunesort_core::config::AppConfig;
use tunesort_core::lifecycle::RunOptions;

pub fn resolve(cfg: &AppConfig) -> Result<RunOptions> {
    let roots = if cfg.scan.include.is_empty() {
        paths::default_roots()?
    } else {
        cfg.scan.include.iter().map(PathBuf::from).collect()
    };
    let destination = match &cfg.destination.root {
        Some(root) => PathBuf::from(root),
        None => paths::default_destination()?,
    };
    let screenshots_dir = match &cfg.sampler.output_dir {
        Some(dir) => PathBuf::from(dir),
        None => paths::default_screenshots_dir()?,
    };

    Ok(RunOptions {
        roots,
        destination,
        screenshots_dir,
        extension: cfg.scan.extension.clone(),
        exclude: cfg.scan.exclude.clone(),
        max_in_flight: cfg.organize.max_in_flight,
        sampler_enabled: cfg.sampler.enabled,
        sample_interval: Duration::from_millis(cfg.sampler.interval_ms),
        region: cfg.sampler.region.clone().into(),
    })
}
