//! Default filesystem locations resolved from the user environment.

use anyhow::Context;
use std::path::PathBuf;

/// Discovery roots when none are configured: desktop + documents, or the
/// home directory on machines without XDG user dirs.
pub fn default_roots() -> anyhow::Result<Vec<PathBuf>> {
    let mut roots = Vec::new();
    if let Some(desktop) = dirs::desktop_dir() {
        roots.push(desktop);
    }
    if let Some(documents) = dirs::document_dir() {
        roots.push(documents);
    }
    if roots.is_empty() {
        roots.push(home()?);
    }
    Ok(roots)
}

pub fn default_destination() -> anyhow::Result<PathBuf> {
    Ok(downloads()?.join("Music"))
}

pub fn default_screenshots_dir() -> anyhow::Result<PathBuf> {
    Ok(downloads()?.join("Screenshots"))
}

fn downloads() -> anyhow::Result<PathBuf> {
    if let Some(dir) = dirs::download_dir() {
        return Ok(dir);
    }
    Ok(home()?.join("Downloads"))
}

fn home() -> anyhow::Result<PathBuf> {
    dirs::home_dir().context("cannot determine home directory")
}
