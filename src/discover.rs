//! Source file discovery.

use crate::config::SOURCE_EXTENSION;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// List `*.cpp` files directly inside `dir` (non-recursive).
///
/// Sorted so that the listing page comes out the same on every run. A
/// missing directory is not an error, it just has nothing to extract.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::warn!("example source directory not found: {}", dir.display());
        return Ok(Vec::new());
    }

    let escaped = glob::Pattern::escape(&dir.to_string_lossy());
    let pattern = format!("{}/*.{}", escaped, SOURCE_EXTENSION);
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|entry| match entry {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!("skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}
