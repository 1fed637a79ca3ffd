//! Generated listing page for the API docs.
//!
//! One `\example eg_<name>.cpp` line per written file, substituted into a
//! fixed Doxygen comment block.

use crate::config::{INDEX_PLACEHOLDER, INDEX_REFERENCE, INDEX_TEMPLATE};
use crate::model::OutputIndex;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn render_index(index: &OutputIndex) -> String {
    let lines: Vec<String> = index
        .names()
        .iter()
        .map(|name| format!("{} {}", INDEX_REFERENCE, name))
        .collect();
    INDEX_TEMPLATE.replace(INDEX_PLACEHOLDER, &lines.join("\n"))
}

/// Render and write the listing page, creating its directory if needed.
pub fn write_index(path: &Path, index: &OutputIndex) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, render_index(index))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Written examples list {}", path.display());
    Ok(())
}
