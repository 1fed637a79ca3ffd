//! Example file output.

use crate::config::output_file_name;
use crate::model::{ExampleRecord, OutputIndex};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write each record to `out_dir/eg_<name>.cpp` and append its file name to
/// `index`. Existing files are overwritten.
pub fn write_examples(
    out_dir: &Path,
    records: &[ExampleRecord],
    mut index: OutputIndex,
) -> Result<OutputIndex> {
    for eg in records {
        let file_name = output_file_name(&eg.name);
        let out_path = out_dir.join(&file_name);

        if index.contains(&file_name) {
            tracing::warn!("{} written more than once, keeping the last one", file_name);
        }
        tracing::info!("Writing example file {}", out_path.display());
        fs::write(&out_path, eg.text())
            .with_context(|| format!("failed to write {}", out_path.display()))?;

        index.push(file_name);
    }
    Ok(index)
}
