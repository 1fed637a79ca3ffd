//! egdoc — extract `//$` annotated example regions for the API docs.
//!
//! Scans `test/examples/*.cpp` under the project root for regions like
//!
//! ```text
//! //$ eg_begin,name=intro
//! int x = 1;
//! //$ eg_end
//! ```
//!
//! writes each one to `doc/egs/eg_<name>.cpp` and lists them all in
//! `doc/api/pages/_examples.hpp`. Every run rescans and rewrites everything.

mod config;
mod discover;
mod index_page;
mod model;
mod parser;
mod writer;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use config::Layout;
use model::OutputIndex;
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "egdoc",
    about = "Extract annotated example regions into standalone files and an index page"
)]
struct Cli {
    /// Project root containing test/examples and doc/
    #[arg(default_value = ".")]
    root: PathBuf,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let layout = Layout::from_root(&cli.root);
    run(&layout)?;
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// Full pipeline: discover, extract and write each file, then the index page.
fn run(layout: &Layout) -> Result<OutputIndex> {
    tracing::info!("Root dir: {}", layout.root.display());
    tracing::info!("Doc examples source dir: {}", layout.src_dir.display());
    tracing::info!("Doc examples use dir: {}", layout.out_dir.display());

    if !layout.out_dir.is_dir() {
        fs::create_dir_all(&layout.out_dir).with_context(|| {
            format!(
                "failed to create output directory: {}",
                layout.out_dir.display()
            )
        })?;
        tracing::info!("Created output dir: {}", layout.out_dir.display());
    }

    let sources = discover::discover(&layout.src_dir)?;

    let mut index = OutputIndex::new();
    for path in &sources {
        index = process_file(path, &layout.out_dir, index)?;
    }

    let dups = index.duplicates();
    if !dups.is_empty() {
        tracing::warn!("duplicate example names, last write kept: {}", dups.join(", "));
    }

    index_page::write_index(&layout.index_page, &index)?;
    if index.is_empty() {
        tracing::warn!("no examples found in {} source file(s)", sources.len());
    } else {
        tracing::info!(
            "{} example(s) from {} source file(s)",
            index.len(),
            sources.len()
        );
    }
    Ok(index)
}

/// Extract one source file's examples and hand back the extended index.
fn process_file(path: &Path, out_dir: &Path, index: OutputIndex) -> Result<OutputIndex> {
    let fname = path.file_name().unwrap_or(path.as_os_str()).to_string_lossy();
    tracing::info!("Processing {}", fname);

    // Raw bytes: sources need not be UTF-8 and line endings are kept as is.
    let content = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let records = {
        let _span = tracing::warn_span!("parse", file = %fname).entered();
        parser::parse(&content)
    };
    if records.is_empty() {
        tracing::debug!("no examples in {}", fname);
    }

    let index = writer::write_examples(out_dir, &records, index)?;
    tracing::debug!("Finished {}", fname);
    Ok(index)
}
