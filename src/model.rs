//! Data model shared by the parser, writer and index page.

use std::collections::HashSet;

/// One sealed `eg_begin` … `eg_end` region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRecord {
    pub name: String,
    /// Captured lines as raw bytes, directive lines excluded, line
    /// terminators other than `\n` (a trailing `\r`) left in place.
    pub body: Vec<Vec<u8>>,
}

impl ExampleRecord {
    /// Snippet text as written to disk: body lines joined with `\n`,
    /// no trailing newline added.
    pub fn text(&self) -> Vec<u8> {
        self.body.join(&b'\n')
    }
}

/// Output file names in the order they were written, across all sources.
///
/// Threaded through the run by value: each writer call takes it and hands
/// it back extended.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputIndex(Vec<String>);

impl OutputIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, file_name: String) {
        self.0.push(file_name);
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.0.iter().any(|n| n == file_name)
    }

    /// Names that occur more than once, in order of their second appearance.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dups = Vec::new();
        for name in &self.0 {
            if !seen.insert(name.as_str()) && !dups.contains(&name.as_str()) {
                dups.push(name.as_str());
            }
        }
        dups
    }
}
