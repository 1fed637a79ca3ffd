//! Fixed project layout.
//!
//! Everything except the project root is decided at build time. The root is
//! resolved once in `main` and every other path hangs off it.

use std::path::{Path, PathBuf};

/// Annotated example sources, relative to the project root.
pub const EXAMPLES_SRC_DIR: &str = "test/examples";

/// Extension (without the dot) of files scanned for regions.
pub const SOURCE_EXTENSION: &str = "cpp";

/// Where extracted example files are written, relative to the project root.
pub const EXAMPLES_OUT_DIR: &str = "doc/egs";

/// Generated listing page, relative to the project root.
pub const INDEX_PAGE: &str = "doc/api/pages/_examples.hpp";

/// Marks a directive line once leading whitespace is trimmed.
pub const SENTINEL: &str = "//$";

pub const OUTPUT_PREFIX: &str = "eg_";
pub const OUTPUT_SUFFIX: &str = ".cpp";

/// Static wrapper for the listing page. `INDEX_PLACEHOLDER` is replaced by
/// one reference line per example file.
pub const INDEX_TEMPLATE: &str = "\n/**\n\nEGS\n\n */\n";
pub const INDEX_PLACEHOLDER: &str = "EGS";

/// Doxygen command emitted in front of each example file name.
pub const INDEX_REFERENCE: &str = "\\example";

/// Paths for one run, resolved against a project root.
#[derive(Debug, Clone)]
pub struct Layout {
    pub root: PathBuf,
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
    pub index_page: PathBuf,
}

impl Layout {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            src_dir: root.join(EXAMPLES_SRC_DIR),
            out_dir: root.join(EXAMPLES_OUT_DIR),
            index_page: root.join(INDEX_PAGE),
        }
    }
}

/// Output file name for an example called `name`.
/// "intro" → "eg_intro.cpp"
pub fn output_file_name(name: &str) -> String {
    format!("{}{}{}", OUTPUT_PREFIX, name, OUTPUT_SUFFIX)
}
