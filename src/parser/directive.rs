//! `//$` directive lines and the commands they carry.
//!
//! A directive line is any line whose trimmed text starts with the sentinel.
//! The rest of the line is a comma-separated command list:
//!
//! ```text
//! //$ eg_begin,name=intro
//! //$ eg_end
//! ```

use crate::config::SENTINEL;
use regex::Regex;
use std::sync::LazyLock;

// Names become part of an output file name, so no separators and no leading dot.
static RE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.=-]*$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `eg_begin`
    Begin,
    /// `eg_end`
    End,
    /// `name=<value>` with a usable value
    Name(String),
    /// `name=` with an empty or unsafe value (raw value kept for diagnostics)
    BadName(String),
    /// Anything else
    Unknown(String),
}

/// Split a line into commands if it is a directive line.
///
/// Returns `None` for ordinary text. Empty tokens (`//$`, `a,,b`) are skipped.
/// Lines are raw bytes; only directive lines are decoded, lossily.
pub fn parse_directive(line: &[u8]) -> Option<Vec<Command>> {
    let rest = line.trim_ascii().strip_prefix(SENTINEL.as_bytes())?;
    Some(
        String::from_utf8_lossy(rest)
            .trim()
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(parse_command)
            .collect(),
    )
}

fn parse_command(token: &str) -> Command {
    match token {
        "eg_begin" => Command::Begin,
        "eg_end" => Command::End,
        _ => match token.strip_prefix("name=") {
            Some(value) => {
                let value = value.trim();
                if RE_NAME.is_match(value) {
                    Command::Name(value.to_string())
                } else {
                    Command::BadName(value.to_string())
                }
            }
            None => Command::Unknown(token.to_string()),
        },
    }
}
