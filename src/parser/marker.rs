//! Region extraction — line-by-line state machine over one source file.
//!
//! Text lines are copied byte for byte while a named region is open. Lines
//! split on `\n` only, so a CRLF source keeps its `\r`. Directive lines are
//! never copied. Records come out in the order their `eg_end`
//! lines appear.

use super::directive::{parse_directive, Command};
use crate::model::ExampleRecord;

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Capturing {
        name: Option<String>,
        lines: Vec<Vec<u8>>,
    },
}

#[derive(Default)]
struct ParserState {
    records: Vec<ExampleRecord>,
    state: State,
    /// 1-based number of the line being processed
    line_no: usize,
}

impl ParserState {
    fn command(&mut self, cmd: Command) {
        match cmd {
            Command::Begin => self.begin(),
            Command::End => self.end(),
            Command::Name(name) => self.name(name),
            Command::BadName(value) => {
                tracing::warn!(line = self.line_no, "ignoring invalid example name {:?}", value);
            }
            Command::Unknown(token) => {
                tracing::warn!(line = self.line_no, "ignoring unknown directive {:?}", token);
            }
        }
    }

    fn begin(&mut self) {
        if let State::Capturing { name, .. } = &self.state {
            tracing::warn!(
                line = self.line_no,
                "eg_begin inside open region {}, discarding it",
                display_name(name.as_deref())
            );
        }
        self.state = State::Capturing {
            name: None,
            lines: Vec::new(),
        };
    }

    fn end(&mut self) {
        match std::mem::take(&mut self.state) {
            State::Idle => {
                tracing::warn!(line = self.line_no, "eg_end without open region");
            }
            State::Capturing { name: Some(name), lines } => {
                self.records.push(ExampleRecord { name, body: lines });
            }
            State::Capturing { name: None, .. } => {
                tracing::warn!(line = self.line_no, "dropping region closed without a name");
            }
        }
    }

    fn name(&mut self, value: String) {
        match &mut self.state {
            State::Capturing { name, .. } => *name = Some(value),
            State::Idle => {
                tracing::warn!(line = self.line_no, "name={} outside a region, ignored", value);
            }
        }
    }

    fn text(&mut self, line: &[u8]) {
        // Lines before the region gets its name are dropped.
        if let State::Capturing { name: Some(_), lines } = &mut self.state {
            lines.push(line.to_vec());
        }
    }

    fn finish(self) -> Vec<ExampleRecord> {
        if let State::Capturing { name, .. } = &self.state {
            tracing::warn!(
                "unterminated region {} at end of file, dropped",
                display_name(name.as_deref())
            );
        }
        self.records
    }
}

fn display_name(name: Option<&str>) -> String {
    match name {
        Some(n) => format!("'{}'", n),
        None => "(unnamed)".to_string(),
    }
}

/// Extract every sealed example region from one file's raw contents.
///
/// The empty piece after a final `\n` can only land in a region that is
/// still open at end of file, and that region is dropped.
pub fn parse(content: &[u8]) -> Vec<ExampleRecord> {
    let mut st = ParserState::default();
    for (idx, line) in content.split(|&b| b == b'\n').enumerate() {
        st.line_no = idx + 1;
        match parse_directive(line) {
            Some(commands) => {
                for cmd in commands {
                    st.command(cmd);
                }
            }
            None => st.text(line),
        }
    }
    st.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eg(name: &str, body: &[&str]) -> ExampleRecord {
        ExampleRecord {
            name: name.to_string(),
            body: body.iter().map(|s| s.as_bytes().to_vec()).collect(),
        }
    }

    #[test]
    fn single_region() {
        let src = "//$ eg_begin,name=intro\nint x = 1;\n\n//$ eg_end\n";
        assert_eq!(parse(src.as_bytes()), vec![eg("intro", &["int x = 1;", ""])]);
    }

    #[test]
    fn no_directives_no_records() {
        let src = "#include <x>\nint main() {\n    return 0;\n}\n";
        assert!(parse(src.as_bytes()).is_empty());
        assert!(parse(b"").is_empty());
    }

    #[test]
    fn text_outside_regions_dropped() {
        let src = "\
before
//$ eg_begin, name=a
inside
//$ eg_end
after";
        assert_eq!(parse(src.as_bytes()), vec![eg("a", &["inside"])]);
    }

    #[test]
    fn whitespace_preserved_verbatim() {
        let src = "    //$ eg_begin,name=ws\n    indented line  \n\t\n   \n  //$ eg_end";
        assert_eq!(
            parse(src.as_bytes()),
            vec![eg("ws", &["    indented line  ", "\t", "   "])]
        );
    }

    #[test]
    fn sequential_regions_in_order() {
        let src = "\
//$ eg_begin,name=A
a
//$ eg_end
mid
//$ eg_begin,name=B
b
//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("A", &["a"]), eg("B", &["b"])]);
    }

    #[test]
    fn unterminated_region_dropped() {
        let src = "\
//$ eg_begin,name=done
ok
//$ eg_end
//$ eg_begin,name=open
never closed";
        assert_eq!(parse(src.as_bytes()), vec![eg("done", &["ok"])]);
    }

    #[test]
    fn stray_end_is_noop() {
        let src = "//$ eg_end\n//$ eg_begin,name=a\nx\n//$ eg_end\n//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("a", &["x"])]);
    }

    #[test]
    fn begin_while_capturing_discards_previous() {
        let src = "\
//$ eg_begin,name=first
lost
//$ eg_begin,name=second
kept
//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("second", &["kept"])]);
    }

    #[test]
    fn name_on_separate_directive_line() {
        let src = "\
//$ eg_begin
dropped, no name yet
//$ name=late
kept
//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("late", &["kept"])]);
    }

    #[test]
    fn later_name_replaces_earlier() {
        let src = "//$ eg_begin,name=a,name=b\nx\n//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("b", &["x"])]);
    }

    #[test]
    fn name_while_idle_ignored() {
        let src = "//$ name=orphan\ntext\n//$ eg_begin\nmore\n//$ eg_end";
        assert!(parse(src.as_bytes()).is_empty());
    }

    #[test]
    fn unnamed_region_dropped() {
        let src = "//$ eg_begin\nx\n//$ eg_end\n//$ eg_begin,name=n\ny\n//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("n", &["y"])]);
    }

    #[test]
    fn malformed_commands_skipped_rest_of_line_applies() {
        let src = "//$ eg_begin, bogus, name=, name=good\nx\n//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("good", &["x"])]);
    }

    #[test]
    fn begin_and_end_on_one_line_seals_empty_body() {
        let src = "//$ eg_begin,name=e,eg_end\ntext";
        assert_eq!(parse(src.as_bytes()), vec![eg("e", &[])]);
    }

    #[test]
    fn other_directive_lines_not_captured() {
        let src = "//$ eg_begin,name=a\none\n//$ something_else\ntwo\n//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("a", &["one", "two"])]);
    }

    #[test]
    fn crlf_line_endings_kept() {
        let src = "//$ eg_begin,name=w\r\nint a;\r\nint b;\r\n//$ eg_end\r\n";
        let records = parse(src.as_bytes());
        assert_eq!(records, vec![eg("w", &["int a;\r", "int b;\r"])]);
        assert_eq!(records[0].text(), b"int a;\r\nint b;\r");
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let src = b"// caf\xe9 outside\n//$ eg_begin,name=latin\n// na\xefve\n//$ eg_end\n";
        let records = parse(src);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "latin");
        assert_eq!(records[0].body, vec![b"// na\xefve".to_vec()]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let src = "//$ eg_begin,name=a\nx\n//$ eg_end\n";
        assert_eq!(parse(src.as_bytes()), vec![eg("a", &["x"])]);
        let unterminated = "//$ eg_begin,name=a\nx\n";
        assert!(parse(unterminated.as_bytes()).is_empty());
    }

    #[test]
    fn same_name_twice_in_one_file_both_emitted() {
        let src = "//$ eg_begin,name=a\n1\n//$ eg_end\n//$ eg_begin,name=a\n2\n//$ eg_end";
        assert_eq!(parse(src.as_bytes()), vec![eg("a", &["1"]), eg("a", &["2"])]);
    }
}
