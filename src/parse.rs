//! Streaming line-by-line parser.
//!
//! Each physical line is trimmed of ASCII whitespace and classified by shape
//! alone — no lookahead, no backtracking:
//!
//! - empty after trim → skipped
//! - first character `#` → comment, skipped
//! - at least 3 bytes, first `[` and last `]` → section header; the text
//!   between the brackets becomes the new section's name and the section
//!   becomes the target for subsequent items
//! - anything else before the first header → [`IniError::Stray`]
//! - anything else → a `key=value` item, split at the **first** `=`
//!   ([`IniError::MissingDelimiter`] if there is none)
//!
//! Two deliberate quirks of the format are preserved as observed behavior:
//! the header gate is purely shape-based, so `[ ]` parses as a section whose
//! name is a single space; and key/value are taken verbatim from the trimmed
//! line, so `key = value` yields key `"key "` and value `" value"`.
//!
//! On any error the partially built tree is dropped before the caller sees
//! it — `parse` either returns a complete [`ConfigFile`] or nothing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::IniError;
use crate::model::{ConfigFile, Item, Section};

impl ConfigFile {
    /// Parse the configuration file at `path`.
    ///
    /// Reads the file line by line; an open or read failure maps to
    /// [`IniError::Io`], a malformed line to the matching structural error
    /// with its 1-based line number.
    pub fn parse(path: impl AsRef<Path>) -> Result<ConfigFile, IniError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| IniError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path.to_path_buf(), BufReader::new(file))
    }

    /// Parse in-memory text. `path` is only a label for diagnostics.
    pub fn parse_str(path: impl Into<PathBuf>, content: &str) -> Result<ConfigFile, IniError> {
        Self::from_reader(path.into(), content.as_bytes())
    }

    /// Streaming core shared by [`parse`](ConfigFile::parse) and
    /// [`parse_str`](ConfigFile::parse_str). The line buffer is reused
    /// across iterations, so lines can be arbitrarily long.
    pub fn from_reader(
        path: impl Into<PathBuf>,
        mut reader: impl BufRead,
    ) -> Result<ConfigFile, IniError> {
        let mut parser = Parser::new(path.into());
        let mut buf = String::new();
        loop {
            buf.clear();
            let count = reader.read_line(&mut buf).map_err(|source| IniError::Io {
                path: parser.file.path().to_path_buf(),
                source,
            })?;
            if count == 0 {
                break;
            }
            parser.feed(&buf)?;
        }
        Ok(parser.finish())
    }
}

/// Incremental parse state: the tree built so far plus a line counter.
/// The "current section" is always the last one appended.
struct Parser {
    file: ConfigFile,
    line: usize,
}

impl Parser {
    fn new(path: PathBuf) -> Self {
        Self {
            file: ConfigFile::new(path),
            line: 0,
        }
    }

    fn feed(&mut self, raw: &str) -> Result<(), IniError> {
        self.line += 1;
        let line = raw.trim_ascii();

        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        if line.len() >= 3 && line.starts_with('[') && line.ends_with(']') {
            let name = &line[1..line.len() - 1];
            self.file.push_section(Section::new(name));
            return Ok(());
        }
        let Some(section) = self.file.current_section() else {
            return Err(IniError::Stray {
                path: self.file.path().to_path_buf(),
                line: self.line,
            });
        };
        let Some(eq) = line.find('=') else {
            return Err(IniError::MissingDelimiter {
                path: self.file.path().to_path_buf(),
                line: self.line,
            });
        };
        section.push_item(Item::new(&line[..eq], &line[eq + 1..]));
        Ok(())
    }

    fn finish(self) -> ConfigFile {
        self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(content: &str) -> Result<ConfigFile, IniError> {
        ConfigFile::parse_str("test.ini", content)
    }

    #[test]
    fn minimal_file() {
        let file = parse("[S]\nK=V\n").unwrap();
        assert_eq!(file.sections().len(), 1);
        let s = &file.sections()[0];
        assert_eq!(s.name(), "S");
        assert_eq!(s.items()[0].name(), "K");
        assert_eq!(s.items()[0].value(), "V");
    }

    #[test]
    fn blank_lines_and_comments_skipped() {
        let file = parse("\n   \n# comment\n[S]\n  # indented comment\n\nK=V\n").unwrap();
        assert_eq!(file.sections().len(), 1);
        assert_eq!(file.sections()[0].items().len(), 1);
    }

    #[test]
    fn line_trim_is_whole_line_only() {
        // Trimming applies to the whole line; the split at '=' re-trims nothing.
        let file = parse("[S]\n  key = value  \n").unwrap();
        let item = &file.sections()[0].items()[0];
        assert_eq!(item.name(), "key ");
        assert_eq!(item.value(), " value");
    }

    #[test]
    fn value_may_be_empty() {
        let file = parse("[S]\nkey=\n").unwrap();
        assert_eq!(file.sections()[0].items()[0].value(), "");
    }

    #[test]
    fn key_may_be_empty() {
        let file = parse("[S]\n=v\n").unwrap();
        let item = &file.sections()[0].items()[0];
        assert_eq!(item.name(), "");
        assert_eq!(item.value(), "v");
    }

    #[test]
    fn value_keeps_extra_equals() {
        let file = parse("[S]\nurl=http://host?a=b\n").unwrap();
        assert_eq!(file.sections()[0].items()[0].value(), "http://host?a=b");
    }

    #[test]
    fn header_gate_is_three_bytes() {
        // "[x]" is the shortest header. "[]" misses the 3-byte gate, falls
        // through to the item classifier, and is stray before any section.
        let file = parse("[x]\n").unwrap();
        assert_eq!(file.sections()[0].name(), "x");

        let err = parse("[]\n").unwrap_err();
        assert!(matches!(err, IniError::Stray { line: 1, .. }));
    }

    #[test]
    fn whitespace_only_section_name_parses() {
        let file = parse("[ ]\nk=v\n").unwrap();
        assert_eq!(file.sections()[0].name(), " ");
    }

    #[test]
    fn header_with_trailing_text_is_not_a_header() {
        let err = parse("[S] extra\n").unwrap_err();
        assert!(matches!(err, IniError::Stray { line: 1, .. }));
    }

    #[test]
    fn items_follow_most_recent_section() {
        let file = parse("[a]\nk=1\n[b]\nk=2\n").unwrap();
        assert_eq!(file.sections()[0].items()[0].value(), "1");
        assert_eq!(file.sections()[1].items()[0].value(), "2");
    }

    #[test]
    fn duplicate_headers_each_get_their_items() {
        let file = parse("[dup]\nK=first\n[dup]\nK=second\n").unwrap();
        assert_eq!(file.sections().len(), 2);
        assert_eq!(file.sections()[1].items()[0].value(), "second");
    }

    #[test]
    fn item_before_any_section_is_stray() {
        let err = parse("k=v\n[S]\n").unwrap_err();
        match err {
            IniError::Stray { path, line } => {
                assert_eq!(path, PathBuf::from("test.ini"));
                assert_eq!(line, 1);
            }
            other => panic!("expected Stray, got {other:?}"),
        }
    }

    #[test]
    fn stray_line_number_skips_blanks_correctly() {
        // Line numbers count physical lines, including the skipped ones.
        let err = parse("# header comment\n\nstray\n").unwrap_err();
        assert!(matches!(err, IniError::Stray { line: 3, .. }));
    }

    #[test]
    fn missing_equals_aborts_mid_section() {
        let err = parse("[A]\ngood=1\nbroken line\n").unwrap_err();
        match err {
            IniError::MissingDelimiter { line, .. } => assert_eq!(line, 3),
            other => panic!("expected MissingDelimiter, got {other:?}"),
        }
    }

    #[test]
    fn no_trailing_newline_still_parses_last_line() {
        let file = parse("[S]\nK=V").unwrap();
        assert_eq!(file.sections()[0].items()[0].value(), "V");
    }

    #[test]
    fn empty_input_yields_empty_file() {
        let file = parse("").unwrap();
        assert!(file.sections().is_empty());
    }

    // --- filesystem paths ---

    #[test]
    fn parse_reads_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.ini");
        fs::write(&path, "[net]\nport=8080\n").unwrap();

        let file = ConfigFile::parse(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.sections()[0].items()[0].value(), "8080");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.ini");
        let err = ConfigFile::parse(&path).unwrap_err();
        match err {
            IniError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_io_error() {
        let err = ConfigFile::from_reader("bad.ini", &b"[S]\nk=\xff\xfe\n"[..]).unwrap_err();
        assert!(matches!(err, IniError::Io { .. }));
    }

    #[test]
    fn error_path_labels_parse_str_input() {
        let err = ConfigFile::parse_str("inline.ini", "stray\n").unwrap_err();
        assert!(err.to_string().starts_with("inline.ini:1:"));
    }
}
