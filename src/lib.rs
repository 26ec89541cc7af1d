//! markdown2html: line-by-line Markdown to HTML converter
//!
//! Converts a small Markdown dialect in a single forward pass, writing the
//! HTML for each input line as soon as the line has been read.
//!
//! # Supported syntax
//! - `# Heading` (any number of `#`, followed by a space)
//! - `- item` unordered lists, `* item` ordered lists
//! - paragraphs, with `<br/>` between consecutive lines
//! - inline `**bold**`, `__emphasis__`, `[[md5 digest]]`, `((strip c))`
//!
//! # Design
//! - No AST: one line in, a handful of block events out
//! - No regex: delimiters are found by byte scanning
//! - One open block at a time, tracked by [`BlockState`]

pub mod block;
pub mod cursor;
pub mod error;
pub mod inline;
pub mod render;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

// Re-export primary types
pub use block::{BlockEvent, BlockState, LineTranscoder, ListKind};
pub use error::Error;
pub use render::HtmlWriter;

/// Summary of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Number of input lines processed.
    pub lines: usize,
}

/// Convert Markdown to HTML.
///
/// # Example
/// ```
/// let html = markdown2html::to_html("# Hello\n\nWorld");
/// assert_eq!(html, "<h1>Hello</h1>\n<p>\nWorld\n</p>\n");
/// ```
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    let mut transcoder = LineTranscoder::new();
    let mut events = Vec::with_capacity(8);

    for line in input.split_inclusive('\n').map(strip_line_ending) {
        transcoder.push_line(line, &mut events);
        writer.write_events(&events);
        events.clear();
    }
    transcoder.finish(&mut events);
    writer.write_events(&events);

    writer.into_string()
}

/// Convert Markdown read from `reader`, writing HTML to `writer`.
///
/// The HTML for each line is handed to `writer` before the next line is
/// read. Lines end at `\n`; a trailing `\r` is dropped.
pub fn convert<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<Stats, Error> {
    let mut transcoder = LineTranscoder::new();
    let mut html = HtmlWriter::new();
    let mut events = Vec::with_capacity(8);
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        transcoder.push_line(strip_line_ending(&line), &mut events);
        html.write_events(&events);
        events.clear();
        html.flush_to(&mut writer)?;
    }

    transcoder.finish(&mut events);
    html.write_events(&events);
    html.flush_to(&mut writer)?;
    writer.flush()?;

    Ok(Stats {
        lines: transcoder.lines(),
    })
}

/// Convert the Markdown file at `input` into a new HTML file at `output`.
///
/// Fails with [`Error::MissingFile`] before touching `output` if `input`
/// is not an existing regular file.
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Stats, Error> {
    let input = input.as_ref();
    let output = output.as_ref();
    if !input.is_file() {
        return Err(Error::MissingFile {
            path: input.to_path_buf(),
        });
    }

    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    let stats = convert(reader, writer)?;

    log::info!(
        "converted {} lines from {} to {}",
        stats.lines,
        input.display(),
        output.display()
    );
    Ok(stats)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("a\n"), "a");
        assert_eq!(strip_line_ending("a\r\n"), "a");
        assert_eq!(strip_line_ending("a"), "a");
        assert_eq!(strip_line_ending("\n"), "");
    }

    #[test]
    fn test_convert_matches_to_html() {
        let input = "# T\n- a\n- b\ntext\nmore\n\n* x\n";
        let mut out = Vec::new();
        let stats = convert(input.as_bytes(), &mut out).unwrap();
        assert_eq!(stats.lines, 7);
        assert_eq!(String::from_utf8(out).unwrap(), to_html(input));
    }

    #[test]
    fn test_convert_crlf() {
        let mut out = Vec::new();
        convert("a\r\nb\r\n".as_bytes(), &mut out).unwrap();
        assert_eq!(out, b"<p>\na\n<br/>\nb\n</p>\n");
    }

    #[test]
    fn test_trailing_carriage_return_agrees() {
        for input in ["a\r", "a\r\nb\r", "x\n\r"] {
            let mut out = Vec::new();
            convert(input.as_bytes(), &mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), to_html(input));
        }
        assert_eq!(to_html("a\r"), "<p>\na\n</p>\n");
    }

    #[test]
    fn test_convert_empty() {
        let mut out = Vec::new();
        let stats = convert("".as_bytes(), &mut out).unwrap();
        assert_eq!(stats, Stats { lines: 0 });
        assert!(out.is_empty());
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        let err = convert_file(dir.path().join("absent.md"), &output).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_file_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.html");
        let err = convert_file(dir.path(), &output).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
    }

    #[test]
    fn test_convert_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("README.md");
        let output = dir.path().join("README.html");
        std::fs::write(&input, "# Title\n- one\n").unwrap();
        let stats = convert_file(&input, &output).unwrap();
        assert_eq!(stats.lines, 2);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "<h1>Title</h1>\n<ul>\n<li>one</li>\n</ul>\n"
        );
    }
}
