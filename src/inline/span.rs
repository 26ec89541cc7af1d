//! Delimiter-bounded span scanning.
//!
//! A span runs from an opening delimiter to the *first* closing delimiter
//! after it (shortest match). Scanning resumes after the closing delimiter,
//! so spans never overlap. There is no backtracking: once an opener has no
//! closer to its right, no later opener can have one either.

use crate::cursor::Cursor;

/// A matched span within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Offset of the opening delimiter.
    pub start: usize,
    /// Offset one past the closing delimiter.
    pub end: usize,
    /// Text between the delimiters.
    pub inner: &'a str,
}

/// Iterator over the spans of one delimiter pair in a line.
///
/// # Example
/// ```
/// use markdown2html::inline::Spans;
///
/// let spans: Vec<_> = Spans::new("[[a]] and [[b]]", b"[[", b"]]")
///     .map(|s| s.inner)
///     .collect();
/// assert_eq!(spans, ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct Spans<'a> {
    line: &'a str,
    open: &'static [u8],
    close: &'static [u8],
    pos: usize,
}

impl<'a> Spans<'a> {
    pub fn new(line: &'a str, open: &'static [u8], close: &'static [u8]) -> Self {
        Self {
            line,
            open,
            close,
            pos: 0,
        }
    }
}

impl<'a> Iterator for Spans<'a> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Span<'a>> {
        let cursor = Cursor::new_at(self.line, self.pos);
        let Some(open_rel) = cursor.find(self.open) else {
            self.pos = self.line.len();
            return None;
        };
        let start = self.pos + open_rel;

        let inner_start = start + self.open.len();
        let cursor = Cursor::new_at(self.line, inner_start);
        let Some(close_rel) = cursor.find(self.close) else {
            self.pos = self.line.len();
            return None;
        };
        let inner_end = inner_start + close_rel;
        let end = inner_end + self.close.len();
        self.pos = end;

        Some(Span {
            start,
            end,
            inner: &self.line[inner_start..inner_end],
        })
    }
}

impl std::iter::FusedIterator for Spans<'_> {}
