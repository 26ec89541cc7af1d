//! Line classification.
//!
//! Two different views of a line are used. The *raw* line (before inline
//! substitution) decides which open blocks get closed; the *substituted*
//! line decides what the line itself becomes.

use crate::cursor::Cursor;

use super::event::ListKind;

/// What a substituted line turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `#`.. followed by a space.
    Heading { level: usize, text: &'a str },
    /// Line starting with `-`.
    UnorderedItem(&'a str),
    /// Line starting with `* `.
    OrderedItem(&'a str),
    /// Empty or whitespace-only.
    Blank,
    /// Anything else: paragraph content.
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    /// Classify a line by its leading characters.
    ///
    /// # Example
    /// ```
    /// use markdown2html::block::LineKind;
    ///
    /// assert_eq!(LineKind::classify("## Two"), LineKind::Heading { level: 2, text: "Two" });
    /// assert_eq!(LineKind::classify("-  a "), LineKind::UnorderedItem("a"));
    /// assert_eq!(LineKind::classify("*no space"), LineKind::Text("*no space"));
    /// ```
    pub fn classify(line: &'a str) -> Self {
        if is_blank(line) {
            return Self::Blank;
        }
        if let Some(heading) = heading(line) {
            return heading;
        }

        let mut cursor = Cursor::new(line);
        if cursor.eat_bytes(ListKind::Unordered.marker().as_bytes()) {
            return Self::UnorderedItem(cursor.rest().trim());
        }
        if cursor.eat_bytes(ListKind::Ordered.marker().as_bytes()) {
            return Self::OrderedItem(cursor.rest().trim());
        }

        Self::Text(line.trim())
    }
}

fn heading(line: &str) -> Option<LineKind<'_>> {
    let mut cursor = Cursor::new(line);
    let level = cursor.skip_while(|b| b == b'#');
    if level == 0 || !cursor.eat(b' ') {
        return None;
    }
    Some(LineKind::Heading {
        level,
        text: cursor.rest().trim(),
    })
}

/// Whether a line has no visible content.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Whether a raw line keeps an open list of `kind` going.
#[inline]
pub fn continues_list(kind: ListKind, raw: &str) -> bool {
    raw.starts_with(kind.marker())
}

/// Whether a raw line ends an open paragraph.
///
/// The ordered-list check is `* ,`, not the `* ` list marker, so an
/// ordered item directly after paragraph text does not close it.
#[inline]
pub fn breaks_paragraph(raw: &str) -> bool {
    raw.starts_with('-') || raw.starts_with("* ,") || raw.starts_with('#') || is_blank(raw)
}
