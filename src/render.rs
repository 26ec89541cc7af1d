//! HTML output writer.
//!
//! Every fragment is followed by a newline. Text is written as-is: inline
//! substitutions already produced the `<b>`/`<em>` tags, so nothing is
//! escaped.

use std::io;

use crate::block::BlockEvent;

/// HTML output writer with a reusable buffer.
///
/// # Example
/// ```
/// use markdown2html::HtmlWriter;
/// use markdown2html::block::BlockEvent;
///
/// let mut writer = HtmlWriter::new();
/// writer.write_event(&BlockEvent::Heading { level: 2, text: "Hi".to_string() });
/// assert_eq!(writer.as_str(), "<h2>Hi</h2>\n");
/// ```
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(256),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Output is a little larger than the input because of the tags.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self::with_capacity(input_len + input_len / 4)
    }

    /// Create with explicit capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn newline(&mut self) {
        self.out.push(b'\n');
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as str.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only `str` data is ever written into the buffer
        unsafe { std::str::from_utf8_unchecked(&self.out) }
    }

    /// Take ownership as String.
    #[inline]
    pub fn into_string(self) -> String {
        // SAFETY: only `str` data is ever written into the buffer
        unsafe { String::from_utf8_unchecked(self.out) }
    }

    /// Write the buffered output to `sink` and clear the buffer.
    pub fn flush_to<W: io::Write>(&mut self, sink: &mut W) -> io::Result<()> {
        sink.write_all(&self.out)?;
        self.out.clear();
        Ok(())
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag with newline: `<tagname>\n`
    #[inline]
    pub fn open_tag_nl(&mut self, tag: &'static str) {
        self.write_str("<");
        self.write_str(tag);
        self.write_str(">\n");
    }

    /// Write closing tag with newline: `</tagname>\n`
    #[inline]
    pub fn close_tag_nl(&mut self, tag: &'static str) {
        self.write_str("</");
        self.write_str(tag);
        self.write_str(">\n");
    }

    /// Write heading: `<hN>text</hN>\n`
    pub fn heading(&mut self, level: usize, text: &str) {
        self.write_str("<h");
        self.write_usize(level);
        self.write_str(">");
        self.write_str(text);
        self.write_str("</h");
        self.write_usize(level);
        self.write_str(">\n");
    }

    /// Write list item: `<li>text</li>\n`
    #[inline]
    pub fn list_item(&mut self, text: &str) {
        self.write_str("<li>");
        self.write_str(text);
        self.write_str("</li>\n");
    }

    /// Write line break: `<br/>\n`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str("<br/>\n");
    }

    /// Render one block event.
    pub fn write_event(&mut self, event: &BlockEvent) {
        match event {
            BlockEvent::ParagraphStart => self.open_tag_nl("p"),
            BlockEvent::ParagraphEnd => self.close_tag_nl("p"),
            BlockEvent::LineBreak => self.line_break(),
            BlockEvent::Text(text) => {
                self.write_str(text);
                self.newline();
            }
            BlockEvent::Heading { level, text } => self.heading(*level, text),
            BlockEvent::ListStart(kind) => self.open_tag_nl(kind.tag()),
            BlockEvent::ListEnd(kind) => self.close_tag_nl(kind.tag()),
            BlockEvent::ListItem(text) => self.list_item(text),
        }
    }

    /// Render a sequence of block events.
    pub fn write_events(&mut self, events: &[BlockEvent]) {
        for event in events {
            self.write_event(event);
        }
    }

    /// Write a usize as decimal.
    fn write_usize(&mut self, mut n: usize) {
        if n == 0 {
            self.out.push(b'0');
            return;
        }

        let mut buf = [0u8; 20]; // Max digits for u64
        let mut i = buf.len();

        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        self.out.extend_from_slice(&buf[i..]);
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new()
    }
}
