//! Byte cursor over a single line.
//!
//! Delimiters and block markers are all ASCII, so scanning works on bytes
//! and only ever splits the line at ASCII boundaries, which keeps every
//! produced offset a valid `str` index.

use memchr::memmem;

/// A forward-only cursor for scanning one line.
///
/// # Example
/// ```
/// use markdown2html::cursor::Cursor;
///
/// let mut cursor = Cursor::new("### Title");
/// assert_eq!(cursor.skip_while(|b| b == b'#'), 3);
/// assert!(cursor.eat(b' '));
/// assert_eq!(cursor.rest(), "Title");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of `input`.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Create a cursor starting at an offset.
    #[inline]
    pub fn new_at(input: &'a str, offset: usize) -> Self {
        debug_assert!(offset <= input.len());
        Self { input, pos: offset }
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    /// Skip while predicate is true, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consume a specific byte if present.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a specific byte sequence if present.
    #[inline]
    pub fn eat_bytes(&mut self, bytes: &[u8]) -> bool {
        if self.remaining_bytes().starts_with(bytes) {
            self.pos += bytes.len();
            true
        } else {
            false
        }
    }

    /// Find the next occurrence of `needle`, as an offset from the cursor.
    #[inline]
    pub fn find(&self, needle: &[u8]) -> Option<usize> {
        memmem::find(self.remaining_bytes(), needle)
    }

    /// The rest of the line from the cursor.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    fn remaining_bytes(&self) -> &'a [u8] {
        &self.input.as_bytes()[self.pos..]
    }
}
