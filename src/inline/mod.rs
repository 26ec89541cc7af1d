//! Inline substitution engine.
//!
//! Four rules run in a fixed order over each line, every rule seeing the
//! output of the previous one:
//! 1. Bold: `**text**` → `<b>text</b>`
//! 2. Emphasis: `__text__` → `<em>text</em>`
//! 3. Digest: `[[text]]` → lowercase hex MD5 of `text`
//! 4. Strip: `((text))` → `text` without any `c`/`C`
//!
//! Matching is plain delimiter scanning (see [`Spans`]), no regex and no
//! backtracking. There is no escape syntax for literal delimiters.

mod span;
mod transform;

pub use span::{Span, Spans};
pub use transform::{digest_hex, strip_c};

use std::borrow::Cow;

/// One inline substitution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    /// `**text**`
    Bold,
    /// `__text__`
    Emphasis,
    /// `[[text]]`
    Digest,
    /// `((text))`
    StripC,
}

impl InlineRule {
    /// All rules, in application order.
    pub const ALL: [InlineRule; 4] = [
        InlineRule::Bold,
        InlineRule::Emphasis,
        InlineRule::Digest,
        InlineRule::StripC,
    ];

    /// Opening and closing delimiters.
    pub fn delimiters(self) -> (&'static [u8], &'static [u8]) {
        match self {
            Self::Bold => (b"**", b"**"),
            Self::Emphasis => (b"__", b"__"),
            Self::Digest => (b"[[", b"]]"),
            Self::StripC => (b"((", b"))"),
        }
    }

    /// Spans of this rule in `line`.
    pub fn spans(self, line: &str) -> Spans<'_> {
        let (open, close) = self.delimiters();
        Spans::new(line, open, close)
    }

    /// Apply this rule to every span of `line`.
    ///
    /// Returns the input unchanged (borrowed) if nothing matched.
    pub fn apply(self, line: &str) -> Cow<'_, str> {
        let mut spans = self.spans(line).peekable();
        if spans.peek().is_none() {
            return Cow::Borrowed(line);
        }

        let mut out = String::with_capacity(line.len() + 16);
        let mut last = 0;
        for span in spans {
            out.push_str(&line[last..span.start]);
            self.replace_into(span.inner, &mut out);
            last = span.end;
        }
        out.push_str(&line[last..]);
        Cow::Owned(out)
    }

    fn replace_into(self, inner: &str, out: &mut String) {
        match self {
            Self::Bold => {
                out.push_str("<b>");
                out.push_str(inner);
                out.push_str("</b>");
            }
            Self::Emphasis => {
                out.push_str("<em>");
                out.push_str(inner);
                out.push_str("</em>");
            }
            Self::Digest => out.push_str(&digest_hex(inner)),
            Self::StripC => out.push_str(&strip_c(inner)),
        }
    }
}

/// Apply all inline rules to a line.
///
/// # Example
/// ```
/// use markdown2html::inline::substitute;
///
/// assert_eq!(substitute("**a** and __b__"), "<b>a</b> and <em>b</em>");
/// assert_eq!(substitute("((Chicago))"), "hiago");
/// ```
pub fn substitute(line: &str) -> String {
    let mut out = String::new();
    substitute_into(line, &mut out);
    out
}

/// Apply all inline rules to a line, writing into a reusable buffer.
pub fn substitute_into(line: &str, out: &mut String) {
    out.clear();
    let mut current = Cow::Borrowed(line);
    for rule in InlineRule::ALL {
        let next = match rule.apply(&current) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(next) => next,
        };
        current = Cow::Owned(next);
    }
    out.push_str(&current);
}
