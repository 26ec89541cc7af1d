//! Block-level handling for Markdown.
//!
//! The transcoder is line-oriented and handles:
//! - ATX-style headings (`#` markers followed by a space)
//! - Unordered lists (`-`)
//! - Ordered lists (`* `)
//! - Paragraphs, with `<br/>` between consecutive lines
//!
//! Blocks never nest, with one exception: a list started by a line that
//! does not close the current paragraph sits inside that paragraph.

mod event;
mod line;
mod parser;

pub use event::{BlockEvent, ListKind};
pub use line::{LineKind, breaks_paragraph, continues_list, is_blank};
pub use parser::{BlockState, LineTranscoder};
