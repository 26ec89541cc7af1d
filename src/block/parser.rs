//! Line transcoder: the block state machine.

use crate::inline;

use super::event::{BlockEvent, ListKind};
use super::line::{self, LineKind};

/// The block currently open in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockState {
    /// Nothing open.
    #[default]
    None,
    /// `<p>` is open and has received `lines` lines of text.
    Paragraph { lines: usize },
    /// `<ul>` is open.
    UnorderedList {
        /// Line count of a paragraph left open around the list.
        paragraph: Option<usize>,
    },
    /// `<ol>` is open.
    OrderedList {
        /// Line count of a paragraph left open around the list.
        paragraph: Option<usize>,
    },
}

impl BlockState {
    fn list(kind: ListKind, paragraph: Option<usize>) -> Self {
        match kind {
            ListKind::Unordered => Self::UnorderedList { paragraph },
            ListKind::Ordered => Self::OrderedList { paragraph },
        }
    }

    /// Kind of the open list, if any.
    pub fn open_list(self) -> Option<ListKind> {
        match self {
            Self::UnorderedList { .. } => Some(ListKind::Unordered),
            Self::OrderedList { .. } => Some(ListKind::Ordered),
            Self::None | Self::Paragraph { .. } => None,
        }
    }

    /// Line count of the paragraph an open list sits in.
    pub fn enclosing_paragraph(self) -> Option<usize> {
        match self {
            Self::UnorderedList { paragraph } | Self::OrderedList { paragraph } => paragraph,
            Self::None | Self::Paragraph { .. } => None,
        }
    }
}

/// Converts lines into block events, one line at a time.
///
/// Feed every input line (without its line terminator) to
/// [`push_line`](Self::push_line), then call [`finish`](Self::finish) once
/// at end of input so every open block gets closed.
///
/// # Example
/// ```
/// use markdown2html::block::{BlockEvent, LineTranscoder, ListKind};
///
/// let mut transcoder = LineTranscoder::new();
/// let mut events = Vec::new();
/// transcoder.push_line("- a", &mut events);
/// transcoder.finish(&mut events);
/// assert_eq!(
///     events,
///     [
///         BlockEvent::ListStart(ListKind::Unordered),
///         BlockEvent::ListItem("a".to_string()),
///         BlockEvent::ListEnd(ListKind::Unordered),
///     ]
/// );
/// ```
#[derive(Debug, Default)]
pub struct LineTranscoder {
    state: BlockState,
    /// Reusable buffer for the substituted line.
    substituted: String,
    lines: usize,
}

impl LineTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently open block.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Number of lines pushed so far.
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Process one input line.
    pub fn push_line(&mut self, raw: &str, events: &mut Vec<BlockEvent>) {
        self.lines += 1;
        self.close_blocks(Some(raw), events);

        let mut substituted = std::mem::take(&mut self.substituted);
        inline::substitute_into(raw, &mut substituted);
        let kind = LineKind::classify(&substituted);
        log::trace!("line {}: {:?}", self.lines, kind);
        self.emit(kind, events);
        self.substituted = substituted;
    }

    /// Close whatever is still open at end of input.
    pub fn finish(&mut self, events: &mut Vec<BlockEvent>) {
        self.close_blocks(None, events);
        debug_assert_eq!(self.state, BlockState::None);
    }

    /// Close blocks the raw line does not continue. `None` is end of input.
    fn close_blocks(&mut self, raw: Option<&str>, events: &mut Vec<BlockEvent>) {
        if let Some(kind) = self.state.open_list() {
            if !raw.is_some_and(|raw| line::continues_list(kind, raw)) {
                log::debug!("close {} at line {}", kind.tag(), self.lines);
                events.push(BlockEvent::ListEnd(kind));
                self.state = match self.state.enclosing_paragraph() {
                    Some(lines) => BlockState::Paragraph { lines },
                    None => BlockState::None,
                };
            }
        }

        // A paragraph wrapping a still-open list closes on its own.
        if let Some(kind) = self.state.open_list() {
            if self.state.enclosing_paragraph().is_some() && raw.is_none_or(line::breaks_paragraph) {
                log::debug!("close p around {} at line {}", kind.tag(), self.lines);
                events.push(BlockEvent::ParagraphEnd);
                self.state = BlockState::list(kind, None);
            }
        }

        if matches!(self.state, BlockState::Paragraph { .. })
            && raw.is_none_or(line::breaks_paragraph)
        {
            log::debug!("close p at line {}", self.lines);
            events.push(BlockEvent::ParagraphEnd);
            self.state = BlockState::None;
        }
    }

    fn emit(&mut self, kind: LineKind<'_>, events: &mut Vec<BlockEvent>) {
        match kind {
            LineKind::Heading { level, text } => events.push(BlockEvent::Heading {
                level,
                text: text.to_owned(),
            }),
            LineKind::UnorderedItem(text) => {
                self.open_list(ListKind::Unordered, events);
                events.push(BlockEvent::ListItem(text.to_owned()));
            }
            LineKind::OrderedItem(text) => {
                self.open_list(ListKind::Ordered, events);
                events.push(BlockEvent::ListItem(text.to_owned()));
            }
            LineKind::Blank => {}
            LineKind::Text(text) => {
                let lines = match self.state {
                    BlockState::Paragraph { lines } => {
                        events.push(BlockEvent::LineBreak);
                        lines
                    }
                    _ => {
                        // Raw-line checks close any list before plain text arrives.
                        debug_assert_eq!(self.state, BlockState::None);
                        log::debug!("open p at line {}", self.lines);
                        events.push(BlockEvent::ParagraphStart);
                        0
                    }
                };
                events.push(BlockEvent::Text(text.to_owned()));
                self.state = BlockState::Paragraph { lines: lines + 1 };
            }
        }
    }

    fn open_list(&mut self, kind: ListKind, events: &mut Vec<BlockEvent>) {
        if self.state.open_list() == Some(kind) {
            return;
        }
        let paragraph = match self.state {
            BlockState::Paragraph { lines } => Some(lines),
            _ => None,
        };
        log::debug!("open {} at line {}", kind.tag(), self.lines);
        events.push(BlockEvent::ListStart(kind));
        self.state = BlockState::list(kind, paragraph);
    }
}
