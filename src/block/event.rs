//! Block-level event types.

/// Type of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item`
    Unordered,
    /// `* item`
    Ordered,
}

impl ListKind {
    /// Line prefix that starts or continues a list of this kind.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Unordered => "-",
            Self::Ordered => "* ",
        }
    }

    /// HTML container tag name.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Events emitted by the line transcoder, one or more per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent {
    /// Start of a paragraph.
    ParagraphStart,
    /// End of a paragraph.
    ParagraphEnd,
    /// Break between two lines of the same paragraph.
    LineBreak,
    /// One line of paragraph text.
    Text(String),

    /// A complete heading.
    Heading {
        /// Number of leading `#` markers.
        level: usize,
        text: String,
    },

    /// Start of a list.
    ListStart(ListKind),
    /// End of a list.
    ListEnd(ListKind),
    /// A complete list item.
    ListItem(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_kind() {
        assert_ne!(ListKind::Unordered, ListKind::Ordered);
        assert_eq!(ListKind::Unordered.tag(), "ul");
        assert_eq!(ListKind::Ordered.tag(), "ol");
    }

    #[test]
    fn test_ordered_marker_needs_space() {
        assert_eq!(ListKind::Ordered.marker(), "* ");
        assert_eq!(ListKind::Unordered.marker(), "-");
    }
}
