use crate::parsing::rope::span::Span;

/// The block-level construct a line (or the remainder of a line) matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// A line containing a triple backtick; opens or closes a fence.
    CodeFenceMarker,
    /// `#` to `######` followed by heading text.
    AtxHeading,
    /// A full row of `=` or `-` underlining the previous line.
    SetextHeading,
    /// One or more leading `>`.
    Blockquote,
    /// Empty or whitespace-only text.
    Break,
    /// Anything else.
    Plaintext,
}

/// Result of classifying a line from a given offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMatch<'a> {
    pub kind: BlockType,
    /// The marker text the rule consumed (`"##"`, `"> "`, `"==="`, ...).
    /// Empty for [`BlockType::Break`] and [`BlockType::Plaintext`].
    pub prefix: &'a str,
    /// Byte offset into the classified line just past `prefix`.
    pub end: usize,
}

impl<'a> BlockMatch<'a> {
    /// A match that consumed nothing at `offset`.
    pub fn bare(kind: BlockType, offset: usize) -> Self {
        Self {
            kind,
            prefix: "",
            end: offset,
        }
    }
}

/// Cross-line state carried through one document.
///
/// `blockquote_level` returns to zero by the end of every document;
/// `inside_code_fence` may not, since an unterminated fence is left open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserState {
    /// Number of currently open `<blockquote>` elements.
    pub blockquote_level: usize,
    /// Whether the last fence marker opened a fence.
    pub inside_code_fence: bool,
}

/// How later passes may treat a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Block markup (headings, quote tags, breaks). Not paragraph-wrapped,
    /// still receives inline emphasis.
    Structural,
    /// Final output that no later pass touches: fence tags and fence content.
    Escaped,
    /// Raw line text, wrapped and escaped by the paragraph pass.
    PlainText,
}

/// One emitted unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub text: String,
    /// Span of the source line that produced this fragment.
    pub source: Span,
}

impl Fragment {
    pub fn structural(text: impl Into<String>, source: Span) -> Self {
        Self {
            kind: FragmentKind::Structural,
            text: text.into(),
            source,
        }
    }

    pub fn escaped(text: impl Into<String>, source: Span) -> Self {
        Self {
            kind: FragmentKind::Escaped,
            text: text.into(),
            source,
        }
    }

    pub fn plain(text: impl Into<String>, source: Span) -> Self {
        Self {
            kind: FragmentKind::PlainText,
            text: text.into(),
            source,
        }
    }

    /// Fence output is exempt from the paragraph and inline passes.
    #[must_use]
    pub fn is_exempt(&self) -> bool {
        self.kind == FragmentKind::Escaped
    }
}
