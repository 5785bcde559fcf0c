use crate::parsing::rope::span::Span;

/// A matched emphasis span within one fragment's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmphasisSpan {
    /// Full span including both delimiters.
    pub full: Span,
    /// Text between the delimiters.
    pub inner: Span,
}
