/// Paragraph block type.
///
/// Paragraphs have no delimiters: any plain line that reaches the paragraph
/// pass without markup becomes one.
pub struct Paragraph;

impl Paragraph {
    pub const OPEN_TAG: &'static str = "<p>";
    pub const CLOSE_TAG: &'static str = "</p>";

    /// Wraps already-escaped `inner` in `<p>`.
    pub fn wrap(inner: &str) -> String {
        format!("{}{inner}{}", Self::OPEN_TAG, Self::CLOSE_TAG)
    }
}

/// A blank line, rendered as a line break.
pub struct LineBreak;

impl LineBreak {
    pub const TAG: &'static str = "<br>";
}
