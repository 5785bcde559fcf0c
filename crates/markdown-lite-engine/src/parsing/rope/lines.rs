use xi_rope::Rope;

use super::span::Span;

/// A single raw line of the document.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes the terminator if present).
    pub span: Span,
    /// The line text with its `\n` / `\r\n` terminator removed. Other
    /// trailing whitespace is kept; fence interiors are emitted from this.
    pub text: String,
}

impl LineRef {
    /// The line with trailing whitespace removed, as seen by the classifier.
    pub fn trimmed(&self) -> &str {
        self.text.trim_end()
    }
}

/// Returns an iterator over lines with their byte spans.
///
/// A trailing terminator does not produce an extra empty line, so `"a\n"`
/// yields one line.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |raw| {
        let start = offset;
        offset += raw.len();
        let text: &str = &raw;
        let text = text.strip_suffix('\n').unwrap_or(text);
        let text = text.strip_suffix('\r').unwrap_or(text);
        LineRef {
            span: Span { start, end: offset },
            text: text.to_owned(),
        }
    })
}
