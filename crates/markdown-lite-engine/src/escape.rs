//! HTML escaping helpers shared by the block and paragraph passes.

use std::borrow::Cow;

/// Escapes the reserved text characters `&`, `<` and `>`.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes a value for use inside a double-quoted attribute.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Escapes `s` unless it already carries markup.
///
/// Text containing a `<` is treated as already-structural and passed through
/// untouched, which keeps escaping idempotent across passes.
pub fn escape_untagged(s: &str) -> Cow<'_, str> {
    if s.contains('<') {
        Cow::Borrowed(s)
    } else {
        escape_text(s)
    }
}
