//! Second pass over assembled fragments, and the final join.

use crate::{
    escape::escape_text,
    parsing::{
        blocks::{Fragment, FragmentKind, kinds::Paragraph},
        inline::rewrite_emphasis,
    },
};

/// Wraps plain lines in paragraphs, then rewrites emphasis, in place.
///
/// Fence output is skipped entirely. All paragraph wrapping happens before
/// any emphasis rewriting.
pub fn transform(fragments: &mut [Fragment]) {
    for f in fragments.iter_mut() {
        wrap_paragraph(f);
    }
    for f in fragments.iter_mut().filter(|f| !f.is_exempt()) {
        f.text = rewrite_emphasis(&f.text);
    }
}

/// Escapes and wraps a plain fragment in `<p>`.
///
/// A fragment that already contains `<` is treated as markup and left
/// exactly as it is.
pub fn wrap_paragraph(f: &mut Fragment) {
    if f.kind != FragmentKind::PlainText || f.text.contains('<') {
        return;
    }
    let wrapped = Paragraph::wrap(&escape_text(&f.text));
    f.text = wrapped;
    f.kind = FragmentKind::Structural;
}

pub fn join(fragments: &[Fragment], glue: &str) -> String {
    fragments
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(glue)
}
