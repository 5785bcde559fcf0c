use crate::parsing::rope::span::Span;

use super::{cursor::Cursor, kinds::Emphasis, types::EmphasisSpan};

/// Rewrites emphasis spans in `s` into `<strong>` / `<em>` markup.
///
/// Rules from [`Emphasis::RULES`] run one after another, each over the
/// output of the previous one.
pub fn rewrite_emphasis(s: &str) -> String {
    let mut out = s.to_string();
    for rule in &Emphasis::RULES {
        if out.contains(rule.delimiter) {
            out = apply_rule(rule, &out);
        }
    }
    out
}

/// Applies a single rule, replacing each found span at its exact position.
pub fn apply_rule(rule: &Emphasis, s: &str) -> String {
    let spans = find_spans(rule, s);
    if spans.is_empty() {
        return s.to_string();
    }

    let extra = spans.len() * (rule.open.len() + rule.close.len());
    let mut out = String::with_capacity(s.len() + extra);
    let mut last = 0;
    for sp in spans {
        out.push_str(&s[last..sp.full.start]);
        out.push_str(rule.open);
        out.push_str(&s[sp.inner.start..sp.inner.end]);
        out.push_str(rule.close);
        last = sp.full.end;
    }
    out.push_str(&s[last..]);
    out
}

/// Finds all non-overlapping spans of `rule` in `s`, left to right.
pub fn find_spans(rule: &Emphasis, s: &str) -> Vec<EmphasisSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];

    while !cur.eof() {
        if let Some(span) = try_parse_span(&mut cur, rule) {
            out.push(span);
            continue;
        }
        cur.bump();
    }

    out
}

/// Attempts to parse a span opening at the current position.
///
/// The content is the shortest non-empty run up to the next unescaped
/// delimiter. On failure, cursor position is restored.
fn try_parse_span(cur: &mut Cursor<'_>, rule: &Emphasis) -> Option<EmphasisSpan> {
    let delim = rule.delimiter.as_bytes();
    if !cur.at_unescaped(delim) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    // At least one byte of content.
    if cur.bump().is_none() {
        *cur = saved;
        return None;
    }
    while !cur.eof() && !cur.at_unescaped(delim) {
        cur.bump();
    }
    if cur.eof() {
        *cur = saved;
        return None;
    }

    let inner_end = cur.pos();
    cur.bump_n(delim.len());

    Some(EmphasisSpan {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
