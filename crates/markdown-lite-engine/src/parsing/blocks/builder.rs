use crate::{
    escape::{escape_text, escape_untagged},
    options::RenderOptions,
    parsing::rope::{lines::LineRef, span::Span},
};

use super::{
    classify::classify,
    kinds::{BlockQuote, CodeFence, Heading, LineBreak},
    types::{BlockType, Fragment, FragmentKind, ParserState},
};

/// Line-by-line state machine that turns raw lines into fragments.
///
/// Owns the [`ParserState`] for one document. Fragments are kept in an
/// indexable list so a setext underline can rewrite the line before it.
pub struct BlockBuilder<'o> {
    state: ParserState,
    options: &'o RenderOptions,
    out: Vec<Fragment>,
}

impl<'o> BlockBuilder<'o> {
    pub fn new(state: ParserState, options: &'o RenderOptions) -> Self {
        Self {
            state,
            options,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &LineRef) {
        let text = line.trimmed();

        if self.state.inside_code_fence {
            if CodeFence::is_marker(text) {
                self.close_fence(line.span);
            } else {
                self.push_fence_line(line);
            }
            return;
        }

        let outer = classify(text, 0);
        log::trace!("line {:?} classified as {:?}", line.span, outer.kind);

        if outer.kind == BlockType::CodeFenceMarker {
            self.open_fence(&text[outer.end..], line.span);
            return;
        }

        let (start, m) = if outer.kind == BlockType::Blockquote {
            self.set_blockquote_depth(BlockQuote::depth(outer.prefix), line.span);
            (outer.end, classify(text, outer.end))
        } else {
            self.close_blockquotes(line.span);
            (0, outer)
        };

        match m.kind {
            BlockType::Break => {
                self.out
                    .push(Fragment::structural(LineBreak::TAG, line.span));
            }
            BlockType::AtxHeading => {
                let level = Heading::atx_level(m.prefix);
                let title = escape_text(text[m.end..].trim());
                self.out
                    .push(Fragment::structural(Heading::wrap(level, &title), line.span));
            }
            BlockType::SetextHeading => {
                self.promote_previous(Heading::setext_level(m.prefix));
            }
            // A second `>` run after whitespace (`> > x`) is not a deeper
            // level; the rest of the line is text.
            BlockType::Plaintext | BlockType::Blockquote | BlockType::CodeFenceMarker => {
                self.out.push(Fragment::plain(&text[start..], line.span));
            }
        }
    }

    /// Closes what the document left open and hands back the fragments and
    /// final state.
    pub fn finish(mut self, end: usize) -> (Vec<Fragment>, ParserState) {
        let at = Span::point(end);
        self.close_blockquotes(at);

        if self.state.inside_code_fence {
            if self.options.close_unterminated_fences {
                log::debug!("closing code fence left open at end of document");
                self.close_fence(at);
            } else {
                log::debug!("document ended inside an open code fence");
            }
        }

        (self.out, self.state)
    }

    fn open_fence(&mut self, info: &str, line: Span) {
        self.state.inside_code_fence = true;
        let tag = CodeFence::open_tag(
            CodeFence::language(info),
            &self.options.code_class_prefix,
        );
        self.out.push(Fragment::escaped(tag, line));
    }

    fn close_fence(&mut self, line: Span) {
        self.state.inside_code_fence = false;
        self.out.push(Fragment::escaped(CodeFence::CLOSE_TAG, line));
    }

    fn push_fence_line(&mut self, line: &LineRef) {
        let mut content = escape_text(&line.text).into_owned();
        content.push('\n');
        self.out.push(Fragment::escaped(content, line.span));
    }

    fn set_blockquote_depth(&mut self, depth: usize, at: Span) {
        let level = self.state.blockquote_level;
        if depth > level {
            for _ in level..depth {
                self.out.push(Fragment::structural(BlockQuote::OPEN_TAG, at));
            }
        } else {
            for _ in depth..level {
                self.out.push(Fragment::structural(BlockQuote::CLOSE_TAG, at));
            }
        }
        self.state.blockquote_level = depth;
    }

    fn close_blockquotes(&mut self, at: Span) {
        if self.state.blockquote_level > 0 {
            log::debug!(
                "closing {} blockquote level(s) at {:?}",
                self.state.blockquote_level,
                at
            );
            self.set_blockquote_depth(0, at);
        }
    }

    /// Rewrites whatever fragment came last into a heading.
    ///
    /// Plain text is escaped first; markup is wrapped as it stands. Fence
    /// output keeps its exemption from the inline pass.
    fn promote_previous(&mut self, level: u8) {
        let Some(prev) = self.out.last_mut() else {
            log::debug!("setext underline at start of document");
            return;
        };
        let heading = match prev.kind {
            FragmentKind::PlainText => Heading::wrap(level, &escape_untagged(&prev.text)),
            FragmentKind::Structural | FragmentKind::Escaped => Heading::wrap(level, &prev.text),
        };
        prev.text = heading;
        if prev.kind == FragmentKind::PlainText {
            prev.kind = FragmentKind::Structural;
        }
    }
}
