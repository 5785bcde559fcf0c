use xi_rope::Rope;

use crate::{
    options::RenderOptions,
    parsing::{
        ParsedDoc,
        blocks::{Fragment, ParserState},
        parse_document,
    },
    render,
};

/// Converts whole Markdown documents to HTML fragments.
///
/// Each call to [`MarkdownParser::parse`] starts from a fresh
/// [`ParserState`]; the state left by the last document stays readable
/// through [`MarkdownParser::state`] until the next parse or [`reset`].
///
/// [`reset`]: MarkdownParser::reset
#[derive(Debug, Default)]
pub struct MarkdownParser {
    options: RenderOptions,
    state: ParserState,
}

impl MarkdownParser {
    /// Starts a parser for a new document.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            state: ParserState::default(),
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Forgets any blockquote or fence state left by the previous document.
    pub fn reset(&mut self) {
        self.state = ParserState::default();
    }

    /// Renders `input` to a single HTML string.
    ///
    /// Empty or whitespace-only input renders as the empty string.
    pub fn parse(&mut self, input: &str) -> String {
        let fragments = self.fragments(input);
        render::join(&fragments, &self.options.glue)
    }

    /// Renders `input` to its transformed fragments, before joining.
    pub fn fragments(&mut self, input: &str) -> Vec<Fragment> {
        self.reset();
        if input.trim().is_empty() {
            return vec![];
        }

        let rope = Rope::from(input);
        let ParsedDoc { mut fragments, state } = parse_document(&rope, self.state, &self.options);
        self.state = state;

        render::transform(&mut fragments);
        fragments
    }
}

/// Renders `input` with default options.
pub fn to_html(input: &str) -> String {
    MarkdownParser::default().parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_empty() {
        assert_eq!(to_html(""), "");
        assert_eq!(to_html(" \n\t\r\n  "), "");
    }

    #[test]
    fn state_reports_open_fence_until_reset() {
        let mut parser = MarkdownParser::default();
        parser.parse("```\ncode");
        assert!(parser.state().inside_code_fence);

        parser.reset();
        assert_eq!(parser.state(), ParserState::default());
    }

    #[test]
    fn parse_starts_from_fresh_state() {
        let mut parser = MarkdownParser::default();
        parser.parse("```\nstill open");
        assert_eq!(parser.parse("*x*"), "<p><em>x</em></p>");
        assert!(!parser.state().inside_code_fence);
    }

    #[test]
    fn options_are_kept() {
        let parser = MarkdownParser::new(RenderOptions {
            glue: "\n".into(),
            ..RenderOptions::default()
        });
        assert_eq!(parser.options().glue, "\n");
    }
}
