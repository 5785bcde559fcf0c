pub mod blocks;
pub mod inline;
pub mod rope;

use xi_rope::Rope;

use crate::options::RenderOptions;
use blocks::{BlockBuilder, Fragment, ParserState};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub fragments: Vec<Fragment>,
    /// State after the last line, including anything left open.
    pub state: ParserState,
}

/// Runs block assembly over every line of `rope`, starting from `state`.
pub fn parse_document(rope: &Rope, state: ParserState, options: &RenderOptions) -> ParsedDoc {
    let mut builder = BlockBuilder::new(state, options);

    for lr in lines_with_spans(rope) {
        builder.push(&lr);
    }

    let (fragments, state) = builder.finish(rope.len());
    ParsedDoc { fragments, state }
}
