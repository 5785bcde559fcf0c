use std::sync::LazyLock;

use regex::Regex;

use super::{
    kinds::{BlockQuote, CodeFence, Heading},
    types::{BlockMatch, BlockType},
};

/// One entry of the block rule table.
struct BlockRule {
    kind: BlockType,
    pattern: Regex,
    /// Capture group whose text is reported as the prefix.
    group: usize,
}

impl BlockRule {
    fn new(kind: BlockType, pattern: &str, group: usize) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("block rule patterns are valid"),
            group,
        }
    }
}

/// Block rules in precedence order. The first matching rule wins.
static BLOCK_RULES: LazyLock<[BlockRule; 4]> = LazyLock::new(|| {
    [
        BlockRule::new(BlockType::CodeFenceMarker, CodeFence::PATTERN, 0),
        BlockRule::new(BlockType::AtxHeading, Heading::ATX_PATTERN, 1),
        BlockRule::new(BlockType::SetextHeading, Heading::SETEXT_PATTERN, 1),
        BlockRule::new(BlockType::Blockquote, BlockQuote::PATTERN, 0),
    ]
});

/// Classifies `line[start..]` into a [`BlockMatch`].
///
/// Pure: the result depends on the text alone, never on surrounding lines.
/// An out-of-range or non-boundary `start` classifies as [`BlockType::Break`].
pub fn classify(line: &str, start: usize) -> BlockMatch<'_> {
    let rest = line.get(start..).unwrap_or("");
    if rest.trim().is_empty() {
        return BlockMatch::bare(BlockType::Break, start);
    }

    for rule in BLOCK_RULES.iter() {
        if let Some(caps) = rule.pattern.captures(rest)
            && let Some(m) = caps.get(rule.group)
        {
            return BlockMatch {
                kind: rule.kind,
                prefix: m.as_str(),
                end: start + m.end(),
            };
        }
    }

    BlockMatch::bare(BlockType::Plaintext, start)
}
