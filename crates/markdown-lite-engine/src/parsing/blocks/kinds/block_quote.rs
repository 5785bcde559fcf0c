/// Blockquote block type with owned delimiter constants.
///
/// All blockquote syntax and markup lives here, not scattered through the
/// classifier and builder.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// A run of `>` plus any whitespace after it.
    pub const PATTERN: &'static str = r"^>+\s*";

    pub const OPEN_TAG: &'static str = "<blockquote>";
    pub const CLOSE_TAG: &'static str = "</blockquote>";

    /// Nesting depth encoded by a matched prefix: the number of `>` in it.
    ///
    /// Only a contiguous run counts, so `"> > x"` is depth 1 whose remainder
    /// starts with `>`.
    pub fn depth(prefix: &str) -> usize {
        prefix.chars().filter(|&c| c == Self::PREFIX).count()
    }
}
