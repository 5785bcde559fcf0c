/// An emphasis form: a delimiter and the tags its spans are rewritten to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    pub delimiter: &'static str,
    pub open: &'static str,
    pub close: &'static str,
}

impl Emphasis {
    pub const STRONG_STAR: Emphasis = Emphasis::strong("**");
    pub const STRONG_UNDERSCORE: Emphasis = Emphasis::strong("__");
    pub const EM_STAR: Emphasis = Emphasis::em("*");
    pub const EM_UNDERSCORE: Emphasis = Emphasis::em("_");

    /// Rules in the order they are applied. Double delimiters come first so
    /// `**bold**` is consumed before the single-`*` rule sees it.
    pub const RULES: [Emphasis; 4] = [
        Self::STRONG_STAR,
        Self::STRONG_UNDERSCORE,
        Self::EM_STAR,
        Self::EM_UNDERSCORE,
    ];

    const fn strong(delimiter: &'static str) -> Self {
        Self {
            delimiter,
            open: "<strong>",
            close: "</strong>",
        }
    }

    const fn em(delimiter: &'static str) -> Self {
        Self {
            delimiter,
            open: "<em>",
            close: "</em>",
        }
    }
}
