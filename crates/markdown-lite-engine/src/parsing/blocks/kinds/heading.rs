/// ATX (`# Title`) and setext (`Title` / `=====`) headings.
pub struct Heading;

impl Heading {
    /// One to six `#`, optionally indented. Group 1 is the `#` run.
    pub const ATX_PATTERN: &'static str = r"^\s*(#{1,6})";

    /// A line made only of `=` or only of `-`. Group 1 is the run.
    pub const SETEXT_PATTERN: &'static str = r"^(=+|-+)\s*$";

    /// Heading level for a setext underline: `=` is 1, `-` is 2.
    pub fn setext_level(underline: &str) -> u8 {
        if underline.starts_with('=') { 1 } else { 2 }
    }

    /// Heading level for an ATX `#` run, clamped to 1..=6.
    pub fn atx_level(marker: &str) -> u8 {
        marker.len().clamp(1, 6) as u8
    }

    /// Wraps already-escaped `inner` in `<hN>`.
    pub fn wrap(level: u8, inner: &str) -> String {
        format!("<h{level}>{inner}</h{level}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setext_levels() {
        assert_eq!(Heading::setext_level("===="), 1);
        assert_eq!(Heading::setext_level("--"), 2);
    }

    #[test]
    fn atx_level_is_clamped() {
        assert_eq!(Heading::atx_level("###"), 3);
        assert_eq!(Heading::atx_level("#########"), 6);
    }

    #[test]
    fn wrap_heading() {
        assert_eq!(Heading::wrap(2, "Title"), "<h2>Title</h2>");
    }
}
