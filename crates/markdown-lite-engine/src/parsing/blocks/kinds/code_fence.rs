use crate::escape::escape_attr;

pub struct CodeFence;

impl CodeFence {
    pub const MARKER: &'static str = "```";

    /// Matches the marker anywhere on the line, not only at its start.
    pub const PATTERN: &'static str = "```";

    pub const CLOSE_TAG: &'static str = "</pre>";

    pub fn is_marker(line: &str) -> bool {
        line.contains(Self::MARKER)
    }

    /// The language label from the text following a marker, if any.
    ///
    /// Extra backticks of a longer fence are not part of the label, and the
    /// label ends at the next backtick.
    pub fn language(info: &str) -> Option<&str> {
        let info = info.trim_start_matches('`');
        let lang = info.split('`').next().unwrap_or_default().trim();
        (!lang.is_empty()).then_some(lang)
    }

    pub fn open_tag(language: Option<&str>, class_prefix: &str) -> String {
        match language {
            Some(lang) => format!(
                r#"<pre class="{}{}">"#,
                escape_attr(class_prefix),
                escape_attr(lang)
            ),
            None => "<pre>".to_string(),
        }
    }
}
