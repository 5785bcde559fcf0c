/// Knobs that change the rendered HTML without changing block semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prepended to a fence's language label in `<pre class="...">`.
    pub code_class_prefix: String,
    /// Inserted between fragments by the join step.
    pub glue: String,
    /// Emit `</pre>` for a fence still open at document end.
    ///
    /// Off by default: an unterminated fence is left open, while unterminated
    /// blockquotes are always closed.
    pub close_unterminated_fences: bool,
}

impl RenderOptions {
    pub const DEFAULT_CODE_CLASS_PREFIX: &'static str = "lang-";
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            code_class_prefix: Self::DEFAULT_CODE_CLASS_PREFIX.to_string(),
            glue: String::new(),
            close_unterminated_fences: false,
        }
    }
}
