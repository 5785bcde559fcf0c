pub mod escape;
pub mod options;
pub mod parser;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use options::RenderOptions;
pub use parser::{MarkdownParser, to_html};
pub use parsing::blocks::{BlockMatch, BlockType, Fragment, FragmentKind, ParserState, classify};
