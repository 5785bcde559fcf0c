//! # Inline Parsing
//!
//! Cursor-based emphasis rewriting, run after block assembly and paragraph
//! wrapping.
//!
//! ## Modules
//!
//! - **`types`**: `EmphasisSpan` (full and inner spans of one match)
//! - **`kinds`**: `Emphasis`, the ordered rule table with owned delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `rewrite_emphasis()` entry point with per-rule helpers
//!
//! ## Rule Precedence
//!
//! `**` and `__` run before `*` and `_`. Each rule rewrites the string the
//! previous rule produced, so the single-delimiter rules never see the
//! characters of an already-consumed strong span.
//!
//! A delimiter preceded by a backslash neither opens nor closes a span.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::rewrite_emphasis;
pub use types::EmphasisSpan;
