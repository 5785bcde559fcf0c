//! # Inline Kinds
//!
//! Inline types that own their delimiters. The parser reads these constants;
//! it never hardcodes `**` or `_`.

pub mod emphasis;

pub use emphasis::Emphasis;
