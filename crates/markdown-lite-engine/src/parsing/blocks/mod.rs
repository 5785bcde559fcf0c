//! # Block Parsing
//!
//! Two-phase block parsing over the raw lines of one document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): a line, from a given offset, is
//!    matched against an ordered rule table and yields a `BlockMatch`
//!    (block type, consumed prefix, end offset). No context is consulted.
//!
//! 2. **Block Assembly** (`builder`): a `BlockBuilder` carries the
//!    `ParserState` (blockquote level, fence membership) across lines and
//!    emits `Fragment`s, patching the previous one for setext headings.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`BlockType`, `BlockMatch`, `ParserState`, `Fragment`)
//! - **`kinds`**: Block types with owned delimiters and tags (BlockQuote, CodeFence, Heading, Paragraph)
//! - **`classify`**: `classify()` and the block rule table
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Rule precedence: fence marker, ATX heading, setext underline, blockquote
//! - Fenced code is a raw zone: only a fence marker is recognised inside it
//! - Blockquote level is zero once a document is finished

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::classify;
pub use types::{BlockMatch, BlockType, Fragment, FragmentKind, ParserState};
