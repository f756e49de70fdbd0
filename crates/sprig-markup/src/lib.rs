//! Permissive HTML-like tokenizer and tree builder.
//!
//! # Scope
//!
//! This crate implements the two-stage parsing pipeline:
//! - **Tokenizer** - linearizes a markup string into [`Token`]s with a
//!   single scan cursor: text runs, tag open/close, attribute names and
//!   values, and self-closing markers for the fixed void-element set.
//! - **Tree Builder** - consumes the token stream once, left to right, with
//!   an explicit ancestor stack, producing a forest of [`Element`] nodes
//!   with deferred attribute/text assignment.
//!
//! The parser is deliberately permissive rather than spec-compliant. There
//! is no error-recovery grammar: misnested markup silently corrupts or
//! loses nodes, and unclosed tags at end of input are dropped rather than
//! flushed.
//!
//! # Not Implemented
//!
//! - Comments, DOCTYPE, and CDATA (tokenized as ordinary text or tag-like
//!   tokens, producing nonsensical but non-crashing output)
//! - Character reference (entity) decoding - `&amp;` passes through
//! - Diagnostics of any kind: an empty forest is indistinguishable from
//!   malformed input that lost its nodes
//! - Streaming or incremental input

/// Tree construction from the token stream.
pub mod builder;
/// Tokenizer for converting markup input into tokens.
pub mod tokenizer;

pub use builder::{TreeBuilder, build};
pub use tokenizer::{Token, Tokenizer, VoidElement, tokenize};

use sprig_node::Element;

/// Parse a markup string into its root element forest.
///
/// Composes [`tokenize`] and [`build`]. Nodes left unclosed at end of
/// input never reach the forest, per the builder's unwind policy.
#[must_use]
pub fn parse(input: &str) -> Vec<Element> {
    build(tokenize(input))
}
