//! Markup tokenizer module.
//!
//! Linearizes the input into a flat token sequence. Attribute tokens are
//! associated with the most recently opened tag purely by position; the
//! tree builder re-links them when it assembles nodes.

/// Tokenizer scan loop and cursor helpers.
pub mod core;
/// Token types produced by the tokenizer.
pub mod token;
/// The fixed set of void (always self-closing) element names.
pub mod void_elements;

pub use self::core::{Tokenizer, tokenize};
pub use token::Token;
pub use void_elements::VoidElement;
