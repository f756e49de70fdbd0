//! Tree construction module.
//!
//! Consumes the token sequence once, left to right, with an explicit stack
//! of suspended ancestors. A close token always finalizes whichever node is
//! innermost, regardless of its declared name; unclosed nodes at end of
//! input are dropped, never flushed.

/// Tree builder implementation.
pub mod core;

pub use self::core::{TreeBuilder, build};
