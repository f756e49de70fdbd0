//! Common utilities for the sprig markup toolkit.
//!
//! This crate provides shared infrastructure used by the tokenizer and
//! tree builder:
//! - **Warning System** - deduplicated colored stderr output for degenerate input

pub mod warning;
