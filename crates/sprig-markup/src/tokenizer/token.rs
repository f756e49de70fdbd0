//! Token types produced by the tokenizer.

use std::fmt;

/// Atomic lexical unit produced by the tokenizer.
///
/// Tokens form a flat ordered sequence. Attribute tokens always follow the
/// [`Token::TagOpen`] they belong to; nothing links them explicitly, and
/// the tree builder associates them by position alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A verbatim run of characters containing no `<`. No trimming and no
    /// entity decoding: `&amp;` passes through unchanged.
    Text(String),
    /// `<name ...>` - name exactly as scanned, case preserved. Attributes
    /// are emitted separately, after this token.
    TagOpen(String),
    /// `</name>` - name trimmed but not case-normalized, and never checked
    /// against any open tag.
    TagClose(String),
    /// An attribute name, lower-cased at scan time.
    AttributeName(String),
    /// A raw attribute value. The quote delimiter is not included and no
    /// unescaping is performed.
    AttributeValue(String),
    /// Emitted in addition to [`Token::TagOpen`] (after any attribute
    /// tokens) when a void-element tag is terminated by `>`. Carries the
    /// name as scanned.
    SelfClosingTag(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(content) => write!(f, "Text({content:?})"),
            Self::TagOpen(name) => write!(f, "<{name}>"),
            Self::TagClose(name) => write!(f, "</{name}>"),
            Self::AttributeName(name) => write!(f, "@{name}"),
            Self::AttributeValue(value) => write!(f, "={value:?}"),
            Self::SelfClosingTag(name) => write!(f, "<{name} />"),
        }
    }
}
