//! Tokenizer scan loop.
//!
//! A single byte-position cursor moves left to right over the input with
//! bounded lookahead for tag and attribute boundaries. There is no error
//! token and no recovery: truncated or unscannable input simply ends the
//! token sequence.

use sprig_common::warning::warn_once;

use super::token::Token;
use super::void_elements::VoidElement;

/// Cursor-based tokenizer over a markup string.
///
/// Holds no state beyond the cursor and the tokens emitted so far, so a
/// fresh instance per input is the expected usage; [`tokenize`] wraps the
/// `new` / `run` / `into_tokens` cycle.
pub struct Tokenizer {
    input: String,
    pos: usize,
    tokens: Vec<Token>,
}

/// Tokenize a markup string into its flat token sequence.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input.to_string());
    tokenizer.run();
    tokenizer.into_tokens()
}

impl Tokenizer {
    /// Create a tokenizer positioned at the start of `input`.
    #[must_use]
    pub fn new(input: String) -> Self {
        Self {
            input,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    /// Run the scan loop to completion.
    pub fn run(&mut self) {
        while self.pos < self.input.len() {
            if self.peek() == Some('<') {
                if self.peek_at(1) == Some('/') {
                    self.scan_close_tag();
                } else {
                    self.scan_open_tag();
                }
            } else {
                self.scan_text();
            }
        }
    }

    /// Consume the tokenizer and return the tokens it produced.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    // =========================================================================
    // Cursor Helpers
    // =========================================================================

    /// The character at the cursor, without consuming it.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// The character `offset` codepoints past the cursor, without consuming.
    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    /// Consume and return the character at the cursor.
    fn consume(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Advance the cursor while `keep` holds, returning the consumed slice.
    fn consume_while(&mut self, keep: impl Fn(char) -> bool) -> &str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !keep(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.input[start..self.pos]
    }

    // =========================================================================
    // Scanners
    // =========================================================================

    /// Any run of characters not starting with `<` is one verbatim text
    /// token. Leading/top-level text still gets a token; the builder is the
    /// one that discards text with no node to attach to.
    fn scan_text(&mut self) {
        let text = self.consume_while(|c| c != '<').to_string();
        self.tokens.push(Token::Text(text));
    }

    /// `</name >` - internal whitespace before the `>` is trimmed away and
    /// the name is never validated against any open tag.
    fn scan_close_tag(&mut self) {
        self.pos += 2; // consume "</"
        let name = self.consume_while(|c| c != '>').trim().to_string();
        self.tokens.push(Token::TagClose(name));
        let _ = self.consume(); // the `>`, when present
    }

    /// `<name ...>` - emits the open token, then the tag body's attribute
    /// tokens in document order, then a self-closing marker for void
    /// elements. The terminating `>` produces no token.
    fn scan_open_tag(&mut self) {
        self.pos += 1; // consume "<"
        let name = self
            .consume_while(|c| !is_whitespace(c) && c != '>' && c != '/')
            .to_string();
        self.tokens.push(Token::TagOpen(name.clone()));

        self.scan_tag_body();

        // The void set alone decides self-closing status; `/>` versus `>`
        // syntax is irrelevant. A truncated tag (no `>`) emits no marker.
        if VoidElement::matches(&name) && self.peek() == Some('>') {
            self.tokens.push(Token::SelfClosingTag(name));
        }

        if self.peek() == Some('>') {
            let _ = self.consume();
        }
    }

    /// Scan the tag body up to its `>` (or end of input), emitting attribute
    /// tokens. Anything that is neither whitespace nor an attribute (stray
    /// slashes included) is skipped one character at a time.
    fn scan_tag_body(&mut self) {
        while let Some(c) = self.peek() {
            if c == '>' {
                break;
            }
            if is_whitespace(c) {
                let _ = self.consume();
                self.scan_attribute();
            } else {
                let _ = self.consume();
            }
        }
    }

    /// One attribute: a name, optionally followed by `=` and a delimited
    /// value. A valueless (boolean) attribute emits no value token.
    fn scan_attribute(&mut self) {
        let name = self
            .consume_while(|c| c != '=' && !is_whitespace(c) && c != '>' && c != '/')
            .to_ascii_lowercase();
        if !name.is_empty() {
            self.tokens.push(Token::AttributeName(name));
        }

        if self.peek() == Some('=') {
            let _ = self.consume();
            // Whatever character follows `=` is taken literally as the
            // delimiter, quote or not. It cannot be escaped inside the value.
            let value = match self.consume() {
                Some(delimiter) => {
                    let value = self.consume_while(|c| c != delimiter).to_string();
                    if self.consume().is_none() {
                        warn_once(
                            "Tokenizer",
                            "unterminated attribute value; consumed to end of input",
                        );
                    }
                    value
                }
                None => String::new(),
            };
            self.tokens.push(Token::AttributeValue(value));
        }
    }
}

/// ASCII whitespace as far as the scanner is concerned. Newlines are not
/// normalized anywhere, so CR is included here.
const fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')
}
