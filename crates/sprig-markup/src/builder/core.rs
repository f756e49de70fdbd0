//! Tree builder state machine.
//!
//! Attributes and text are not attached to a node at the moment each token
//! is scanned. They collect in two accumulators and are handed over at the
//! next structural boundary: the opening of a child or the node's own close.
//! The flat token stream has no per-tag attribute scoping, so guards on the
//! assignment points keep a node's earlier attributes and content from
//! being clobbered by leftovers that belong to nobody.

use sprig_common::warning::warn_once;
use sprig_node::{AttributesMap, Element};

use crate::tokenizer::Token;

/// Builds an element forest from a token stream.
///
/// State is the explicit ancestor stack, the innermost node still accepting
/// content, and the two deferred-assignment accumulators. The builder is
/// single-shot: feed one token sequence through [`TreeBuilder::run`], then
/// take the forest with [`TreeBuilder::into_forest`].
pub struct TreeBuilder {
    /// Suspended ancestors, innermost last.
    stack: Vec<Element>,
    /// The node currently accepting attributes, text, and children.
    current: Option<Element>,
    /// Attributes scanned since the last assignment point.
    pending_attributes: AttributesMap,
    /// Most recently inserted pending attribute name; a value token
    /// overwrites this name's placeholder.
    last_attribute: Option<String>,
    /// Text scanned since the last assignment point.
    pending_text: String,
    /// Completed root nodes in document order.
    forest: Vec<Element>,
}

/// Build the root element forest from a token sequence.
#[must_use]
pub fn build(tokens: Vec<Token>) -> Vec<Element> {
    let mut builder = TreeBuilder::new();
    builder.run(tokens);
    builder.into_forest()
}

impl TreeBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            current: None,
            pending_attributes: AttributesMap::new(),
            last_attribute: None,
            pending_text: String::new(),
            forest: Vec::new(),
        }
    }

    /// Feed the whole token sequence through the builder.
    ///
    /// There is no end-of-input cleanup pass: a dangling current node and
    /// anything still suspended on the stack never reach the forest, so
    /// deeply malformed input tends to yield an empty or truncated forest
    /// rather than a partial tree or an error.
    pub fn run(&mut self, tokens: Vec<Token>) {
        for token in tokens {
            self.process(token);
        }

        let unclosed = self.stack.len() + usize::from(self.current.is_some());
        if unclosed > 0 {
            warn_once(
                "Builder",
                &format!("input ended with {unclosed} unclosed tag(s); dropping them"),
            );
        }
    }

    /// Consume the builder and return the completed root forest.
    #[must_use]
    pub fn into_forest(self) -> Vec<Element> {
        self.forest
    }

    fn process(&mut self, token: Token) {
        match token {
            Token::TagOpen(name) => self.open_tag(name),
            Token::AttributeName(name) => {
                let _ = self
                    .pending_attributes
                    .insert(name.clone(), String::new());
                self.last_attribute = Some(name);
            }
            Token::AttributeValue(value) => {
                // A value with no preceding name in this accumulator has
                // nothing to attach to and is dropped.
                if let Some(name) = &self.last_attribute {
                    let _ = self.pending_attributes.insert(name.clone(), value);
                }
            }
            Token::TagClose(_) => self.close_tag(false),
            Token::SelfClosingTag(_) => self.close_tag(true),
            Token::Text(text) => {
                // Text with no open node (top-level runs) is discarded.
                if self.current.is_some() {
                    self.pending_text.push_str(&text);
                }
            }
        }
    }

    /// Suspend the current node, handing it the accumulators, and start a
    /// fresh one.
    fn open_tag(&mut self, name: String) {
        if let Some(mut node) = self.current.take() {
            // A node that already received attributes on an earlier close
            // event keeps them; the accumulator is discarded.
            if node.attributes.is_empty() {
                node.attributes = std::mem::take(&mut self.pending_attributes);
            }
            node.content = Some(self.pending_text.trim().to_string());
            self.reset_accumulators();
            self.stack.push(node);
        }
        self.current = Some(Element::new(name));
    }

    /// Finalize the current node and pop its parent back in. The token's
    /// declared name plays no part: a close always finalizes whichever node
    /// is innermost, which is how misnested markup corrupts silently.
    fn close_tag(&mut self, self_closing: bool) {
        // An orphan close with nothing open is a no-op; the accumulators
        // deliberately survive for whatever opens next.
        let Some(mut node) = self.current.take() else {
            return;
        };

        node.is_self_closing = self_closing;

        if node.attributes.is_empty() {
            node.attributes = std::mem::take(&mut self.pending_attributes);
        }

        // Raw (untrimmed) text here, unlike the trim at suspension. Empty
        // counts as "no content yet" and is replaced rather than appended.
        let pending = std::mem::take(&mut self.pending_text);
        node.content = match node.content.take() {
            Some(existing) if !existing.is_empty() => Some(format!("{existing} {pending}")),
            _ => Some(pending),
        };

        self.reset_accumulators();

        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.forest.push(node),
        }
        self.current = self.stack.pop();
    }

    fn reset_accumulators(&mut self) {
        self.pending_attributes.clear();
        self.last_attribute = None;
        self.pending_text.clear();
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
