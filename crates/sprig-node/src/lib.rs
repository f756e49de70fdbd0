//! Element node tree for the sprig markup toolkit.
//!
//! The tree builder produces a forest of [`Element`] nodes; this crate owns
//! that data model plus the query, mutation, and serialization operations
//! on it.
//!
//! # Design
//!
//! There is exactly one node shape. Children are owned exclusively by their
//! parent (`Vec<Element>`), so every operation is a pure read or a local
//! mutation on the subtree it targets; nothing allocates a new tree.
//! Deletion is a reversible tombstone flag ([`Element::is_removed`]) rather
//! than removal from the parent's child list: a removed node disappears from
//! queries and serialization but keeps its subtree intact.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

/// Map of attribute names to values for an element. Keys are lower-cased at
/// scan time; values are stored raw. Iteration order is arbitrary.
pub type AttributesMap = HashMap<String, String>;

/// Pattern stripped from the `style` attribute by [`Element::show`].
/// Only the first occurrence is removed, matching [`Element::hidden`]'s
/// append-on-every-call behavior one step at a time.
static DISPLAY_NONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"display:\s*none;?").expect("display pattern is valid"));

/// A single element in the parsed tree.
///
/// Created only by the tree builder, one per open/self-closing tag pair it
/// finishes. `content` holds the node's *direct* text as assembled by the
/// builder's deferred-assignment rules; child elements carry their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name exactly as scanned; never case-normalized.
    pub tag_name: String,
    /// Attribute map (lower-cased keys, raw values).
    pub attributes: AttributesMap,
    /// Child elements in document order, owned exclusively by this node.
    pub children: Vec<Element>,
    /// This node's own direct text. `None` (never assigned) is a distinct
    /// state from `Some(String::new())` (assigned but empty).
    pub content: Option<String>,
    /// Whether the element came from a void tag and serializes as `<tag />`.
    pub is_self_closing: bool,
    /// Soft-delete tombstone. Reversible via [`Element::un_remove`] and
    /// never propagated to children.
    pub is_removed: bool,
}

impl Element {
    /// Create a fresh element with no attributes, children, or content.
    #[must_use]
    pub fn new(tag_name: String) -> Self {
        Self {
            tag_name,
            attributes: AttributesMap::new(),
            children: Vec::new(),
            content: None,
            is_self_closing: false,
            is_removed: false,
        }
    }

    /// Serialize the subtree back to markup.
    ///
    /// Returns the empty string when this node is removed. Otherwise the
    /// node's own content (or nothing) is followed by each child's `html()`
    /// in document order, wrapped in `<tag attrs />` for self-closing nodes
    /// and `<tag attrs>...</tag>` for everything else. Attributes render as
    /// ` key="value"` in the map's iteration order.
    #[must_use]
    pub fn html(&self) -> String {
        if self.is_removed {
            return String::new();
        }

        let mut inner = self.content.clone().unwrap_or_default();
        for child in &self.children {
            inner.push_str(&child.html());
        }

        if self.is_self_closing {
            format!("<{}{} />", self.tag_name, self.attributes_string())
        } else {
            format!(
                "<{}{}>{inner}</{}>",
                self.tag_name,
                self.attributes_string(),
                self.tag_name
            )
        }
    }

    /// This node's own direct text, or the empty string when absent or when
    /// the node is removed.
    ///
    /// Does not recurse into children: it reflects exactly what the builder
    /// assembled for this node, entities and all.
    #[must_use]
    pub fn text(&self) -> String {
        if self.is_removed {
            return String::new();
        }
        self.content.clone().unwrap_or_default()
    }

    /// Depth-first search for the first node (self included) whose `id`
    /// attribute equals `id` exactly.
    ///
    /// A removed node hides its entire subtree: the search returns `None`
    /// for it without descending.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        if self.is_removed {
            return None;
        }

        if self.attributes.get("id").is_some_and(|value| value == id) {
            return Some(self);
        }

        self.children
            .iter()
            .find_map(|child| child.get_element_by_id(id))
    }

    /// Depth-first collection of nodes whose `class` attribute, split on
    /// single spaces, contains `class_name` as an exact token.
    ///
    /// Results are in document order, self before descendants. A removed
    /// node and its subtree contribute nothing.
    #[must_use]
    pub fn get_elements_by_class(&self, class_name: &str) -> Vec<&Element> {
        let mut results = Vec::new();
        self.collect_by_class(class_name, &mut results);
        results
    }

    fn collect_by_class<'tree>(&'tree self, class_name: &str, results: &mut Vec<&'tree Element>) {
        if self.is_removed {
            return;
        }

        let matches = self
            .attributes
            .get("class")
            .is_some_and(|classes| classes.split(' ').any(|token| token == class_name));
        if matches {
            results.push(self);
        }

        for child in &self.children {
            child.collect_by_class(class_name, results);
        }
    }

    /// Set the tombstone flag. Children's flags are untouched; a removed
    /// ancestor merely suppresses their visibility in queries.
    pub const fn remove(&mut self) {
        self.is_removed = true;
    }

    /// Clear the tombstone flag, restoring the node to full visibility.
    pub const fn un_remove(&mut self) {
        self.is_removed = false;
    }

    /// Append `; display: none;` to the `style` attribute, creating it if
    /// absent. No-op on a removed node.
    ///
    /// Repeated calls append repeatedly; callers wanting idempotence must
    /// pair each `hidden()` with a [`Element::show`].
    pub fn hidden(&mut self) {
        if self.is_removed {
            return;
        }

        let existing = self.attributes.get("style").map_or("", String::as_str);
        let style = format!("{existing}; display: none;");
        let _ = self.attributes.insert("style".to_string(), style);
    }

    /// Strip the first `display: none` (with optional trailing semicolon)
    /// from the `style` attribute, trimming the remainder and deleting the
    /// attribute entirely if nothing is left. No-op on a removed node.
    pub fn show(&mut self) {
        if self.is_removed {
            return;
        }

        if let Some(style) = self.attributes.get("style") {
            let stripped = DISPLAY_NONE.replace(style, "").trim().to_string();
            if stripped.is_empty() {
                let _ = self.attributes.remove("style");
            } else {
                let _ = self.attributes.insert("style".to_string(), stripped);
            }
        }
    }

    /// Keep only the attributes named in `whitelist`, on this node and on
    /// every descendant (removed descendants included).
    ///
    /// The wildcard token `"*"` anywhere in the whitelist short-circuits
    /// the entire subtree unmodified.
    pub fn filter_attributes(&mut self, whitelist: &[&str]) {
        if whitelist.contains(&"*") {
            return;
        }

        self.attributes
            .retain(|key, _| whitelist.contains(&key.as_str()));

        for child in &mut self.children {
            child.filter_attributes(whitelist);
        }
    }

    fn attributes_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.attributes {
            let _ = write!(out, " {key}=\"{value}\"");
        }
        out
    }
}
