//! The fixed set of void element names.
//!
//! A void element is always self-closing regardless of trailing-slash
//! syntax: `<br>` and `<br/>` both yield a self-closing node, while
//! `<div/>` does not. The set is not configurable.

use std::str::FromStr;

use strum_macros::{Display, EnumString};

/// Tag names that never take a closing tag.
///
/// Matching is ASCII case-insensitive (`<BR>` is void); `Display` renders
/// the canonical lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoidElement {
    /// `<area>`
    Area,
    /// `<base>`
    Base,
    /// `<br>`
    Br,
    /// `<col>`
    Col,
    /// `<embed>`
    Embed,
    /// `<hr>`
    Hr,
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<link>`
    Link,
    /// `<meta>`
    Meta,
    /// `<source>`
    Source,
    /// `<track>`
    Track,
    /// `<wbr>`
    Wbr,
}

impl VoidElement {
    /// Whether `name` is a void element name, ASCII case-insensitively.
    #[must_use]
    pub fn matches(name: &str) -> bool {
        Self::from_str(name).is_ok()
    }
}
