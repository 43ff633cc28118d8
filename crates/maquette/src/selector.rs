//! Selector parsing and scoped queries.
//!
//! Three selector forms are supported, which is the whole grammar page
//! modules consume: `.class`, `[attr]` (attribute presence, value ignored),
//! and a bare `tag` name. Compound and descendant combinators are out of
//! scope.
//!
//! # Example
//!
//! ```rust
//! use maquette::{Document, Selector};
//!
//! let mut doc = Document::new("body");
//! let button = doc.create_element_in(doc.root(), "button");
//! doc.set_attr(button, "data-button", "");
//!
//! let sel: Selector = "[data-button]".parse().unwrap();
//! assert_eq!(doc.query_selector(doc.root(), &sel), Some(button));
//! ```

use std::str::FromStr;

use thiserror::Error;

use crate::element::{Document, Node, NodeId};

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Matches elements by tag name: `h2`.
    Tag(String),
    /// Matches elements carrying a class: `.product-showcase__title`.
    Class(String),
    /// Matches elements carrying an attribute, any value: `[data-button]`.
    Attr(String),
}

/// Error returned when parsing an unsupported or malformed selector string.
///
/// # Valid Selector Strings
///
/// - `.name` - class selector
/// - `[name]` - attribute-presence selector
/// - `name` - tag selector
///
/// Names may contain ASCII alphanumerics, `-`, and `_`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid selector: {0:?}")]
pub struct ParseSelectorError(String);

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl Selector {
    /// Returns whether this selector matches `node`.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        match self {
            Self::Tag(tag) => node.tag() == tag,
            Self::Class(class) => node.has_class(class),
            Self::Attr(name) => node.attr(name).is_some(),
        }
    }
}

impl FromStr for Selector {
    type Err = ParseSelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(class) = s.strip_prefix('.') {
            if is_name(class) {
                return Ok(Self::Class(class.to_string()));
            }
        } else if let Some(rest) = s.strip_prefix('[') {
            if let Some(name) = rest.strip_suffix(']') {
                if is_name(name) {
                    return Ok(Self::Attr(name.to_string()));
                }
            }
        } else if is_name(s) {
            return Ok(Self::Tag(s.to_string()));
        }
        Err(ParseSelectorError(s.to_string()))
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Attr(name) => write!(f, "[{name}]"),
        }
    }
}

impl Document {
    /// Returns the first descendant of `scope` matching `selector`.
    ///
    /// Matches in depth-first document order; `scope` itself is never a
    /// candidate.
    #[must_use]
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .find(|id| self.get(*id).is_some_and(|node| selector.matches(node)))
    }

    /// Returns every descendant of `scope` matching `selector`, in document
    /// order.
    #[must_use]
    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|id| self.get(*id).is_some_and(|node| selector.matches(node)))
            .collect()
    }

    /// Tolerant convenience query: parses `selector` and returns the first
    /// match under `scope`.
    ///
    /// An unparseable selector behaves as "no match". Modules resolve their
    /// parts with fixed selector strings and treat every miss as a normal
    /// configuration, so this path never fails; use
    /// [`query_selector`](Self::query_selector) with a parsed [`Selector`]
    /// when strictness matters.
    #[must_use]
    pub fn query(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        let selector: Selector = selector.parse().ok()?;
        self.query_selector(scope, &selector)
    }
}
