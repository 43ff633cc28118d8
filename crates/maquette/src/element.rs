//! Arena-backed element tree.
//!
//! A [`Document`] owns every node and hands out copyable [`NodeId`] handles.
//! Handles stay valid for the lifetime of the document: the arena is
//! append-only and nodes are never destroyed, only re-parented. Module
//! teardown is a registry concern, not a tree concern.
//!
//! # Example
//!
//! ```rust
//! use maquette::Document;
//!
//! let mut doc = Document::new("body");
//! let title = doc.create_element_in(doc.root(), "h2");
//! doc.set_text(title, "Hello");
//! doc.add_class(title, "title");
//!
//! assert!(doc.has_class(title, "title"));
//! assert_eq!(doc.text(title), Some("Hello"));
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Handle to a node inside a [`Document`].
///
/// Ids are minted by exactly one document and are only meaningful there.
/// Passing a foreign id to accessor methods returns `None` from [`Document::get`];
/// the panicking index paths are reserved for ids the caller obtained from the
/// same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the raw arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single element: tag, classes, attributes, optional text, children.
#[derive(Debug, Clone)]
pub struct Node {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl Node {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        }
    }

    /// Returns the element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Returns whether the class list contains `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Returns the attribute value, if the attribute is present.
    ///
    /// A bare attribute (present without a value) is stored as `""`.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the text content, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the child ids in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the parent id, or `None` for the root and detached nodes.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// An append-only arena of elements with a fixed root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Creates a document whose root element has the given tag.
    #[must_use]
    pub fn new(root_tag: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_tag)],
            root: NodeId(0),
        }
    }

    /// Returns the root element id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the total number of elements, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the document holds only its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Returns the node behind `id`, or `None` for a foreign id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Creates a detached element.
    ///
    /// Attach it with [`append_child`](Self::append_child), or use
    /// [`create_element_in`](Self::create_element_in) to do both at once.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag));
        id
    }

    /// Creates an element and appends it to `parent`.
    pub fn create_element_in(&mut self, parent: NodeId, tag: impl Into<String>) -> NodeId {
        let id = self.create_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// A child that already has a parent is detached from it first, so an
    /// element has at most one position in the tree.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old_parent) = self.node(child).parent {
            let siblings = &mut self.node_mut(old_parent).children;
            siblings.retain(|c| *c != child);
        }
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Returns the tag name of `id`.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        self.node(id).tag()
    }

    /// Returns the text content of `id`, if any.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.node(id).text()
    }

    /// Sets the text content of `id`.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.node_mut(id).text = Some(text.into());
    }

    /// Returns the child ids of `id` in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).children()
    }

    /// Returns the parent of `id`.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    /// Adds a class to `id`. Duplicate adds keep a single entry.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let node = self.node_mut(id);
        if !node.has_class(class) {
            node.classes.push(class.to_string());
        }
    }

    /// Removes a class from `id`. Removing an absent class is a no-op.
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Returns whether `id` carries `class`.
    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).has_class(class)
    }

    /// Forces the presence of `class` on `id` to match `on`.
    ///
    /// Idempotent in both directions; returns `on` for symmetry with the
    /// classList toggle it mirrors.
    pub fn set_class(&mut self, id: NodeId, class: &str, on: bool) -> bool {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
        on
    }

    /// Returns the attribute value on `id`, if present.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attr(name)
    }

    /// Sets an attribute on `id`, replacing any previous value.
    ///
    /// Use an empty value for a bare attribute.
    pub fn set_attr(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.node_mut(id).attrs.insert(name.into(), value.into());
    }

    /// Iterates the descendants of `id` in depth-first preorder.
    ///
    /// `id` itself is not yielded; queries are scoped strictly below the
    /// element they start from.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.node(id).children.clone();
        stack.reverse();
        Descendants { doc: self, stack }
    }
}

/// Depth-first preorder iterator over the descendants of an element.
///
/// Created by [`Document::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        for child in self.doc.node(id).children.iter().rev() {
            self.stack.push(*child);
        }
        Some(id)
    }
}
