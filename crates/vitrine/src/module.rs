//! Shared page-module conventions: option parsing and the instance registry.
//!
//! These are the pieces every module needs but no module should own: reading
//! declarative configuration off an element, and a place to register live
//! instances so that other modules can reach them. Both are deliberately
//! plain - free functions and an explicit context object the caller owns and
//! injects, with explicit removal on container teardown.
//!
//! # Example
//!
//! ```rust
//! use maquette::Document;
//! use vitrine::module::bool_attr;
//!
//! let mut doc = Document::new("body");
//! let card = doc.create_element_in(doc.root(), "section");
//! doc.set_attr(card, "data-italic", "true");
//!
//! assert_eq!(bool_attr(&doc, card, "data-italic"), Some(true));
//! assert_eq!(bool_attr(&doc, card, "data-missing"), None);
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use maquette::{Document, NodeId};
use tracing::debug;

use crate::event::ClickMsg;

/// Reads a boolean-like attribute off an element.
///
/// Recognized spellings, case-insensitive: `true`, `1`, `yes`, and the bare
/// attribute (empty value) are `true`; `false`, `0`, `no` are `false`.
/// Anything else - including an absent attribute - is `None`, so the
/// caller's default applies. Declarative configuration is tolerant: a typo in
/// markup must never fail module construction.
#[must_use]
pub fn bool_attr(doc: &Document, id: NodeId, name: &str) -> Option<bool> {
    let raw = doc.attr(id, name)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// The seam a module implements so a page can route events to it.
pub trait PageModule {
    /// The container element this module is bound to.
    fn root(&self) -> NodeId;

    /// Offers a click to the module. Returns whether the module handled it.
    ///
    /// Modules only react to elements they wired at construction time;
    /// everything else is ignored and reported unhandled.
    fn on_click(&mut self, doc: &mut Document, target: NodeId) -> bool;
}

/// Container-keyed registry of live module instances.
///
/// One instance per container element. The registry is the only shared state
/// between modules: construction inserts, other modules look up by container
/// id, and teardown removes explicitly. It is a pure lookup aid - nothing in
/// a module's behavior depends on being registered.
#[derive(Debug)]
pub struct Registry<M> {
    entries: HashMap<NodeId, M>,
}

impl<M> Registry<M> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers `module` under its container `root`, returning the live
    /// instance.
    ///
    /// Re-inserting for the same container replaces the previous instance;
    /// a container has exactly one module.
    pub fn insert(&mut self, root: NodeId, module: M) -> &mut M {
        debug!(root = %root, "module registered");
        match self.entries.entry(root) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(module);
                occupied.into_mut()
            }
            Entry::Vacant(vacant) => vacant.insert(module),
        }
    }

    /// Returns the instance registered for `root`, if any.
    #[must_use]
    pub fn get(&self, root: NodeId) -> Option<&M> {
        self.entries.get(&root)
    }

    /// Returns the instance registered for `root` mutably, if any.
    #[must_use]
    pub fn get_mut(&mut self, root: NodeId) -> Option<&mut M> {
        self.entries.get_mut(&root)
    }

    /// Removes and returns the instance for `root`.
    ///
    /// Call this when the container element is being torn down.
    pub fn remove(&mut self, root: NodeId) -> Option<M> {
        let removed = self.entries.remove(&root);
        if removed.is_some() {
            debug!(root = %root, "module unregistered");
        }
        removed
    }

    /// Returns whether a module is registered for `root`.
    #[must_use]
    pub fn contains(&self, root: NodeId) -> bool {
        self.entries.contains_key(&root)
    }

    /// Returns the number of registered modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the container ids with a registered module.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.keys().copied()
    }
}

impl<M: PageModule> Registry<M> {
    /// Offers a click to every registered module.
    ///
    /// Returns whether any module handled it. Modules check the target
    /// against their own wired elements, so at most the owner of the pressed
    /// element reacts; the rest ignore it.
    pub fn dispatch_click(&mut self, doc: &mut Document, click: ClickMsg) -> bool {
        let mut handled = false;
        for module in self.entries.values_mut() {
            handled |= module.on_click(doc, click.target);
        }
        handled
    }
}

impl<M> Default for Registry<M> {
    fn default() -> Self {
        Self::new()
    }
}
