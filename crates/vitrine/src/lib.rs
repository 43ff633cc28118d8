#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Vitrine
//!
//! Conventions for organizing page behavior, and one worked module built on
//! them.
//!
//! Each page module owns a small, repeatable set of things:
//!
//! - CSS classes and selector strings, declared as constants
//! - resolved element handles (lookups, not owned resources)
//! - local state
//! - event handling
//! - an entry in a shared [`Registry`](module::Registry) so other modules can
//!   reach a live instance without re-walking the tree
//!
//! The shared pieces are free functions and an explicit registry object
//! rather than a base class; modules compose them.
//!
//! - **module** - option parsing, the instance registry, the `PageModule` seam
//! - **event** - click messages
//! - **showcase** - the product showcase module (title emphasis toggle)
//!
//! ## Example
//!
//! ```rust
//! use maquette::Document;
//! use vitrine::module::Registry;
//! use vitrine::showcase::{self, Showcase};
//!
//! let mut doc = Document::new("body");
//! let card = doc.create_element_in(doc.root(), "section");
//! let title = doc.create_element_in(card, "h2");
//! doc.add_class(title, showcase::css::TITLE);
//!
//! let mut registry = Registry::new();
//! Showcase::mount(&mut doc, card, &mut registry);
//!
//! let module = registry.get_mut(card).unwrap();
//! assert!(module.toggle_title_italic(&mut doc, None));
//! ```

pub mod event;
pub mod module;
pub mod showcase;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::event::ClickMsg;
    pub use crate::module::{PageModule, Registry, bool_attr};
    pub use crate::showcase::{Showcase, ShowcaseDom, ShowcaseOptions};
}
