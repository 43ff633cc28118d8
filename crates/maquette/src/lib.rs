#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Maquette
//!
//! A minimal in-memory element tree for page-behavior modules.
//!
//! Maquette provides just enough of a markup substrate for modules that were
//! designed against a document tree: tags, class lists, attributes, text
//! content, ordered children, and scoped selector queries. It is not a
//! browser, a layout engine, or an HTML parser.
//!
//! - **element** - Arena-backed [`Document`] with copyable [`NodeId`] handles
//! - **selector** - `.class`, `[attr]`, and `tag` selectors with scoped queries
//!
//! ## Example
//!
//! ```rust
//! use maquette::Document;
//!
//! let mut doc = Document::new("body");
//! let card = doc.create_element_in(doc.root(), "section");
//! doc.add_class(card, "card");
//!
//! let found = doc.query(doc.root(), ".card");
//! assert_eq!(found, Some(card));
//! ```

pub mod element;
pub mod selector;

pub use element::{Descendants, Document, Node, NodeId};
pub use selector::{ParseSelectorError, Selector};
