//! Sample page construction.
//!
//! Builds the markup the showcase module was written against, the same shape
//! an authored page would have:
//!
//! ```text
//! body
//! └── section.product-showcase [data-italic?]
//!     ├── h2.product-showcase__title     (omitted in the title-less variant)
//!     ├── p.product-showcase__text
//!     └── button[data-button]
//! ```

use maquette::{Document, NodeId};
use vitrine::showcase::{self, ITALIC_ATTR};

use crate::config::Config;

/// The built sample page and the handles the demo drives.
#[derive(Debug)]
pub struct SamplePage {
    /// The document tree.
    pub doc: Document,
    /// The showcase container element.
    pub card: NodeId,
    /// The action button (always present in the sample markup).
    pub button: NodeId,
}

/// Builds the sample page per the runtime configuration.
#[must_use]
pub fn build(config: &Config) -> SamplePage {
    let mut doc = Document::new("body");

    let card = doc.create_element_in(doc.root(), "section");
    doc.add_class(card, "product-showcase");
    if config.italic {
        doc.set_attr(card, ITALIC_ATTR, "true");
    }

    if !config.titleless {
        let title = doc.create_element_in(card, "h2");
        doc.add_class(title, showcase::css::TITLE);
        doc.set_text(title, "Autumn Collection");
    }

    let text = doc.create_element_in(card, "p");
    doc.add_class(text, showcase::css::TEXT);
    doc.set_text(text, "Hand-picked items for the season.");

    let button = doc.create_element_in(card, "button");
    doc.set_attr(button, "data-button", "");
    doc.set_text(button, "Emphasize");

    SamplePage { doc, card, button }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_page_matches_the_module_selectors() {
        let page = build(&Config::default());

        assert_eq!(
            page.doc.query(page.card, showcase::selectors::BUTTON),
            Some(page.button)
        );
        assert!(page.doc.query(page.card, showcase::selectors::TITLE).is_some());
        assert!(page.doc.query(page.card, showcase::selectors::TEXT).is_some());
        assert_eq!(page.doc.attr(page.card, ITALIC_ATTR), None);
    }

    #[test]
    fn italic_config_declares_the_attribute() {
        let config = Config {
            italic: true,
            ..Default::default()
        };
        let page = build(&config);
        assert_eq!(page.doc.attr(page.card, ITALIC_ATTR), Some("true"));
    }

    #[test]
    fn titleless_variant_keeps_the_button() {
        let config = Config {
            titleless: true,
            ..Default::default()
        };
        let page = build(&config);

        assert!(page.doc.query(page.card, showcase::selectors::TITLE).is_none());
        assert_eq!(
            page.doc.query(page.card, showcase::selectors::BUTTON),
            Some(page.button)
        );
    }
}
