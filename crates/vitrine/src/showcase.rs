//! The product showcase module.
//!
//! The worked example of the page-module conventions: one container element,
//! declarative configuration read off its attributes, three resolved child
//! elements, one piece of local state, and a click handler. The only visible
//! behavior is toggling an emphasis class on the title.
//!
//! # Example
//!
//! ```rust
//! use maquette::Document;
//! use vitrine::showcase::{self, Showcase, ShowcaseOptions};
//!
//! let mut doc = Document::new("body");
//! let card = doc.create_element_in(doc.root(), "section");
//! let title = doc.create_element_in(card, "h2");
//! doc.add_class(title, showcase::css::TITLE);
//!
//! let mut module = Showcase::with_options(&mut doc, card, ShowcaseOptions { italic: true });
//! assert!(doc.has_class(title, showcase::css::TITLE_ITALIC));
//!
//! module.toggle_title_italic(&mut doc, None);
//! assert!(!doc.has_class(title, showcase::css::TITLE_ITALIC));
//! ```

use maquette::{Document, NodeId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use unicode_width::UnicodeWidthStr;

use crate::module::{self, PageModule, Registry};

/// Class names used from behavior code.
///
/// Declared without the leading dot so they can be passed to the class-list
/// methods directly.
pub mod css {
    /// The title element of a showcase card.
    pub const TITLE: &str = "product-showcase__title";
    /// The supporting text element.
    pub const TEXT: &str = "product-showcase__text";
    /// Emphasis modifier toggled on the title.
    pub const TITLE_ITALIC: &str = "product-showcase__title--italic";
}

/// Selector strings used to resolve the module's parts.
///
/// The class-coupled selectors (title, text) are a bad habit kept for
/// illustration; `[data-button]` shows the recommended shape, a data
/// attribute that marks an element as a behavior hook without tying it to
/// styling.
pub mod selectors {
    /// Title lookup, scoped under the container.
    pub const TITLE: &str = ".product-showcase__title";
    /// Supporting text lookup.
    pub const TEXT: &str = ".product-showcase__text";
    /// Action button lookup.
    pub const BUTTON: &str = "[data-button]";
}

/// Declarative option attribute recognized on the container element.
pub const ITALIC_ATTR: &str = "data-italic";

/// Options for the showcase module.
///
/// Read once at construction, immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseOptions {
    /// Whether the title starts out italic.
    pub italic: bool,
}

/// Resolved element handles.
///
/// Lookups, not owned resources; any of them may legitimately be absent.
/// A showcase variant without a button is a normal configuration, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseDom {
    /// The title element, target of the emphasis toggle.
    pub title: Option<NodeId>,
    /// The supporting text element. Resolved but not acted on; reserved.
    pub text: Option<NodeId>,
    /// The action button whose clicks drive the toggle.
    pub button: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ShowcaseState {
    is_title_italic: bool,
}

/// Controller instance bound to one container element.
#[derive(Debug, Clone)]
pub struct Showcase {
    root: NodeId,
    options: ShowcaseOptions,
    dom: ShowcaseDom,
    state: ShowcaseState,
}

/// Parses the showcase options declared on a container element.
///
/// Tolerant: a missing or malformed attribute yields the field default
/// rather than failing construction.
#[must_use]
pub fn parse_options(doc: &Document, root: NodeId) -> ShowcaseOptions {
    ShowcaseOptions {
        italic: module::bool_attr(doc, root, ITALIC_ATTR).unwrap_or(false),
    }
}

impl Showcase {
    /// Creates a showcase bound to `root`, reading options off the element.
    pub fn new(doc: &mut Document, root: NodeId) -> Self {
        let options = parse_options(doc, root);
        Self::with_options(doc, root, options)
    }

    /// Creates a showcase bound to `root` with explicit options, skipping
    /// the attribute parse.
    pub fn with_options(doc: &mut Document, root: NodeId, options: ShowcaseOptions) -> Self {
        let dom = ShowcaseDom {
            title: doc.query(root, selectors::TITLE),
            text: doc.query(root, selectors::TEXT),
            button: doc.query(root, selectors::BUTTON),
        };

        let mut showcase = Self {
            root,
            options,
            dom,
            state: ShowcaseState {
                is_title_italic: options.italic,
            },
        };

        // Click wiring is the button lookup itself: a found button makes
        // on_click live, an absent one leaves the module deaf. The first
        // paint makes the tree agree with the seeded state before any event
        // can arrive.
        let initial = showcase.state.is_title_italic;
        showcase.toggle_title_italic(doc, Some(initial));

        debug!(
            root = %root,
            title = dom.title.is_some(),
            button = dom.button.is_some(),
            italic = initial,
            "product showcase constructed"
        );

        showcase
    }

    /// Constructs a showcase for `root` and registers it, returning the live
    /// instance.
    ///
    /// This is the normal entry point: callers that only need the page wired
    /// up can drop the return value and reach the instance later through the
    /// registry.
    pub fn mount<'r>(
        doc: &mut Document,
        root: NodeId,
        registry: &'r mut Registry<Self>,
    ) -> &'r mut Self {
        let showcase = Self::new(doc, root);
        registry.insert(root, showcase)
    }

    /// Toggles (or sets) the title emphasis.
    ///
    /// With `Some(value)` the state is set to `value`; with `None` it flips.
    /// The emphasis class on the title is then forced to match the new state,
    /// so repeating the same explicit value is idempotent.
    ///
    /// If no title element was found at construction time this is a no-op
    /// that returns `false` - the false-equivalent sentinel callers treat as
    /// an ordinary boolean outcome. On success, returns the new state.
    pub fn toggle_title_italic(&mut self, doc: &mut Document, value: Option<bool>) -> bool {
        let Some(title) = self.dom.title else {
            return false;
        };

        self.state.is_title_italic = value.unwrap_or(!self.state.is_title_italic);
        doc.set_class(title, css::TITLE_ITALIC, self.state.is_title_italic);

        trace!(root = %self.root, italic = self.state.is_title_italic, "title emphasis toggled");
        self.state.is_title_italic
    }

    /// Handles a click on `target`.
    ///
    /// Only a press on the wired button flips the state; any other target is
    /// ignored and reported unhandled.
    pub fn on_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
        if self.dom.button != Some(target) {
            return false;
        }
        self.toggle_title_italic(doc, None);
        true
    }

    /// Returns the container element this showcase is bound to.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the options resolved at construction.
    #[must_use]
    pub fn options(&self) -> ShowcaseOptions {
        self.options
    }

    /// Returns the resolved element handles.
    #[must_use]
    pub fn dom(&self) -> ShowcaseDom {
        self.dom
    }

    /// Returns whether the title is currently emphasized.
    #[must_use]
    pub fn is_title_italic(&self) -> bool {
        self.state.is_title_italic
    }

    /// Renders the showcase as a plain bordered card.
    ///
    /// Missing parts simply contribute no row.
    #[must_use]
    pub fn view(&self, doc: &Document) -> String {
        self.render(doc, false)
    }

    /// Renders the showcase with terminal styling.
    ///
    /// The title row carries the italic attribute exactly when the emphasis
    /// class is present on the title element - the render reads the tree,
    /// not the module state.
    #[must_use]
    pub fn view_styled(&self, doc: &Document) -> String {
        self.render(doc, true)
    }

    fn render(&self, doc: &Document, styled: bool) -> String {
        let mut rows: Vec<(String, bool)> = Vec::new();
        if let Some(title) = self.dom.title {
            rows.push((doc.text(title).unwrap_or_default().to_string(), true));
        }
        if let Some(text) = self.dom.text {
            rows.push((doc.text(text).unwrap_or_default().to_string(), false));
        }
        if let Some(button) = self.dom.button {
            rows.push((format!("[ {} ]", doc.text(button).unwrap_or("click")), false));
        }

        let emphasize = styled
            && self
                .dom
                .title
                .is_some_and(|title| doc.has_class(title, css::TITLE_ITALIC));

        let inner = rows
            .iter()
            .map(|(content, _)| UnicodeWidthStr::width(content.as_str()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        out.push('╭');
        out.push_str(&"─".repeat(inner + 2));
        out.push_str("╮\n");
        for (content, is_title) in &rows {
            let pad = " ".repeat(inner - UnicodeWidthStr::width(content.as_str()));
            let body = if *is_title && emphasize {
                italicize(content)
            } else {
                content.clone()
            };
            out.push_str(&format!("│ {body}{pad} │\n"));
        }
        out.push('╰');
        out.push_str(&"─".repeat(inner + 2));
        out.push('╯');
        out
    }
}

impl PageModule for Showcase {
    fn root(&self) -> NodeId {
        Showcase::root(self)
    }

    fn on_click(&mut self, doc: &mut Document, target: NodeId) -> bool {
        Showcase::on_click(self, doc, target)
    }
}

fn italicize(text: &str) -> String {
    use crossterm::style::Stylize;
    text.italic().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full card: container, title, text, button.
    fn full_card(doc: &mut Document) -> (NodeId, NodeId, NodeId) {
        let card = doc.create_element_in(doc.root(), "section");
        doc.add_class(card, "product-showcase");

        let title = doc.create_element_in(card, "h2");
        doc.add_class(title, css::TITLE);
        doc.set_text(title, "Autumn Collection");

        let text = doc.create_element_in(card, "p");
        doc.add_class(text, css::TEXT);
        doc.set_text(text, "Hand-picked items for the season.");

        let button = doc.create_element_in(card, "button");
        doc.set_attr(button, "data-button", "");
        doc.set_text(button, "Emphasize");

        (card, title, button)
    }

    #[test]
    fn default_state_without_attribute() {
        let mut doc = Document::new("body");
        let (card, title, _) = full_card(&mut doc);

        let module = Showcase::new(&mut doc, card);

        assert!(!module.is_title_italic());
        assert!(!doc.has_class(title, css::TITLE_ITALIC));
        assert!(!module.options().italic);
    }

    #[test]
    fn option_honored_from_attribute() {
        let mut doc = Document::new("body");
        let (card, title, _) = full_card(&mut doc);
        doc.set_attr(card, ITALIC_ATTR, "true");

        let module = Showcase::new(&mut doc, card);

        // First paint applies the option, no click needed
        assert!(module.is_title_italic());
        assert!(doc.has_class(title, css::TITLE_ITALIC));
    }

    #[test]
    fn malformed_attribute_falls_back_to_default() {
        let mut doc = Document::new("body");
        let (card, title, _) = full_card(&mut doc);
        doc.set_attr(card, ITALIC_ATTR, "sideways");

        let module = Showcase::new(&mut doc, card);

        assert!(!module.is_title_italic());
        assert!(!doc.has_class(title, css::TITLE_ITALIC));
    }

    #[test]
    fn explicit_options_skip_attribute_parse() {
        let mut doc = Document::new("body");
        let (card, title, _) = full_card(&mut doc);
        doc.set_attr(card, ITALIC_ATTR, "false");

        let module =
            Showcase::with_options(&mut doc, card, ShowcaseOptions { italic: true });

        assert!(module.is_title_italic());
        assert!(doc.has_class(title, css::TITLE_ITALIC));
    }

    #[test]
    fn toggle_flips_and_syncs_class() {
        let mut doc = Document::new("body");
        let (card, title, _) = full_card(&mut doc);
        let mut module = Showcase::new(&mut doc, card);

        assert!(module.toggle_title_italic(&mut doc, None));
        assert!(module.is_title_italic());
        assert!(doc.has_class(title, css::TITLE_ITALIC));

        assert!(!module.toggle_title_italic(&mut doc, None));
        assert!(!module.is_title_italic());
        assert!(!doc.has_class(title, css::TITLE_ITALIC));
    }

    #[test]
    fn explicit_value_is_idempotent() {
        let mut doc = Document::new("body");
        let (card, title, _) = full_card(&mut doc);
        let mut module = Showcase::new(&mut doc, card);

        assert!(module.toggle_title_italic(&mut doc, Some(true)));
        assert!(module.toggle_title_italic(&mut doc, Some(true)));
        assert!(doc.has_class(title, css::TITLE_ITALIC));

        assert!(!module.toggle_title_italic(&mut doc, Some(false)));
        assert!(!module.toggle_title_italic(&mut doc, Some(false)));
        assert!(!doc.has_class(title, css::TITLE_ITALIC));
    }

    #[test]
    fn absent_title_is_a_safe_no_op() {
        let mut doc = Document::new("body");
        let card = doc.create_element_in(doc.root(), "section");
        let button = doc.create_element_in(card, "button");
        doc.set_attr(button, "data-button", "");

        let mut module = Showcase::new(&mut doc, card);
        let before = doc.clone();

        assert!(!module.toggle_title_italic(&mut doc, None));
        assert!(!module.toggle_title_italic(&mut doc, Some(true)));
        assert!(!module.is_title_italic());
        // No element gained the emphasis class
        for id in before.descendants(before.root()) {
            assert!(!doc.has_class(id, css::TITLE_ITALIC));
        }
    }

    #[test]
    fn click_on_button_flips() {
        let mut doc = Document::new("body");
        let (card, title, button) = full_card(&mut doc);
        let mut module = Showcase::new(&mut doc, card);

        assert!(module.on_click(&mut doc, button));
        assert!(module.is_title_italic());
        assert!(doc.has_class(title, css::TITLE_ITALIC));

        assert!(module.on_click(&mut doc, button));
        assert!(!module.is_title_italic());
        assert!(!doc.has_class(title, css::TITLE_ITALIC));
    }

    #[test]
    fn click_elsewhere_is_ignored() {
        let mut doc = Document::new("body");
        let (card, title, _) = full_card(&mut doc);
        let mut module = Showcase::new(&mut doc, card);

        assert!(!module.on_click(&mut doc, title));
        assert!(!module.on_click(&mut doc, card));
        assert!(!module.is_title_italic());
    }

    #[test]
    fn no_button_leaves_module_deaf() {
        let mut doc = Document::new("body");
        let card = doc.create_element_in(doc.root(), "section");
        let title = doc.create_element_in(card, "h2");
        doc.add_class(title, css::TITLE);

        let mut module = Showcase::new(&mut doc, card);
        assert!(module.dom().button.is_none());

        assert!(!module.on_click(&mut doc, title));
        assert!(!module.is_title_italic());
    }

    #[test]
    fn lookups_are_scoped_to_the_container() {
        let mut doc = Document::new("body");
        // A stray title outside the container must not be picked up
        let stray = doc.create_element_in(doc.root(), "h2");
        doc.add_class(stray, css::TITLE);

        let card = doc.create_element_in(doc.root(), "section");
        let module = Showcase::new(&mut doc, card);

        assert!(module.dom().title.is_none());
    }

    #[test]
    fn view_lists_card_rows() {
        let mut doc = Document::new("body");
        let (card, _, _) = full_card(&mut doc);
        let module = Showcase::new(&mut doc, card);

        let view = module.view(&doc);
        assert!(view.contains("Autumn Collection"));
        assert!(view.contains("Hand-picked items for the season."));
        assert!(view.contains("[ Emphasize ]"));
        assert!(view.contains('╭'));
        assert!(view.contains('╯'));
    }

    #[test]
    fn view_styled_reflects_emphasis_class() {
        let mut doc = Document::new("body");
        let (card, _, button) = full_card(&mut doc);
        let mut module = Showcase::new(&mut doc, card);

        // SGR 3 is the italic attribute
        assert!(!module.view_styled(&doc).contains("\u{1b}[3m"));

        module.on_click(&mut doc, button);
        assert!(module.view_styled(&doc).contains("\u{1b}[3m"));

        // Plain view never styles
        assert!(!module.view(&doc).contains("\u{1b}[3m"));
    }

    #[test]
    fn view_of_empty_card_is_total() {
        let mut doc = Document::new("body");
        let card = doc.create_element_in(doc.root(), "section");
        let module = Showcase::new(&mut doc, card);

        let view = module.view(&doc);
        assert!(view.contains('╭'));
    }

    #[test]
    fn options_serde_round_trip() {
        let options = ShowcaseOptions { italic: true };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"italic":true}"#);

        let back: ShowcaseOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);

        // Missing field falls back to the default
        let defaulted: ShowcaseOptions = serde_json::from_str("{}").unwrap();
        assert!(!defaulted.italic);
    }
}
