//! Uniform query interface over a parsed document.
//!
//! Everything above this module talks to [`Document`] and [`Node`]; nothing
//! else in the crate touches `scraper` directly. Lookups never fail: a
//! selector that matches nothing (or does not parse) yields `None` or an
//! empty `Vec`.

use catalog_logging::catalog_warn;
use scraper::{ElementRef, Html, Selector};

/// A parsed document, either a full page or a markup fragment.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a complete HTML page.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Parses a markup fragment such as the `result` of a JSON envelope.
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// The node every document-wide query starts from.
    pub fn root(&self) -> Node<'_> {
        Node(self.html.root_element())
    }

    pub fn find(&self, selector: &str) -> Option<Node<'_>> {
        self.root().find(selector)
    }

    pub fn find_all(&self, selector: &str) -> Vec<Node<'_>> {
        self.root().find_all(selector)
    }
}

/// A single element inside a [`Document`].
#[derive(Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// First descendant matching `selector`.
    pub fn find(&self, selector: &str) -> Option<Node<'a>> {
        let selector = compile(selector)?;
        self.0.select(&selector).next().map(Node)
    }

    /// All descendants matching `selector`, in document order.
    pub fn find_all(&self, selector: &str) -> Vec<Node<'a>> {
        match compile(selector) {
            Some(selector) => self.0.select(&selector).map(Node).collect(),
            None => Vec::new(),
        }
    }

    /// Whether any descendant matches `selector`.
    pub fn has(&self, selector: &str) -> bool {
        self.find(selector).is_some()
    }

    /// Concatenated text of the node and its descendants, untrimmed.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }
}

impl std::fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Node").field(&self.0.value().name()).finish()
    }
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(err) => {
            catalog_warn!("Ignoring unparsable selector {:?}: {:?}", selector, err);
            None
        }
    }
}
