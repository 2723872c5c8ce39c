//! Thin DOM capability over `scraper`: parse a page, select nodes in
//! document order, and read normalized text and attributes.

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses `body` as a full HTML document. html5ever recovers from any
    /// malformed markup, so this never fails.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// All elements matching `selector`, in document order.
    #[must_use]
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }
}

/// Descendant text of `node` with whitespace runs collapsed to a single
/// space and the ends trimmed.
#[must_use]
pub fn node_text(node: ElementRef<'_>) -> String {
    let raw: String = node.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Value of attribute `name` on `node`, if present.
#[must_use]
pub fn node_attr<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}
