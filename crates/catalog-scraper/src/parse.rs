//! Page-level parsing: product nodes → colour variants.

use catalog_core::{ProductBase, ProductVariant};
use scraper::ElementRef;

use crate::document::{node_attr, Document};
use crate::error::ScraperError;
use crate::extract::{extract_base, UNKNOWN};
use crate::selectors::{ProductSelectors, SelectorConfig};

/// Turns a fetched listing page into variant records.
#[derive(Debug)]
pub struct PageParser {
    selectors: ProductSelectors,
    image_base: String,
}

impl PageParser {
    /// Creates a parser for the default listing markup.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if a selector fails to compile.
    pub fn new(image_base: impl Into<String>) -> Result<Self, ScraperError> {
        Self::with_config(&SelectorConfig::default(), image_base)
    }

    /// Creates a parser with custom selectors.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] if a selector fails to compile.
    pub fn with_config(
        config: &SelectorConfig,
        image_base: impl Into<String>,
    ) -> Result<Self, ScraperError> {
        Ok(Self {
            selectors: ProductSelectors::compile(config)?,
            image_base: image_base.into(),
        })
    }

    /// Number of pagination links on `document`, taken as the total page count.
    #[must_use]
    pub fn page_count(&self, document: &Document) -> usize {
        document.select(&self.selectors.pagination_link).count()
    }

    /// All variants on the page, in document order: products first to last,
    /// and within a product its colours first to last.
    #[must_use]
    pub fn parse_page(&self, document: &Document) -> Vec<ProductVariant> {
        let mut variants = Vec::new();
        for (index, node) in document.select(&self.selectors.product).enumerate() {
            let base = extract_base(node, &self.selectors, &self.image_base);
            let expanded = expand_variants(node, &base, &self.selectors);
            if expanded.is_empty() {
                tracing::debug!(index, title = %base.title, "product declares no colours; skipped");
            }
            variants.extend(expanded);
        }
        variants
    }
}

/// One record per colour node under `node`, each a copy of `base` with its
/// own colour. A product without colour nodes yields nothing.
#[must_use]
pub fn expand_variants(
    node: ElementRef<'_>,
    base: &ProductBase,
    selectors: &ProductSelectors,
) -> Vec<ProductVariant> {
    node.select(&selectors.colour)
        .map(|colour_node| {
            let colour = node_attr(colour_node, &selectors.colour_attr)
                .filter(|c| !c.is_empty())
                .unwrap_or(UNKNOWN);
            base.with_colour(colour)
        })
        .collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
