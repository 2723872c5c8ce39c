//! CSS selectors describing where each field lives in the listing markup.

use scraper::Selector;

use crate::error::ScraperError;

/// Selector strings for the listing site. [`Default`] matches the
/// smartphone challenge site; override individual fields for look-alikes.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub pagination_link: String,
    pub product: String,
    pub name: String,
    pub capacity: String,
    pub price: String,
    pub image: String,
    /// Matches both the availability line (first match) and the shipping
    /// line (last match) inside a product.
    pub small_text: String,
    pub colour: String,
    /// Attribute on `colour` nodes carrying the colour identifier.
    pub colour_attr: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            pagination_link: "#pages a".to_owned(),
            product: ".product".to_owned(),
            name: ".product-name".to_owned(),
            capacity: ".product-capacity".to_owned(),
            price: ".text-lg".to_owned(),
            image: "img".to_owned(),
            small_text: ".text-sm".to_owned(),
            colour: "[data-colour]".to_owned(),
            colour_attr: "data-colour".to_owned(),
        }
    }
}

/// Compiled form of a [`SelectorConfig`].
#[derive(Debug)]
pub struct ProductSelectors {
    pub pagination_link: Selector,
    pub product: Selector,
    pub name: Selector,
    pub capacity: Selector,
    pub price: Selector,
    pub image: Selector,
    pub small_text: Selector,
    pub colour: Selector,
    pub colour_attr: String,
}

impl ProductSelectors {
    /// Compiles every selector in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidSelector`] naming the first field whose
    /// selector string does not parse.
    pub fn compile(config: &SelectorConfig) -> Result<Self, ScraperError> {
        Ok(Self {
            pagination_link: compile("pagination_link", &config.pagination_link)?,
            product: compile("product", &config.product)?,
            name: compile("name", &config.name)?,
            capacity: compile("capacity", &config.capacity)?,
            price: compile("price", &config.price)?,
            image: compile("image", &config.image)?,
            small_text: compile("small_text", &config.small_text)?,
            colour: compile("colour", &config.colour)?,
            colour_attr: config.colour_attr.clone(),
        })
    }
}

fn compile(field: &'static str, selector: &str) -> Result<Selector, ScraperError> {
    Selector::parse(selector).map_err(|e| ScraperError::InvalidSelector {
        field,
        selector: selector.to_owned(),
        reason: e.to_string(),
    })
}
