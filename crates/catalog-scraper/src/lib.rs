pub mod crawl;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pagination;
pub mod parse;
pub mod selectors;

pub use crawl::{crawl_catalog, CrawlOptions};
pub use document::Document;
pub use error::ScraperError;
pub use fetch::{DocumentFetcher, HttpFetcher};
pub use parse::PageParser;
pub use selectors::{ProductSelectors, SelectorConfig};
