//! The crawl loop: discover the page count, then fetch and parse every page
//! in order.

use std::time::Duration;

use catalog_core::ProductVariant;

use crate::error::ScraperError;
use crate::fetch::DocumentFetcher;
use crate::pagination::{page_url, MAX_PAGES};
use crate::parse::PageParser;

/// Knobs for [`crawl_catalog`].
#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// Delay in milliseconds between page requests (not applied before the
    /// first numbered page).
    pub inter_request_delay_ms: u64,
}

/// Crawls the whole listing at `listing_url` and returns every variant in
/// page order, then document order within each page.
///
/// The unnumbered listing URL is fetched first and its pagination links are
/// counted to get `N`; pages `1..=N` are then fetched one at a time.
///
/// **All-or-nothing semantics**: if any fetch fails the error is returned and
/// every record gathered so far is dropped. A partial catalog is never
/// returned.
///
/// # Errors
///
/// - Any error from [`DocumentFetcher::fetch`], for the discovery request or
///   any numbered page.
/// - [`ScraperError::InvalidListingUrl`] if page URLs cannot be built.
/// - [`ScraperError::PaginationLimit`] if more than [`MAX_PAGES`] pagination
///   links are found.
pub async fn crawl_catalog<F>(
    fetcher: &F,
    parser: &PageParser,
    listing_url: &str,
    options: &CrawlOptions,
) -> Result<Vec<ProductVariant>, ScraperError>
where
    F: DocumentFetcher,
{
    let first_page = fetcher.fetch(listing_url).await?;
    let pages = parser.page_count(&first_page);
    drop(first_page);

    if pages > MAX_PAGES {
        return Err(ScraperError::PaginationLimit {
            url: listing_url.to_owned(),
            pages,
            max_pages: MAX_PAGES,
        });
    }
    if pages == 0 {
        tracing::warn!(listing_url, "no pagination links found; catalog will be empty");
    } else {
        tracing::info!(listing_url, pages, "discovered listing pages");
    }

    let mut variants: Vec<ProductVariant> = Vec::new();
    for page in 1..=pages {
        if page > 1 && options.inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(options.inter_request_delay_ms)).await;
        }

        let url = page_url(listing_url, page)?;
        let document = fetcher.fetch(&url).await?;
        let page_variants = parser.parse_page(&document);
        tracing::info!(page, pages, variants = page_variants.len(), "parsed page");
        variants.extend(page_variants);
    }

    tracing::info!(pages, variants = variants.len(), "crawl complete");
    Ok(variants)
}

#[cfg(test)]
#[path = "crawl_test.rs"]
mod tests;
