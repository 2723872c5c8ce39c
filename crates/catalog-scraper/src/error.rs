use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid listing URL \"{url}\": {reason}")]
    InvalidListingUrl { url: String, reason: String },

    #[error("invalid CSS selector for {field} (\"{selector}\"): {reason}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        reason: String,
    },

    #[error("pagination limit reached for {url}: {pages} pages exceeds {max_pages}")]
    PaginationLimit {
        url: String,
        pages: usize,
        max_pages: usize,
    },
}
