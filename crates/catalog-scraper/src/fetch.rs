//! Retrieving listing pages as parsed documents.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::document::Document;
use crate::error::ScraperError;

/// Source of listing pages.
///
/// The crawl depends only on this trait, so tests can serve fixture pages
/// from memory.
pub trait DocumentFetcher {
    /// Fetches `url` and parses the body.
    ///
    /// Implementations must report a missing page as
    /// [`ScraperError::NotFound`] so callers can tell it apart from other
    /// failures.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Document, ScraperError>>;
}

/// [`DocumentFetcher`] over HTTP. Every non-2xx response is an error and
/// nothing is retried.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates an `HttpFetcher` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl DocumentFetcher for HttpFetcher {
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`] — HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`ScraperError::Http`] — network, TLS or body read failure.
    async fn fetch(&self, url: &str) -> Result<Document, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: url.to_owned(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched listing page");
        Ok(Document::parse(&body))
    }
}
