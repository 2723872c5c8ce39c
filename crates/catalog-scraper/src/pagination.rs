//! Page-numbered listing URLs.
//!
//! The listing is paginated with a `page` query parameter:
//!
//! ```text
//! https://www.magpiehq.com/developer-challenge/smartphones?page=2
//! ```
//!
//! The first, unnumbered request is only used to count pagination links;
//! every page including page 1 is then fetched by number.

use reqwest::Url;

use crate::error::ScraperError;

/// Upper bound on the discovered page count. A larger count means the
/// pagination selector is matching something other than page links.
pub const MAX_PAGES: usize = 500;

/// Builds the URL for page `page` of `listing_url`.
///
/// Existing query parameters are kept; any existing `page` parameter is
/// replaced.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidListingUrl`] if `listing_url` is not an
/// absolute URL.
pub fn page_url(listing_url: &str, page: usize) -> Result<String, ScraperError> {
    let mut url = Url::parse(listing_url).map_err(|e| ScraperError::InvalidListingUrl {
        url: listing_url.to_owned(),
        reason: e.to_string(),
    })?;

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (key, value) in &retained {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("page", &page.to_string());
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_page_param() {
        let url = page_url("https://www.magpiehq.com/developer-challenge/smartphones", 1).unwrap();
        assert_eq!(
            url,
            "https://www.magpiehq.com/developer-challenge/smartphones?page=1"
        );
    }

    #[test]
    fn keeps_other_query_params() {
        let url = page_url("https://example.com/phones?sort=price", 3).unwrap();
        assert_eq!(url, "https://example.com/phones?sort=price&page=3");
    }

    #[test]
    fn replaces_existing_page_param() {
        let url = page_url("https://example.com/phones?page=9&sort=price", 2).unwrap();
        assert_eq!(url, "https://example.com/phones?sort=price&page=2");
    }

    #[test]
    fn rejects_relative_url() {
        let result = page_url("/smartphones", 1);
        assert!(
            matches!(result, Err(ScraperError::InvalidListingUrl { .. })),
            "expected InvalidListingUrl, got: {result:?}"
        );
    }
}
