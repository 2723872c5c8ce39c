//! Integration tests for `HttpFetcher` and `crawl_catalog` over real HTTP.
//!
//! Uses `wiremock` to stand up a local listing site for each test so no
//! real network traffic is made.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catalog_scraper::{
    crawl_catalog, CrawlOptions, DocumentFetcher, HttpFetcher, PageParser, ScraperError,
};

/// 5-second timeout, descriptive UA.
fn test_fetcher() -> HttpFetcher {
    HttpFetcher::new(5, "catalog-test/0.1").expect("failed to build test HttpFetcher")
}

fn test_parser() -> PageParser {
    PageParser::new("https://www.magpiehq.com/developer-challenge")
        .expect("default selectors compile")
}

fn product(name: &str, capacity: &str, colours: &[&str]) -> String {
    let spans: String = colours
        .iter()
        .map(|c| format!(r#"<span data-colour="{c}" class="border"></span>"#))
        .collect();
    format!(
        r#"<div class="product">
             <h3><span class="product-name">{name}</span> <span class="product-capacity">{capacity}</span></h3>
             <img src="../images/{capacity}.png">
             <div class="flex">{spans}</div>
             <div class="text-lg">£699.99</div>
             <div class="text-sm">Availability: In Stock</div>
             <div class="text-sm">Delivery by 15th August 2024</div>
           </div>"#
    )
}

fn page(products: &[String], pages: usize) -> String {
    let links: String = (1..=pages)
        .map(|i| format!(r#"<a href="?page={i}">{i}</a>"#))
        .collect();
    format!(
        r#"<!doctype html><html><body>{}<div id="pages"><div>{links}</div></div></body></html>"#,
        products.concat()
    )
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

/// Mounts `pages` as `?page=1..` and page 1 again as the unnumbered listing.
async fn mount_site(server: &MockServer, pages: &[String]) {
    for (i, body) in pages.iter().enumerate() {
        Mock::given(method("GET"))
            .and(path("/smartphones"))
            .and(query_param("page", (i + 1).to_string()))
            .respond_with(html(body.clone()))
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/smartphones"))
        .respond_with(html(pages[0].clone()))
        .with_priority(10)
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// HttpFetcher
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_returns_not_found_on_404() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let url = format!("{}/missing", server.uri());
    let result = test_fetcher().fetch(&url).await;
    assert!(
        matches!(result, Err(ScraperError::NotFound { url: ref u }) if *u == url),
        "expected NotFound, got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_returns_unexpected_status_on_503() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/smartphones"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let url = format!("{}/smartphones", server.uri());
    let result = test_fetcher().fetch(&url).await;
    assert!(
        matches!(result, Err(ScraperError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn fetch_returns_http_error_when_server_is_unreachable() {
    // Port 1 is reserved (tcpmux) and never served in test environments.
    let result = test_fetcher().fetch("http://127.0.0.1:1/smartphones").await;
    assert!(
        matches!(result, Err(ScraperError::Http(_))),
        "expected Http error, got: {result:?}"
    );
}

// ---------------------------------------------------------------------------
// crawl_catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn crawl_two_page_site_yields_three_variants_in_order() {
    let server = MockServer::start().await;
    mount_site(
        &server,
        &[
            page(&[product("iPhone 12", "64GB", &["Black", "Red"])], 2),
            page(&[product("Galaxy S21", "128GB", &["Phantom Grey"])], 2),
        ],
    )
    .await;

    let listing = format!("{}/smartphones", server.uri());
    let variants = crawl_catalog(
        &test_fetcher(),
        &test_parser(),
        &listing,
        &CrawlOptions::default(),
    )
    .await
    .expect("crawl should succeed");

    let summary: Vec<(&str, &str)> = variants
        .iter()
        .map(|v| (v.title.as_str(), v.colour.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("iPhone 12 64GB", "Black"),
            ("iPhone 12 64GB", "Red"),
            ("Galaxy S21 128GB", "Phantom Grey"),
        ]
    );
    assert_eq!(variants[2].capacity_mb, 131_072);
    assert!((variants[0].price - 699.99).abs() < f64::EPSILON);
    assert_eq!(
        variants[0].image_url,
        "https://www.magpiehq.com/developer-challenge/images/64GB.png"
    );
    assert_eq!(variants[0].shipping_date, "2024-08-15");

    let deduped = catalog_core::dedup_variants(variants.clone());
    assert_eq!(deduped, variants);
}

#[tokio::test]
async fn crawl_aborts_when_a_page_is_missing() {
    let server = MockServer::start().await;
    let p1 = page(&[product("iPhone 12", "64GB", &["Black"])], 3);
    Mock::given(method("GET"))
        .and(path("/smartphones"))
        .and(query_param("page", "1"))
        .respond_with(html(p1.clone()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/smartphones"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/smartphones"))
        .and(query_param("page", "3"))
        .respond_with(html(p1.clone()))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/smartphones"))
        .respond_with(html(p1))
        .with_priority(10)
        .mount(&server)
        .await;

    let listing = format!("{}/smartphones", server.uri());
    let result = crawl_catalog(
        &test_fetcher(),
        &test_parser(),
        &listing,
        &CrawlOptions::default(),
    )
    .await;
    assert!(
        matches!(result, Err(ScraperError::NotFound { ref url }) if url.ends_with("page=2")),
        "expected NotFound for page 2, got: {result:?}"
    );
}
