mod output;

use std::path::PathBuf;

use anyhow::Context;
use catalog_core::{dedup_variants, AppConfig};
use catalog_scraper::{crawl_catalog, CrawlOptions, HttpFetcher, PageParser};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "catalog-cli")]
#[command(about = "Extract the paginated smartphone listing into a JSON catalog")]
struct Cli {
    /// First page of the listing (overrides CATALOG_LISTING_URL)
    #[arg(long)]
    url: Option<String>,

    /// Where to write the catalog (overrides CATALOG_OUTPUT_PATH)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Base URL for relative image paths (overrides CATALOG_IMAGE_BASE_URL)
    #[arg(long)]
    image_base: Option<String>,
}

impl Cli {
    fn apply(self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = self.url {
            config.listing_url = url;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(image_base) = self.image_base {
            config.image_base_url = image_base;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(catalog_core::load_app_config()?);
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run(&config).await {
        Ok(records) => {
            tracing::info!(
                records,
                path = %config.output_path.display(),
                "catalog written"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                error = %format!("{e:#}"),
                "catalog run failed; output file left untouched"
            );
            Err(e)
        }
    }
}

/// Crawls the listing, removes duplicate variants and writes the catalog.
/// Nothing is written unless every page was fetched.
///
/// Returns the number of records written.
async fn run(config: &AppConfig) -> anyhow::Result<usize> {
    let fetcher = HttpFetcher::new(config.request_timeout_secs, &config.user_agent)?;
    let parser = PageParser::new(config.image_base_url.clone())?;
    let options = CrawlOptions {
        inter_request_delay_ms: config.inter_request_delay_ms,
    };

    let variants = crawl_catalog(&fetcher, &parser, &config.listing_url, &options)
        .await
        .with_context(|| format!("failed to crawl {}", config.listing_url))?;

    let scraped = variants.len();
    let catalog = dedup_variants(variants);
    tracing::info!(
        scraped,
        unique = catalog.len(),
        duplicates = scraped - catalog.len(),
        "deduplicated catalog"
    );

    output::write_catalog(&config.output_path, &catalog)?;
    Ok(catalog.len())
}
