use std::path::PathBuf;

/// Runtime settings for a catalog extraction run, resolved from the
/// environment by [`crate::load_app_config`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// First page of the product listing; page URLs are derived from it.
    pub listing_url: String,
    /// Base that relative image paths are joined onto.
    pub image_base_url: String,
    pub output_path: PathBuf,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub inter_request_delay_ms: u64,
}
