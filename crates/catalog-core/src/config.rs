use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_LISTING_URL: &str = "https://www.magpiehq.com/developer-challenge/smartphones";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://www.magpiehq.com/developer-challenge";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let http_url = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(trimmed.to_string())
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected an http(s) URL, got \"{raw}\""),
            })
        }
    };

    let listing_url = http_url("CATALOG_LISTING_URL", DEFAULT_LISTING_URL)?;
    let image_base_url = http_url("CATALOG_IMAGE_BASE_URL", DEFAULT_IMAGE_BASE_URL)?;
    let output_path = PathBuf::from(or_default("CATALOG_OUTPUT_PATH", "output.json"));
    let log_level = or_default("CATALOG_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("CATALOG_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("CATALOG_USER_AGENT", "catalog/0.1 (product-catalog)");
    let inter_request_delay_ms = parse_u64("CATALOG_INTER_REQUEST_DELAY_MS", "0")?;

    Ok(AppConfig {
        listing_url,
        image_base_url,
        output_path,
        log_level,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
