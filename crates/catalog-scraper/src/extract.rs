//! Per-field extraction from a single product node.
//!
//! Every function here is total: a missing sub-node, a missing attribute or a
//! value that does not convert yields the field's documented default. Listing
//! markup varies between products and a malformed field must never cost the
//! rest of the record.

use std::sync::LazyLock;

use catalog_core::ProductBase;
use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::document::{node_attr, node_text};
use crate::selectors::ProductSelectors;

pub const UNKNOWN_TITLE: &str = "Unknown Product";
pub const UNKNOWN: &str = "Unknown";
pub const DEFAULT_IMAGE_PATH: &str = "/images/default.png";

static AVAILABILITY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^availability:\s*").expect("valid availability regex"));

static SHIPPING_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^delivery\s*by\s*").expect("valid shipping regex"));

/// `<day><optional ordinal> <month word> <year>`, e.g. `"15th August 2024"`.
static SHIPPING_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})(?:st|nd|rd|th)?\s(\w+)\s(\d{4})").expect("valid shipping date regex")
});

fn first<'a>(node: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    node.select(selector).next()
}

fn last<'a>(node: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    node.select(selector).last()
}

/// Extracts the colour-independent fields of one listing.
#[must_use]
pub fn extract_base(
    node: ElementRef<'_>,
    selectors: &ProductSelectors,
    image_base: &str,
) -> ProductBase {
    let availability_text = availability_text(node, selectors);
    let shipping_text = shipping_text(node, selectors);
    ProductBase {
        title: title(node, selectors),
        price: price(node, selectors),
        image_url: image_url(node, selectors, image_base),
        capacity_mb: capacity_mb(node, selectors),
        is_available: is_available(&availability_text),
        shipping_date: shipping_date(&shipping_text),
        availability_text,
        shipping_text,
    }
}

/// Product name and capacity label joined by one space, e.g. `"iPhone 11 64GB"`.
///
/// Both parts are trimmed and joined as found, so a blank name still yields
/// `" 64GB"`. If either node is missing the listing is titled
/// [`UNKNOWN_TITLE`].
#[must_use]
pub fn title(node: ElementRef<'_>, selectors: &ProductSelectors) -> String {
    let name = first(node, &selectors.name).map(node_text);
    let capacity = first(node, &selectors.capacity).map(node_text);
    match (name, capacity) {
        (Some(name), Some(capacity)) => format!("{name} {capacity}"),
        _ => {
            tracing::debug!(field = "title", "name or capacity node missing; using default");
            UNKNOWN_TITLE.to_owned()
        }
    }
}

/// Price with everything but digits and `.` removed, e.g. `"£99.99"` → `99.99`.
/// Defaults to `0.0`.
#[must_use]
pub fn price(node: ElementRef<'_>, selectors: &ProductSelectors) -> f64 {
    first(node, &selectors.price)
        .map(node_text)
        .and_then(|raw| parse_price(&raw))
        .unwrap_or_else(|| {
            tracing::debug!(field = "price", "price node missing or unparseable; using 0.0");
            0.0
        })
}

fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok()
}

/// Absolute image URL: the `src` attribute with every `../` removed, joined
/// onto `image_base`.
///
/// Only a missing image node or `src` attribute falls back to
/// `<image_base>/images/default.png`; an empty `src` joins as `<image_base>/`.
#[must_use]
pub fn image_url(node: ElementRef<'_>, selectors: &ProductSelectors, image_base: &str) -> String {
    let base = image_base.trim_end_matches('/');
    let src = first(node, &selectors.image).and_then(|img| node_attr(img, "src"));

    if let Some(src) = src {
        let cleaned = src.replace("../", "");
        format!("{base}/{}", cleaned.trim_start_matches('/'))
    } else {
        tracing::debug!(field = "image_url", "image src missing; using placeholder");
        format!("{base}{DEFAULT_IMAGE_PATH}")
    }
}

/// Capacity label digits read as gigabytes and converted to megabytes,
/// e.g. `"64GB"` → `65536`. Defaults to `0`.
#[must_use]
pub fn capacity_mb(node: ElementRef<'_>, selectors: &ProductSelectors) -> u64 {
    first(node, &selectors.capacity)
        .map(node_text)
        .and_then(|raw| parse_capacity_mb(&raw))
        .unwrap_or_else(|| {
            tracing::debug!(field = "capacity_mb", "capacity node missing or has no digits; using 0");
            0
        })
}

fn parse_capacity_mb(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u64>().ok()?.checked_mul(1024)
}

/// Text of the first small-text node with any leading `"Availability:"`
/// removed. Defaults to [`UNKNOWN`].
#[must_use]
pub fn availability_text(node: ElementRef<'_>, selectors: &ProductSelectors) -> String {
    first(node, &selectors.small_text).map_or_else(
        || {
            tracing::debug!(field = "availability_text", "small-text node missing; using default");
            UNKNOWN.to_owned()
        },
        |n| AVAILABILITY_PREFIX.replace(&node_text(n), "").into_owned(),
    )
}

/// `true` when `availability_text` contains `"in stock"` in any case.
#[must_use]
pub fn is_available(availability_text: &str) -> bool {
    availability_text.to_lowercase().contains("in stock")
}

/// Text of the last small-text node with any leading `"Delivery by"`
/// removed. Defaults to [`UNKNOWN`].
///
/// Availability and shipping share a class, so they are told apart by
/// position only. A product with a single small-text node reports the same
/// node for both.
#[must_use]
pub fn shipping_text(node: ElementRef<'_>, selectors: &ProductSelectors) -> String {
    last(node, &selectors.small_text).map_or_else(
        || {
            tracing::debug!(field = "shipping_text", "small-text node missing; using default");
            UNKNOWN.to_owned()
        },
        |n| SHIPPING_PREFIX.replace(&node_text(n), "").into_owned(),
    )
}

/// First `"15th August 2024"`-style date in `shipping_text`, as `YYYY-MM-DD`.
///
/// Month names may be full or abbreviated, including `"Sept"`. Returns an
/// empty string when no date is present or the match is not a real calendar
/// date.
#[must_use]
pub fn shipping_date(shipping_text: &str) -> String {
    let Some(caps) = SHIPPING_DATE.captures(shipping_text) else {
        return String::new();
    };
    let month = &caps[2];
    let month = if month.eq_ignore_ascii_case("sept") {
        "Sep"
    } else {
        month
    };
    let normalized = format!("{} {month} {}", &caps[1], &caps[3]);
    match NaiveDate::parse_from_str(&normalized, "%d %B %Y") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(e) => {
            tracing::debug!(
                field = "shipping_date",
                text = shipping_text,
                error = %e,
                "date-like text did not parse; leaving empty"
            );
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
