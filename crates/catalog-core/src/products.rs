use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One purchasable colour variant of a listed product. This is the unit of
/// output: a listing with three declared colours becomes three records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Product name and capacity label joined by a single space, e.g. `"iPhone 11 64GB"`.
    pub title: String,
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Storage capacity in megabytes (`GB * 1024`).
    #[serde(rename = "capacityMB")]
    pub capacity_mb: u64,
    pub colour: String,
    /// Availability label with any leading `"Availability:"` removed.
    #[serde(rename = "availabilityText")]
    pub availability_text: String,
    #[serde(rename = "isAvailable")]
    pub is_available: bool,
    /// Shipping label with any leading `"Delivery by"` removed.
    #[serde(rename = "shippingText")]
    pub shipping_text: String,
    /// ISO `YYYY-MM-DD`, or empty when no date could be recognized.
    #[serde(rename = "shippingDate")]
    pub shipping_date: String,
}

/// The colour-independent fields of a listing, extracted once per product
/// node and shared by every variant expanded from it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductBase {
    pub title: String,
    pub price: f64,
    pub image_url: String,
    pub capacity_mb: u64,
    pub availability_text: String,
    pub is_available: bool,
    pub shipping_text: String,
    pub shipping_date: String,
}

impl ProductBase {
    /// Builds the variant record for one colour of this listing.
    #[must_use]
    pub fn with_colour(&self, colour: impl Into<String>) -> ProductVariant {
        ProductVariant {
            title: self.title.clone(),
            price: self.price,
            image_url: self.image_url.clone(),
            capacity_mb: self.capacity_mb,
            colour: colour.into(),
            availability_text: self.availability_text.clone(),
            is_available: self.is_available,
            shipping_text: self.shipping_text.clone(),
            shipping_date: self.shipping_date.clone(),
        }
    }
}

/// Hashable identity of a [`ProductVariant`]: all nine fields, with the
/// price compared by its bit pattern.
#[derive(Debug, PartialEq, Eq, Hash)]
struct VariantKey {
    title: String,
    price_bits: u64,
    image_url: String,
    capacity_mb: u64,
    colour: String,
    availability_text: String,
    is_available: bool,
    shipping_text: String,
    shipping_date: String,
}

impl From<&ProductVariant> for VariantKey {
    fn from(v: &ProductVariant) -> Self {
        Self {
            title: v.title.clone(),
            price_bits: v.price.to_bits(),
            image_url: v.image_url.clone(),
            capacity_mb: v.capacity_mb,
            colour: v.colour.clone(),
            availability_text: v.availability_text.clone(),
            is_available: v.is_available,
            shipping_text: v.shipping_text.clone(),
            shipping_date: v.shipping_date.clone(),
        }
    }
}

/// Removes exact duplicates, keeping the first occurrence of each record and
/// the relative order of the survivors.
///
/// Two records are duplicates only when every field matches. Running this on
/// its own output returns the input unchanged.
#[must_use]
pub fn dedup_variants(variants: Vec<ProductVariant>) -> Vec<ProductVariant> {
    let mut seen: HashSet<VariantKey> = HashSet::with_capacity(variants.len());
    variants
        .into_iter()
        .filter(|v| seen.insert(VariantKey::from(v)))
        .collect()
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
