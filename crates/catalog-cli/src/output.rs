//! Persisting the catalog as pretty-printed JSON.

use std::path::Path;

use anyhow::Context;
use catalog_core::ProductVariant;
use serde::Serialize;

/// Writes `catalog` to `path` as a JSON array indented with four spaces,
/// replacing whatever the file held before.
///
/// The document is fully serialized before the file is opened, so a
/// serialization failure leaves an existing file untouched.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub(crate) fn write_catalog(path: &Path, catalog: &[ProductVariant]) -> anyhow::Result<()> {
    let json = to_pretty_json(catalog)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write catalog to {}", path.display()))
}

fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .context("failed to serialize catalog")?;
    Ok(buf)
}
