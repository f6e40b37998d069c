//! CLI command handlers

pub mod augment;
pub mod generate;
pub mod merge;
pub mod validate;

use anyhow::{Context, Result};
use queryaug_core::JsonDocument;
use std::path::Path;

/// Read a JSON document from `path`
pub(crate) fn read_document<T: JsonDocument>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    T::from_json(&content).with_context(|| format!("Invalid {} document", path.display()))
}

/// Write a document to `output`, or to stdout when no path is given
pub(crate) fn write_document<T: JsonDocument>(doc: &T, output: Option<&Path>) -> Result<()> {
    let json = doc.to_json()?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", json),
    }
    Ok(())
}
