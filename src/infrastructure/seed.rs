//! Catalog seed data.
//!
//! The bundled catalog is compiled in from `data/books.json`. A different
//! catalog can be supplied at startup through `BOOKS_FILE`.

use anyhow::{Context, Result};
use std::path::Path;

use crate::domain::entities::NewBook;

const BUNDLED_CATALOG: &str = include_str!("../../data/books.json");

/// Parses a JSON array of books.
pub fn parse_catalog(json: &str) -> Result<Vec<NewBook>> {
    serde_json::from_str(json).context("Catalog must be a JSON array of books")
}

/// Returns the catalog shipped with the service.
pub fn bundled_catalog() -> Result<Vec<NewBook>> {
    parse_catalog(BUNDLED_CATALOG)
}

/// Reads a catalog from `path`.
pub async fn load_catalog(path: &Path) -> Result<Vec<NewBook>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    parse_catalog(&json)
}
