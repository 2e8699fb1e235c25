//! JSON catalog loader.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{CatalogEntry, CatalogSnapshot};

/// Loads catalog snapshots from JSON product files.
///
/// The file holds an array of products; unknown fields are ignored.
///
/// ```text
/// [
///   {"id": "rm-home-24", "name": "Real Madrid Home 24/25", "price": 189900, "stock": 12}
/// ]
/// ```
pub struct CatalogLoader;

impl CatalogLoader {
    /// Reads and validates the product file at `path`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pricing_engine::catalog::CatalogLoader;
    ///
    /// let catalog = CatalogLoader::load("./data/products.json")?;
    /// println!("{} products", catalog.len());
    /// # Ok::<(), pricing_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<CatalogSnapshot> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let catalog = Self::parse(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        info!(path = %path_str, products = catalog.len(), "Loaded catalog snapshot");
        Ok(catalog)
    }

    /// Parses a JSON product array into a snapshot.
    pub fn parse(json: &str) -> EngineResult<CatalogSnapshot> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(json).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        CatalogSnapshot::new(entries)
    }
}
