//! Catalog models.
//!
//! This module defines [`CatalogEntry`] and the validated, immutable
//! [`CatalogSnapshot`] the quote engine resolves cart lines against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default page size for catalog listings.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Largest page size accepted for catalog listings.
pub const MAX_PAGE_LIMIT: usize = 200;

/// A product as it appears in a catalog snapshot.
///
/// Prices are integer amounts in the minor currency unit.
///
/// # Example
///
/// ```
/// use pricing_engine::models::CatalogEntry;
///
/// let entry: CatalogEntry = serde_json::from_str(
///     r#"{"id": "A", "name": "Home jersey", "price": 5000, "stock": 10}"#,
/// )
/// .unwrap();
/// assert_eq!(entry.unit_price, 5000);
/// assert_eq!(entry.stock, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier within the snapshot.
    pub id: String,
    /// Display name, used in stock warnings.
    pub name: String,
    /// Price per unit in minor currency units.
    #[serde(alias = "price")]
    pub unit_price: i64,
    /// Units available. `None` means the product is not stock-constrained.
    #[serde(default)]
    pub stock: Option<i64>,
    /// Product image URL.
    #[serde(default, alias = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Product category used for listing filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl CatalogEntry {
    /// Creates an entry without display metadata.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        unit_price: i64,
        stock: Option<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            stock,
            image: None,
            category: None,
        }
    }

    fn validate(&self) -> EngineResult<()> {
        if self.unit_price < 0 {
            return Err(EngineError::InvalidCatalogEntry {
                id: self.id.clone(),
                message: format!("unit price cannot be negative (got {})", self.unit_price),
            });
        }
        if let Some(stock) = self.stock.filter(|s| *s < 0) {
            return Err(EngineError::InvalidCatalogEntry {
                id: self.id.clone(),
                message: format!("stock cannot be negative (got {})", stock),
            });
        }
        Ok(())
    }
}

/// Filter and paging options for catalog listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    /// Case-insensitive substring matched against name or category.
    pub q: Option<String>,
    /// Case-insensitive exact category match.
    pub category: Option<String>,
    /// Maximum number of entries returned.
    pub limit: usize,
    /// Number of matching entries skipped.
    pub offset: usize,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            q: None,
            category: None,
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

/// An immutable, validated set of catalog entries.
///
/// Entries keep their source order for listings and are indexed by id
/// for lookups. A snapshot can only be built from entries with
/// non-negative prices and stock and unique ids.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    entries: Vec<CatalogEntry>,
    index: HashMap<String, usize>,
}

impl CatalogSnapshot {
    /// Builds a snapshot, rejecting structurally invalid entries.
    ///
    /// # Example
    ///
    /// ```
    /// use pricing_engine::models::{CatalogEntry, CatalogSnapshot};
    ///
    /// let catalog = CatalogSnapshot::new(vec![CatalogEntry::new("A", "Jersey", 5000, Some(10))])?;
    /// assert_eq!(catalog.get("A").map(|e| e.unit_price), Some(5000));
    /// assert!(catalog.get("B").is_none());
    /// # Ok::<(), pricing_engine::error::EngineError>(())
    /// ```
    pub fn new(entries: Vec<CatalogEntry>) -> EngineResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (position, entry) in entries.iter().enumerate() {
            entry.validate()?;
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(EngineError::DuplicateProduct {
                    id: entry.id.clone(),
                });
            }
        }

        Ok(Self { entries, index })
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns one page of entries matching the query.
    ///
    /// Category filtering is applied before the text search, then the
    /// offset and limit select the page.
    pub fn search(&self, query: &ProductQuery) -> Vec<&CatalogEntry> {
        let category = query.category.as_deref().map(str::to_lowercase);
        let needle = query.q.as_deref().map(str::to_lowercase);

        self.entries
            .iter()
            .filter(|entry| match &category {
                Some(wanted) => entry
                    .category
                    .as_deref()
                    .is_some_and(|c| c.to_lowercase() == *wanted),
                None => true,
            })
            .filter(|entry| match &needle {
                Some(needle) => {
                    entry.name.to_lowercase().contains(needle.as_str())
                        || entry
                            .category
                            .as_deref()
                            .is_some_and(|c| c.to_lowercase().contains(needle.as_str()))
                }
                None => true,
            })
            .skip(query.offset)
            .take(query.limit)
            .collect()
    }
}
