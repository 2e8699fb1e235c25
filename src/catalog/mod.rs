//! File-backed catalog loading.
//!
//! The engine itself only sees a [`CatalogSnapshot`](crate::models::CatalogSnapshot).
//! This module produces one from a JSON product file.

mod loader;

pub use loader::CatalogLoader;
