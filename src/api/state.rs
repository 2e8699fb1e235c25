//! Application state for the pricing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PricingConfig;
use crate::models::CatalogSnapshot;

/// Shared application state.
///
/// Holds the pricing configuration and the catalog snapshot. Both are
/// read-only for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    /// The shipping and coupon tables.
    config: Arc<PricingConfig>,
    /// The catalog quotes are priced against.
    catalog: Arc<CatalogSnapshot>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: PricingConfig, catalog: CatalogSnapshot) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    /// Returns the pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the catalog snapshot.
    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }
}
