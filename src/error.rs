//! Error types for the pricing engine.
//!
//! Only structural problems with configuration or catalog data are errors.
//! Cart-level issues (unknown products, stock shortfalls, unknown coupons)
//! are reported as quote warnings and never reach this module.

use thiserror::Error;

/// The main error type for the pricing engine.
///
/// Every variant describes data that must be rejected at the boundary,
/// before a quote is built.
///
/// # Example
///
/// ```
/// use pricing_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/shipping.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/shipping.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration or catalog file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration or catalog file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The shipping rate table is structurally invalid.
    #[error("Invalid shipping rate table: {message}")]
    InvalidShippingTable {
        /// A description of what made the table invalid.
        message: String,
    },

    /// A coupon definition is invalid.
    #[error("Invalid coupon '{code}': {message}")]
    InvalidCoupon {
        /// The coupon code.
        code: String,
        /// A description of what made the coupon invalid.
        message: String,
    },

    /// A catalog entry carries invalid data.
    #[error("Invalid catalog entry '{id}': {message}")]
    InvalidCatalogEntry {
        /// The product id of the entry.
        id: String,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// Two catalog entries share the same product id.
    #[error("Duplicate product id in catalog: {id}")]
    DuplicateProduct {
        /// The duplicated product id.
        id: String,
    },

    /// A product was requested directly by id and does not exist.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The product id that was not found.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
