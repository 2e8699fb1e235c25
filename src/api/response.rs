//! Response types for the pricing API.
//!
//! This module defines the success envelopes and the error response
//! structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CatalogEntry, Quote};

/// Response body of the quote endpoint.
///
/// The quote fields are flattened next to the envelope metadata.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    /// Unique identifier for this quote.
    pub quote_id: Uuid,
    /// When the quote was built.
    pub quoted_at: DateTime<Utc>,
    /// The version of the engine that built the quote.
    pub engine_version: String,
    /// The quote itself.
    #[serde(flatten)]
    pub quote: Quote,
}

impl QuoteResponse {
    /// Wraps a quote with a fresh id and timestamp.
    pub fn new(quote: Quote) -> Self {
        Self {
            quote_id: Uuid::new_v4(),
            quoted_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            quote,
        }
    }
}

/// Response body of the product listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse<'a> {
    /// The page of products.
    pub items: Vec<&'a CatalogEntry>,
    /// Number of products in this page.
    pub count: usize,
}

/// Response body of the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always true when the server answers.
    pub ok: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a product not found error response.
    pub fn product_not_found(id: &str) -> Self {
        Self::with_details(
            "PRODUCT_NOT_FOUND",
            format!("Product not found: {}", id),
            format!("The catalog has no product with id '{}'", id),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ProductNotFound { id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::product_not_found(&id),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidShippingTable { .. }
            | EngineError::InvalidCoupon { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    error.to_string(),
                ),
            },
            EngineError::InvalidCatalogEntry { .. } | EngineError::DuplicateProduct { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CATALOG_ERROR",
                        "Catalog data error",
                        error.to_string(),
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_product_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::ProductNotFound {
            id: "nope".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "PRODUCT_NOT_FOUND");
        assert!(api_error.error.message.contains("nope"));
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = EngineError::InvalidShippingTable {
            message: "missing '_default' tier".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
        assert!(api_error.error.details.unwrap().contains("_default"));
    }

    #[test]
    fn test_quote_response_flattens_quote() {
        let quote = Quote {
            lines: vec![],
            subtotal: 0,
            discount: 0,
            shipping: 9000,
            total: 9000,
            warnings: vec![],
            applied_coupon: None,
        };

        let value = serde_json::to_value(QuoteResponse::new(quote)).unwrap();
        assert_eq!(value["total"], 9000);
        assert_eq!(value["shipping"], 9000);
        assert!(value["quote_id"].is_string());
        assert_eq!(value["engine_version"], env!("CARGO_PKG_VERSION"));
        assert!(value.get("quote").is_none());
    }
}
