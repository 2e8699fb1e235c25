//! Request types for the pricing API.
//!
//! This module defines the JSON body of `POST /v1/pricing/quote` and the
//! query parameters of `GET /v1/products`.

use serde::{Deserialize, Serialize};

use crate::models::{
    DEFAULT_DELIVERY_CITY, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, OrderContext, ProductQuery,
    RequestedLine, STANDARD_METHOD,
};

/// Largest quantity a single quote line may request.
pub const MAX_ITEM_QTY: i64 = 1_000_000;

/// Request body for the quote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The cart lines to price.
    pub items: Vec<QuoteItemRequest>,
    /// Optional coupon code, any case.
    #[serde(default)]
    pub coupon: Option<String>,
    /// Delivery city.
    #[serde(default = "default_city")]
    pub delivery_city: Option<String>,
    /// Delivery method (`standard` or `express`).
    #[serde(default = "default_method")]
    pub delivery_method: Option<String>,
}

fn default_city() -> Option<String> {
    Some(DEFAULT_DELIVERY_CITY.to_string())
}

fn default_method() -> Option<String> {
    Some(STANDARD_METHOD.to_string())
}

/// A cart line in a quote request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteItemRequest {
    /// Catalog id of the product.
    pub id: String,
    /// Requested quantity, at most [`MAX_ITEM_QTY`].
    pub qty: i64,
}

impl QuoteRequest {
    /// Validates the line quantities and splits the request into engine inputs.
    ///
    /// Quantities of zero or less pass through; the engine floors them to one.
    pub fn into_parts(self) -> Result<(Vec<RequestedLine>, OrderContext), String> {
        if let Some(item) = self.items.iter().find(|item| item.qty > MAX_ITEM_QTY) {
            return Err(format!(
                "qty for '{}' must be at most {} (got {})",
                item.id, MAX_ITEM_QTY, item.qty
            ));
        }

        let context = OrderContext::new(
            self.delivery_city.as_deref(),
            self.delivery_method.as_deref(),
            self.coupon.as_deref(),
        );
        let lines = self.items.into_iter().map(Into::into).collect();
        Ok((lines, context))
    }
}

impl From<QuoteItemRequest> for RequestedLine {
    fn from(req: QuoteItemRequest) -> Self {
        RequestedLine {
            product_id: req.id,
            requested_qty: req.qty,
        }
    }
}

/// Query parameters for the product listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListParams {
    /// Free-text search over name and category.
    #[serde(default)]
    pub q: Option<String>,
    /// Category filter.
    #[serde(default)]
    pub category: Option<String>,
    /// Page size, 1 to 200.
    #[serde(default)]
    pub limit: Option<usize>,
    /// Number of matches to skip.
    #[serde(default)]
    pub offset: Option<usize>,
}

impl ProductListParams {
    /// Validates the paging bounds and builds a catalog query.
    pub fn into_query(self) -> Result<ProductQuery, String> {
        let limit = self.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
            return Err(format!(
                "limit must be between 1 and {} (got {})",
                MAX_PAGE_LIMIT, limit
            ));
        }

        Ok(ProductQuery {
            q: self.q.filter(|q| !q.trim().is_empty()),
            category: self.category.filter(|c| !c.trim().is_empty()),
            limit,
            offset: self.offset.unwrap_or(0),
        })
    }
}
