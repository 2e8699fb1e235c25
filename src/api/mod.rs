//! HTTP API module for the pricing engine.
//!
//! This module exposes the quote engine and the catalog snapshot over
//! REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MAX_ITEM_QTY, ProductListParams, QuoteItemRequest, QuoteRequest};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, QuoteResponse};
pub use state::AppState;
