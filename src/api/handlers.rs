//! HTTP request handlers for the pricing API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection, rejection::QueryRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;
use crate::pricing::build_quote;

use super::request::{ProductListParams, QuoteRequest};
use super::response::{
    ApiError, ApiErrorResponse, HealthResponse, ProductListResponse, QuoteResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// Any origin may call the API, so the storefront can quote from the browser.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/products", get(list_products_handler))
        .route("/v1/products/:id", get(get_product_handler))
        .route("/v1/pricing/quote", post(quote_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Handler for GET /v1/products.
async fn list_products_handler(
    State(state): State<AppState>,
    params: Result<Query<ProductListParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Query(params) = params.map_err(|rejection| {
        ApiErrorResponse::bad_request(ApiError::validation_error(rejection.body_text()))
    })?;

    let query = params
        .into_query()
        .map_err(|message| ApiErrorResponse::bad_request(ApiError::validation_error(message)))?;

    let items = state.catalog().search(&query);
    let count = items.len();
    Ok(Json(ProductListResponse { items, count }).into_response())
}

/// Handler for GET /v1/products/:id.
async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let entry = state
        .catalog()
        .get(&id)
        .ok_or_else(|| EngineError::ProductNotFound { id: id.clone() })?;

    Ok(Json(entry.clone()))
}

/// Handler for POST /v1/pricing/quote.
///
/// Accepts a cart with delivery and coupon options and returns the quote.
/// Cart problems never fail the request; they come back as warnings.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let (lines, context) = match request.into_parts() {
        Ok(parts) => parts,
        Err(message) => {
            warn!(
                correlation_id = %correlation_id,
                error = %message,
                "Quote request failed validation"
            );
            return ApiErrorResponse::bad_request(ApiError::validation_error(message))
                .into_response();
        }
    };

    let start_time = Instant::now();
    let quote = build_quote(&lines, state.catalog(), &context, state.config());
    let duration = start_time.elapsed();

    if quote.has_warnings() {
        warn!(
            correlation_id = %correlation_id,
            warnings = quote.warnings.len(),
            "Quote built with warnings"
        );
    }
    info!(
        correlation_id = %correlation_id,
        lines = quote.lines.len(),
        city = context.delivery_city(),
        method = context.delivery_method(),
        total = quote.total,
        duration_us = duration.as_micros(),
        "Quote completed successfully"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(QuoteResponse::new(quote)),
    )
        .into_response()
}
