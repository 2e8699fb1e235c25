//! Core data models for the pricing engine.
//!
//! This module contains the catalog, cart, and quote types shared by the
//! engine, the loaders, and the HTTP layer.

mod catalog;
mod order;
mod quote;

pub use catalog::{
    CatalogEntry, CatalogSnapshot, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, ProductQuery,
};
pub use order::{
    DEFAULT_DELIVERY_CITY, EXPRESS_METHOD, OrderContext, RequestedLine, STANDARD_METHOD,
};
pub use quote::{Quote, QuoteLine, QuoteWarning};
