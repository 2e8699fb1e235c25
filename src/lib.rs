//! Checkout Pricing Engine
//!
//! This crate prices shopping carts: it resolves cart lines against a catalog
//! snapshot, computes shipping from a city/method rate table, applies coupons,
//! and returns an itemized quote with non-fatal warnings.

#![warn(missing_docs)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
