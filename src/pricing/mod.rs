//! Pricing logic for the checkout quote engine.
//!
//! This module contains the pure functions that price a cart: resolving
//! requested lines against a catalog snapshot with quantity and stock
//! rules, looking up shipping by city and method, applying coupons, and
//! composing the final quote. Nothing here performs I/O or fails; cart
//! problems are reported as warnings on the quote.

mod catalog_resolver;
mod coupon;
mod quote;
mod shipping;

pub use catalog_resolver::{ResolvedCart, resolve_lines};
pub use coupon::{CouponOutcome, apply_coupon};
pub use quote::build_quote;
pub use shipping::calculate_shipping;
