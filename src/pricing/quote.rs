//! Quote composition.
//!
//! This module ties cart resolution, shipping, and coupons together into a
//! single [`Quote`].

use tracing::debug;

use crate::config::PricingConfig;
use crate::models::{CatalogSnapshot, OrderContext, Quote, RequestedLine};

use super::catalog_resolver::resolve_lines;
use super::coupon::apply_coupon;
use super::shipping::calculate_shipping;

/// Builds a quote for a cart.
///
/// Steps:
/// 1. Resolve the requested lines against the catalog (lines, warnings, subtotal).
/// 2. Look up the base shipping cost for the delivery city and method.
/// 3. Apply the coupon, which may discount the subtotal or zero the shipping.
/// 4. `total = max(0, subtotal - discount + shipping)`, saturating at `i64::MAX`.
///
/// Pure and infallible: cart problems become warnings on the quote.
///
/// # Examples
///
/// ```
/// use pricing_engine::config::PricingConfig;
/// use pricing_engine::models::{CatalogEntry, CatalogSnapshot, OrderContext, RequestedLine};
/// use pricing_engine::pricing::build_quote;
///
/// let catalog = CatalogSnapshot::new(vec![CatalogEntry::new("A", "Jersey", 5000, Some(10))])?;
/// let context = OrderContext::new(Some("cali"), Some("standard"), None);
///
/// let quote = build_quote(
///     &[RequestedLine::new("A", 2)],
///     &catalog,
///     &context,
///     &PricingConfig::default(),
/// );
///
/// assert_eq!(quote.subtotal, 10000);
/// assert_eq!(quote.shipping, 11000);
/// assert_eq!(quote.total, 21000);
/// # Ok::<(), pricing_engine::error::EngineError>(())
/// ```
pub fn build_quote(
    requested: &[RequestedLine],
    catalog: &CatalogSnapshot,
    context: &OrderContext,
    config: &PricingConfig,
) -> Quote {
    let cart = resolve_lines(requested, catalog);

    let base_shipping = calculate_shipping(
        &config.shipping,
        context.delivery_city(),
        context.delivery_method(),
    );

    let coupon = apply_coupon(
        &config.coupons,
        context.coupon_code(),
        cart.subtotal,
        base_shipping,
    );

    let total = (cart.subtotal - coupon.discount)
        .saturating_add(coupon.shipping)
        .max(0);

    debug!(
        lines = cart.lines.len(),
        warnings = cart.warnings.len(),
        subtotal = cart.subtotal,
        discount = coupon.discount,
        shipping = coupon.shipping,
        total,
        coupon = coupon.applied_coupon.as_deref().unwrap_or("-"),
        "Built quote"
    );

    Quote {
        lines: cart.lines,
        subtotal: cart.subtotal,
        discount: coupon.discount,
        shipping: coupon.shipping,
        total,
        warnings: cart.warnings,
        applied_coupon: coupon.applied_coupon,
    }
}
