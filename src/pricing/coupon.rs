//! Coupon evaluation.
//!
//! This module applies an optional coupon code to a subtotal and shipping
//! cost. Unknown codes and unsupported coupon kinds are silently ignored.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::{CouponKind, CouponRegistry};

/// The effect of a coupon on a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponOutcome {
    /// Discount taken off the subtotal. Always within `0..=subtotal`.
    pub discount: i64,
    /// Shipping cost after the coupon.
    pub shipping: i64,
    /// Uppercase code of the applied coupon, if one applied.
    pub applied_coupon: Option<String>,
}

impl CouponOutcome {
    fn not_applied(shipping: i64) -> Self {
        Self {
            discount: 0,
            shipping,
            applied_coupon: None,
        }
    }
}

/// Applies a coupon code to a subtotal and shipping cost.
///
/// - Missing or unknown code: no discount, shipping unchanged.
/// - `percent`: `floor(subtotal * value / 100)`.
/// - `amount`: `min(subtotal, value)`.
/// - `shipping_free`: no discount, shipping set to zero.
/// - Unsupported kind: treated as an unknown code.
///
/// # Examples
///
/// ```
/// use pricing_engine::config::CouponRegistry;
/// use pricing_engine::pricing::apply_coupon;
///
/// let registry = CouponRegistry::builtin();
/// let outcome = apply_coupon(&registry, Some("hola10"), 100000, 9000);
///
/// assert_eq!(outcome.discount, 10000);
/// assert_eq!(outcome.shipping, 9000);
/// assert_eq!(outcome.applied_coupon.as_deref(), Some("HOLA10"));
/// ```
pub fn apply_coupon(
    registry: &CouponRegistry,
    code: Option<&str>,
    subtotal: i64,
    shipping: i64,
) -> CouponOutcome {
    let Some(coupon) = code.and_then(|code| registry.get(code)) else {
        return CouponOutcome::not_applied(shipping);
    };

    let (discount, shipping) = match (coupon.kind, coupon.value) {
        (CouponKind::Percent, Some(percent)) => (percent_discount(subtotal, percent), shipping),
        (CouponKind::Amount, Some(amount)) => (amount_discount(subtotal, amount), shipping),
        (CouponKind::ShippingFree, _) => (0, 0),
        _ => return CouponOutcome::not_applied(shipping),
    };

    CouponOutcome {
        discount: discount.clamp(0, subtotal.max(0)),
        shipping,
        applied_coupon: Some(coupon.code.clone()),
    }
}

fn percent_discount(subtotal: i64, percent: Decimal) -> i64 {
    (Decimal::from(subtotal) * percent / Decimal::ONE_HUNDRED)
        .floor()
        .to_i64()
        .unwrap_or(subtotal)
}

fn amount_discount(subtotal: i64, amount: Decimal) -> i64 {
    amount.floor().to_i64().map_or(subtotal, |amount| amount.min(subtotal))
}
