//! Cart and delivery inputs for a quote.

use serde::{Deserialize, Serialize};

/// Delivery city used when the caller does not provide one.
pub const DEFAULT_DELIVERY_CITY: &str = "bogota";

/// The standard delivery method, also the fallback rate of every city tier.
pub const STANDARD_METHOD: &str = "standard";

/// The express delivery method.
pub const EXPRESS_METHOD: &str = "express";

/// A single cart line as requested by the shopper.
///
/// The quantity is taken as-is; non-positive values are floored to one
/// during resolution rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedLine {
    /// The catalog id of the requested product.
    #[serde(rename = "id")]
    pub product_id: String,
    /// The quantity requested.
    #[serde(rename = "qty")]
    pub requested_qty: i64,
}

impl RequestedLine {
    /// Creates a requested line.
    pub fn new(product_id: impl Into<String>, requested_qty: i64) -> Self {
        Self {
            product_id: product_id.into(),
            requested_qty,
        }
    }
}

/// Delivery and coupon parameters for a quote.
///
/// Keys are normalized once here: the city and method are lowercased and
/// the coupon code is uppercased. Blank values fall back to the defaults
/// (or to no coupon).
///
/// # Example
///
/// ```
/// use pricing_engine::models::OrderContext;
///
/// let context = OrderContext::new(Some(" Bogota "), Some("EXPRESS"), Some("hola10"));
/// assert_eq!(context.delivery_city(), "bogota");
/// assert_eq!(context.delivery_method(), "express");
/// assert_eq!(context.coupon_code(), Some("HOLA10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderContext {
    delivery_city: String,
    delivery_method: String,
    coupon_code: Option<String>,
}

impl OrderContext {
    /// Creates a normalized context from optional raw values.
    pub fn new(city: Option<&str>, method: Option<&str>, coupon: Option<&str>) -> Self {
        Self {
            delivery_city: non_blank(city)
                .unwrap_or(DEFAULT_DELIVERY_CITY)
                .to_lowercase(),
            delivery_method: non_blank(method)
                .unwrap_or(STANDARD_METHOD)
                .to_lowercase(),
            coupon_code: non_blank(coupon).map(str::to_uppercase),
        }
    }

    /// The lowercase delivery city key.
    pub fn delivery_city(&self) -> &str {
        &self.delivery_city
    }

    /// The lowercase delivery method key.
    pub fn delivery_method(&self) -> &str {
        &self.delivery_method
    }

    /// The uppercase coupon code, if one was given.
    pub fn coupon_code(&self) -> Option<&str> {
        self.coupon_code.as_deref()
    }
}

impl Default for OrderContext {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context_uses_bogota_standard_without_coupon() {
        let context = OrderContext::default();
        assert_eq!(context.delivery_city(), DEFAULT_DELIVERY_CITY);
        assert_eq!(context.delivery_method(), STANDARD_METHOD);
        assert_eq!(context.coupon_code(), None);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let context = OrderContext::new(Some("  "), Some(""), Some("   "));
        assert_eq!(context.delivery_city(), "bogota");
        assert_eq!(context.delivery_method(), "standard");
        assert_eq!(context.coupon_code(), None);
    }

    #[test]
    fn test_city_and_method_are_trimmed_and_lowercased() {
        let context = OrderContext::new(Some(" Cali "), Some("EXPRESS"), Some(" rm-20k"));
        assert_eq!(context.delivery_city(), "cali");
        assert_eq!(context.delivery_method(), EXPRESS_METHOD);
        assert_eq!(context.coupon_code(), Some("RM-20K"));
    }

    #[test]
    fn test_requested_line_uses_wire_field_names() {
        let line: RequestedLine = serde_json::from_str(r#"{"id": "A", "qty": -3}"#).unwrap();
        assert_eq!(line, RequestedLine::new("A", -3));
    }
}
