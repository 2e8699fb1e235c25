//! Quote result models.
//!
//! This module contains the [`Quote`] type and its line items and warnings,
//! the full output of a pricing run.

use std::fmt;

use serde::{Serialize, Serializer};

/// A single priced line of a quote.
///
/// # Example
///
/// ```
/// use pricing_engine::models::QuoteLine;
///
/// let line = QuoteLine {
///     id: "A".to_string(),
///     name: "Home jersey".to_string(),
///     unit_price: 5000,
///     resolved_qty: 2,
///     line_amount: 10000,
///     image: None,
/// };
/// assert_eq!(line.line_amount, line.unit_price * line.resolved_qty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    /// The resolved catalog id.
    pub id: String,
    /// The product name.
    pub name: String,
    /// Price per unit in minor currency units.
    pub unit_price: i64,
    /// Quantity after flooring and stock clamping. Never negative.
    #[serde(rename = "qty")]
    pub resolved_qty: i64,
    /// `unit_price * resolved_qty`.
    #[serde(rename = "line")]
    pub line_amount: i64,
    /// Product image URL, carried through from the catalog.
    #[serde(rename = "img", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A non-fatal issue found while resolving the cart.
///
/// Warnings serialize as their customer-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteWarning {
    /// The requested product id is not in the catalog.
    UnknownProduct {
        /// The requested id.
        id: String,
    },
    /// The requested quantity exceeds the available stock.
    InsufficientStock {
        /// The product name.
        name: String,
        /// The quantity after flooring, before clamping.
        requested: i64,
        /// The available stock.
        stock: i64,
    },
}

impl fmt::Display for QuoteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteWarning::UnknownProduct { id } => write!(f, "Producto {} no existe.", id),
            QuoteWarning::InsufficientStock {
                name,
                requested,
                stock,
            } => write!(
                f,
                "Stock insuficiente para {} (solicitado {}, stock {}).",
                name, requested, stock
            ),
        }
    }
}

impl Serialize for QuoteWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The complete result of pricing a cart.
///
/// Amounts are integers in the minor currency unit and satisfy
/// `total == max(0, subtotal - discount + shipping)` and
/// `0 <= discount <= subtotal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Priced lines, in the order the products were requested.
    #[serde(rename = "items")]
    pub lines: Vec<QuoteLine>,
    /// Sum of all line amounts.
    pub subtotal: i64,
    /// Coupon discount.
    pub discount: i64,
    /// Shipping cost after any coupon override.
    pub shipping: i64,
    /// Amount due.
    pub total: i64,
    /// Issues found while resolving the cart, in detection order.
    pub warnings: Vec<QuoteWarning>,
    /// The uppercase code of the coupon that was applied.
    pub applied_coupon: Option<String>,
}

impl Quote {
    /// Returns true if any warnings were raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> Quote {
        Quote {
            lines: vec![QuoteLine {
                id: "A".to_string(),
                name: "Home jersey".to_string(),
                unit_price: 5000,
                resolved_qty: 2,
                line_amount: 10000,
                image: None,
            }],
            subtotal: 10000,
            discount: 0,
            shipping: 11000,
            total: 21000,
            warnings: vec![QuoteWarning::UnknownProduct {
                id: "Z".to_string(),
            }],
            applied_coupon: None,
        }
    }

    #[test]
    fn test_unknown_product_message() {
        let warning = QuoteWarning::UnknownProduct {
            id: "X9".to_string(),
        };
        assert_eq!(warning.to_string(), "Producto X9 no existe.");
    }

    #[test]
    fn test_insufficient_stock_message() {
        let warning = QuoteWarning::InsufficientStock {
            name: "Home jersey".to_string(),
            requested: 3,
            stock: 1,
        };
        assert_eq!(
            warning.to_string(),
            "Stock insuficiente para Home jersey (solicitado 3, stock 1)."
        );
    }

    #[test]
    fn test_quote_serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample_quote()).unwrap();

        assert_eq!(value["items"][0]["qty"], 2);
        assert_eq!(value["items"][0]["line"], 10000);
        assert!(value["items"][0].get("img").is_none());
        assert_eq!(value["total"], 21000);
        assert_eq!(value["warnings"][0], "Producto Z no existe.");
        assert!(value["applied_coupon"].is_null());
    }

    #[test]
    fn test_quote_helpers() {
        let quote = sample_quote();
        assert!(quote.has_warnings());
        assert!(!Quote { warnings: vec![], ..quote }.has_warnings());
    }
}
