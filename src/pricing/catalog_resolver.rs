//! Cart line resolution against a catalog snapshot.
//!
//! This module turns requested cart lines into priced quote lines,
//! applying the quantity floor and stock clamping rules and collecting
//! warnings for anything that could not be priced as requested.

use crate::models::{CatalogSnapshot, QuoteLine, QuoteWarning, RequestedLine};

/// The result of resolving a cart: priced lines, warnings, and subtotal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedCart {
    /// Priced lines in request order. Unknown products are omitted.
    pub lines: Vec<QuoteLine>,
    /// Warnings in detection order.
    pub warnings: Vec<QuoteWarning>,
    /// Sum of all line amounts.
    pub subtotal: i64,
}

/// Resolves requested lines against a catalog snapshot.
///
/// For each requested line, in order:
/// 1. Unknown ids produce a [`QuoteWarning::UnknownProduct`] and no line.
/// 2. The quantity is floored to one: `qty = max(1, requested_qty)`.
/// 3. If the entry has stock and `stock < qty`, a
///    [`QuoteWarning::InsufficientStock`] is raised and the quantity is
///    clamped to the stock. The line is kept even when that leaves zero units.
/// 4. `line_amount = unit_price * qty` is added to the subtotal.
///
/// Line amounts and the subtotal saturate at `i64::MAX` instead of
/// wrapping, so neither can turn negative. Never fails.
///
/// # Examples
///
/// ```
/// use pricing_engine::models::{CatalogEntry, CatalogSnapshot, RequestedLine};
/// use pricing_engine::pricing::resolve_lines;
///
/// let catalog = CatalogSnapshot::new(vec![CatalogEntry::new("A", "Jersey", 5000, Some(1))])?;
/// let cart = resolve_lines(
///     &[RequestedLine::new("A", 3), RequestedLine::new("Z", 1)],
///     &catalog,
/// );
///
/// assert_eq!(cart.lines.len(), 1);
/// assert_eq!(cart.lines[0].resolved_qty, 1);
/// assert_eq!(cart.subtotal, 5000);
/// assert_eq!(cart.warnings.len(), 2);
/// # Ok::<(), pricing_engine::error::EngineError>(())
/// ```
pub fn resolve_lines(requested: &[RequestedLine], catalog: &CatalogSnapshot) -> ResolvedCart {
    requested
        .iter()
        .fold(ResolvedCart::default(), |mut cart, line| {
            let Some(entry) = catalog.get(&line.product_id) else {
                cart.warnings.push(QuoteWarning::UnknownProduct {
                    id: line.product_id.clone(),
                });
                return cart;
            };

            let mut qty = line.requested_qty.max(1);

            if let Some(stock) = entry.stock.filter(|stock| *stock < qty) {
                cart.warnings.push(QuoteWarning::InsufficientStock {
                    name: entry.name.clone(),
                    requested: qty,
                    stock,
                });
                qty = stock.max(0);
            }

            let line_amount = entry.unit_price.saturating_mul(qty);
            cart.subtotal = cart.subtotal.saturating_add(line_amount);
            cart.lines.push(QuoteLine {
                id: entry.id.clone(),
                name: entry.name.clone(),
                unit_price: entry.unit_price,
                resolved_qty: qty,
                line_amount,
                image: entry.image.clone(),
            });

            cart
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogEntry;

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(vec![
            CatalogEntry::new("A", "Home jersey", 5000, Some(10)),
            CatalogEntry::new("B", "Away jersey", 7000, Some(1)),
            CatalogEntry::new("C", "Scarf", 1500, None),
            CatalogEntry::new("D", "Match ball", 9000, Some(0)),
        ])
        .unwrap()
    }

    /// CR-001: known product within stock is priced as requested
    #[test]
    fn test_known_product_within_stock() {
        let cart = resolve_lines(&[RequestedLine::new("A", 2)], &catalog());

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].resolved_qty, 2);
        assert_eq!(cart.lines[0].line_amount, 10000);
        assert_eq!(cart.subtotal, 10000);
        assert!(cart.warnings.is_empty());
    }

    /// CR-002: unknown product is skipped with exactly one warning
    #[test]
    fn test_unknown_product_skipped_with_warning() {
        let cart = resolve_lines(&[RequestedLine::new("missing-id", 1)], &catalog());

        assert!(cart.lines.is_empty());
        assert_eq!(cart.subtotal, 0);
        assert_eq!(cart.warnings.len(), 1);
        assert_eq!(cart.warnings[0].to_string(), "Producto missing-id no existe.");
    }

    /// CR-003: quantity above stock is clamped with a warning
    #[test]
    fn test_quantity_above_stock_is_clamped() {
        let cart = resolve_lines(&[RequestedLine::new("B", 3)], &catalog());

        assert_eq!(cart.lines[0].resolved_qty, 1);
        assert_eq!(cart.lines[0].line_amount, 7000);
        assert_eq!(
            cart.warnings,
            vec![QuoteWarning::InsufficientStock {
                name: "Away jersey".to_string(),
                requested: 3,
                stock: 1,
            }]
        );
        assert_eq!(
            cart.warnings[0].to_string(),
            "Stock insuficiente para Away jersey (solicitado 3, stock 1)."
        );
    }

    /// CR-004: zero and negative quantities are floored to one
    #[test]
    fn test_non_positive_quantity_floored_to_one() {
        let cart = resolve_lines(
            &[RequestedLine::new("A", 0), RequestedLine::new("C", -4)],
            &catalog(),
        );

        assert_eq!(cart.lines[0].resolved_qty, 1);
        assert_eq!(cart.lines[1].resolved_qty, 1);
        assert_eq!(cart.subtotal, 5000 + 1500);
        assert!(cart.warnings.is_empty());
    }

    /// CR-005: out-of-stock product is kept as a zero line
    #[test]
    fn test_out_of_stock_product_kept_as_zero_line() {
        let cart = resolve_lines(&[RequestedLine::new("D", 2)], &catalog());

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].resolved_qty, 0);
        assert_eq!(cart.lines[0].line_amount, 0);
        assert_eq!(cart.subtotal, 0);
        assert_eq!(
            cart.warnings[0].to_string(),
            "Stock insuficiente para Match ball (solicitado 2, stock 0)."
        );
    }

    /// CR-006: floored quantity is what the stock warning reports
    #[test]
    fn test_floored_quantity_checked_against_stock() {
        let cart = resolve_lines(&[RequestedLine::new("D", -1)], &catalog());

        assert_eq!(cart.lines[0].resolved_qty, 0);
        assert_eq!(
            cart.warnings[0].to_string(),
            "Stock insuficiente para Match ball (solicitado 1, stock 0)."
        );
    }

    #[test]
    fn test_unconstrained_stock_accepts_any_quantity() {
        let cart = resolve_lines(&[RequestedLine::new("C", 500)], &catalog());

        assert_eq!(cart.lines[0].resolved_qty, 500);
        assert_eq!(cart.subtotal, 750000);
    }

    #[test]
    fn test_order_of_lines_and_warnings_follows_request() {
        let cart = resolve_lines(
            &[
                RequestedLine::new("C", 1),
                RequestedLine::new("X", 1),
                RequestedLine::new("B", 5),
                RequestedLine::new("A", 1),
                RequestedLine::new("Y", 1),
            ],
            &catalog(),
        );

        let ids: Vec<&str> = cart.lines.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "B", "A"]);

        let messages: Vec<String> = cart.warnings.iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            vec![
                "Producto X no existe.".to_string(),
                "Stock insuficiente para Away jersey (solicitado 5, stock 1).".to_string(),
                "Producto Y no existe.".to_string(),
            ]
        );
    }

    #[test]
    fn test_repeated_product_lines_are_resolved_independently() {
        let cart = resolve_lines(
            &[RequestedLine::new("B", 1), RequestedLine::new("B", 1)],
            &catalog(),
        );

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.subtotal, 14000);
        assert!(cart.warnings.is_empty());
    }

    /// CR-007: amounts past the i64 range saturate instead of wrapping
    #[test]
    fn test_huge_quantity_saturates_line_and_subtotal() {
        let catalog = CatalogSnapshot::new(vec![CatalogEntry::new("col", "Home kit", 159900, None)])
            .unwrap();
        let cart = resolve_lines(
            &[
                RequestedLine::new("col", 100_000_000_000_000),
                RequestedLine::new("col", 1),
            ],
            &catalog,
        );

        assert_eq!(cart.lines[0].resolved_qty, 100_000_000_000_000);
        assert_eq!(cart.lines[0].line_amount, i64::MAX);
        assert_eq!(cart.lines[1].line_amount, 159900);
        assert_eq!(cart.subtotal, i64::MAX);
        assert!(cart.warnings.is_empty());
    }

    #[test]
    fn test_empty_cart() {
        let cart = resolve_lines(&[], &catalog());
        assert_eq!(cart, ResolvedCart::default());
    }
}
