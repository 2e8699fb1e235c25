//! Shipping cost calculation.

use crate::config::ShippingRateTable;

/// Calculates the shipping cost for a delivery city and method.
///
/// The city is matched case-insensitively; unmapped cities use the
/// `_default` tier. Within a tier, an unknown method falls back to that
/// tier's `standard` rate. The table guarantees both fallbacks exist, so
/// this never fails.
///
/// # Examples
///
/// ```
/// use pricing_engine::config::ShippingRateTable;
/// use pricing_engine::pricing::calculate_shipping;
///
/// let table = ShippingRateTable::default();
/// assert_eq!(calculate_shipping(&table, "Bogota", "express"), 16000);
/// assert_eq!(calculate_shipping(&table, "pasto", "standard"), 12000);
/// ```
pub fn calculate_shipping(table: &ShippingRateTable, city: &str, method: &str) -> i64 {
    table.cost(city, method)
}
