//! Configuration types for quote pricing.
//!
//! This module contains the strongly-typed shipping and coupon tables.
//! Both are deserialized from YAML and validated on the way in, so the
//! engine can treat them as total lookups.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::EngineError;
use crate::models::{EXPRESS_METHOD, STANDARD_METHOD};

/// Key of the fallback tier that covers every unmapped city.
pub const DEFAULT_CITY_KEY: &str = "_default";

/// Shipping rates for one city.
///
/// The `standard` rate is mandatory and doubles as the fallback for any
/// method the city does not list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityRates {
    standard: i64,
    methods: HashMap<String, i64>,
}

impl CityRates {
    /// The cost for `method`, falling back to the standard rate.
    pub fn cost(&self, method: &str) -> i64 {
        self.methods.get(method).copied().unwrap_or(self.standard)
    }

    /// The standard rate.
    pub fn standard(&self) -> i64 {
        self.standard
    }

    fn from_methods(city: &str, methods: HashMap<String, i64>) -> Result<Self, EngineError> {
        let mut normalized = HashMap::with_capacity(methods.len());
        for (method, cost) in methods {
            let key = method.trim().to_lowercase();
            if normalized.insert(key.clone(), cost).is_some() {
                return Err(EngineError::InvalidShippingTable {
                    message: format!("city '{}' lists method '{}' more than once", city, key),
                });
            }
        }
        let methods = normalized;

        if let Some((method, cost)) = methods.iter().find(|(_, cost)| **cost < 0) {
            return Err(EngineError::InvalidShippingTable {
                message: format!(
                    "rate for '{}' / '{}' cannot be negative (got {})",
                    city, method, cost
                ),
            });
        }

        let standard = methods.get(STANDARD_METHOD).copied().ok_or_else(|| {
            EngineError::InvalidShippingTable {
                message: format!("city '{}' has no '{}' rate", city, STANDARD_METHOD),
            }
        })?;

        Ok(Self { standard, methods })
    }
}

/// City to method to cost mapping with a mandatory `_default` tier.
///
/// City and method keys are stored lowercase. Construction fails unless
/// `_default` exists, every tier has a non-negative `standard` rate, and no
/// two keys collide once lowercased.
///
/// # Example
///
/// ```
/// use pricing_engine::config::ShippingRateTable;
///
/// let table: ShippingRateTable = serde_yaml::from_str(
///     "_default: {standard: 12000, express: 20000}\ncali: {standard: 11000}",
/// )
/// .unwrap();
/// assert_eq!(table.cost("Cali", "express"), 11000);
/// assert_eq!(table.cost("pasto", "express"), 20000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, HashMap<String, i64>>")]
pub struct ShippingRateTable {
    default: CityRates,
    cities: HashMap<String, CityRates>,
}

impl ShippingRateTable {
    /// Looks up the rate tier for a city, falling back to `_default`.
    fn tier(&self, city: &str) -> &CityRates {
        self.cities
            .get(city.trim().to_lowercase().as_str())
            .unwrap_or(&self.default)
    }

    /// The shipping cost for a city and method.
    pub fn cost(&self, city: &str, method: &str) -> i64 {
        self.tier(city).cost(method.trim().to_lowercase().as_str())
    }

    /// The fallback tier.
    pub fn default_tier(&self) -> &CityRates {
        &self.default
    }

    /// Number of explicitly mapped cities, excluding `_default`.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }
}

impl TryFrom<HashMap<String, HashMap<String, i64>>> for ShippingRateTable {
    type Error = EngineError;

    fn try_from(raw: HashMap<String, HashMap<String, i64>>) -> Result<Self, Self::Error> {
        let mut default = None;
        let mut cities = HashMap::new();

        for (city, methods) in raw {
            let key = city.trim().to_lowercase();
            let rates = CityRates::from_methods(&key, methods)?;
            let duplicate = if key == DEFAULT_CITY_KEY {
                default.replace(rates).is_some()
            } else {
                cities.insert(key.clone(), rates).is_some()
            };
            if duplicate {
                return Err(EngineError::InvalidShippingTable {
                    message: format!("city '{}' is listed more than once", key),
                });
            }
        }

        let default = default.ok_or_else(|| EngineError::InvalidShippingTable {
            message: format!("missing '{}' tier", DEFAULT_CITY_KEY),
        })?;

        Ok(Self { default, cities })
    }
}

impl Default for ShippingRateTable {
    fn default() -> Self {
        let tier = |standard: i64, express: i64| CityRates {
            standard,
            methods: HashMap::from([
                (STANDARD_METHOD.to_string(), standard),
                (EXPRESS_METHOD.to_string(), express),
            ]),
        };

        Self {
            default: tier(12000, 20000),
            cities: HashMap::from([
                ("bogota".to_string(), tier(9000, 16000)),
                ("medellin".to_string(), tier(10000, 18000)),
                ("cali".to_string(), tier(11000, 19000)),
            ]),
        }
    }
}

/// The kind of discount a coupon grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponKind {
    /// Percentage of the subtotal.
    Percent,
    /// Fixed amount, capped at the subtotal.
    Amount,
    /// Zeroes the shipping cost.
    ShippingFree,
    /// Any kind this engine does not know. Such coupons are never applied.
    #[serde(other)]
    Unsupported,
}

/// A coupon as written in `coupons.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CouponDefinition {
    /// The coupon kind.
    #[serde(rename = "type")]
    pub kind: CouponKind,
    /// Percentage or amount. Unused for `shipping_free`.
    #[serde(default)]
    pub value: Option<Decimal>,
}

/// A validated coupon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    /// Uppercase coupon code.
    pub code: String,
    /// The coupon kind.
    pub kind: CouponKind,
    /// Percentage (0 to 100) or amount. Always present for percent and amount.
    pub value: Option<Decimal>,
}

impl Coupon {
    /// Validates a definition and normalizes its code.
    pub fn new(code: &str, definition: CouponDefinition) -> Result<Self, EngineError> {
        let code = code.trim().to_uppercase();
        let invalid = |message: String| EngineError::InvalidCoupon {
            code: code.clone(),
            message,
        };

        match (definition.kind, definition.value) {
            (CouponKind::Percent, None) => {
                return Err(invalid("percent coupons require a value".to_string()));
            }
            (CouponKind::Percent, Some(value))
                if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED =>
            {
                return Err(invalid(format!(
                    "percent value must be between 0 and 100 (got {})",
                    value
                )));
            }
            (CouponKind::Amount, None) => {
                return Err(invalid("amount coupons require a value".to_string()));
            }
            (CouponKind::Amount, Some(value)) if value < Decimal::ZERO => {
                return Err(invalid(format!(
                    "amount value cannot be negative (got {})",
                    value
                )));
            }
            _ => {}
        }

        Ok(Self {
            code,
            kind: definition.kind,
            value: definition.value,
        })
    }
}

/// Coupons indexed by uppercase code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, CouponDefinition>")]
pub struct CouponRegistry {
    coupons: HashMap<String, Coupon>,
}

impl CouponRegistry {
    /// Builds a registry from validated coupons, rejecting duplicate codes.
    pub fn new(coupons: impl IntoIterator<Item = Coupon>) -> Result<Self, EngineError> {
        let mut registry = HashMap::new();
        for coupon in coupons {
            if registry.contains_key(&coupon.code) {
                return Err(EngineError::InvalidCoupon {
                    code: coupon.code,
                    message: "duplicate code".to_string(),
                });
            }
            registry.insert(coupon.code.clone(), coupon);
        }
        Ok(Self { coupons: registry })
    }

    /// The built-in coupons.
    pub fn builtin() -> Self {
        let coupon = |code: &str, kind, value: Option<i64>| {
            (
                code.to_string(),
                Coupon {
                    code: code.to_string(),
                    kind,
                    value: value.map(Decimal::from),
                },
            )
        };

        Self {
            coupons: HashMap::from([
                coupon("HOLA10", CouponKind::Percent, Some(10)),
                coupon("ENVIOFREE", CouponKind::ShippingFree, None),
                coupon("RM-20K", CouponKind::Amount, Some(20000)),
            ]),
        }
    }

    /// Looks up a coupon by code, ignoring case.
    pub fn get(&self, code: &str) -> Option<&Coupon> {
        self.coupons.get(code.trim().to_uppercase().as_str())
    }

    /// Number of registered coupons.
    pub fn len(&self) -> usize {
        self.coupons.len()
    }

    /// Returns true if no coupons are registered.
    pub fn is_empty(&self) -> bool {
        self.coupons.is_empty()
    }
}

impl TryFrom<HashMap<String, CouponDefinition>> for CouponRegistry {
    type Error = EngineError;

    fn try_from(raw: HashMap<String, CouponDefinition>) -> Result<Self, Self::Error> {
        let coupons = raw
            .into_iter()
            .map(|(code, definition)| Coupon::new(&code, definition))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(coupons)
    }
}

/// Shipping configuration file structure (`shipping.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShippingConfigFile {
    /// The rate table.
    pub shipping: ShippingRateTable,
}

/// Coupon configuration file structure (`coupons.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct CouponsConfigFile {
    /// The coupon registry.
    #[serde(default)]
    pub coupons: CouponRegistry,
}

/// The complete pricing configuration handed to the engine.
///
/// `Default` yields the built-in shipping tiers and coupons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Shipping rates by city and method.
    pub shipping: ShippingRateTable,
    /// Known coupons.
    pub coupons: CouponRegistry,
}

impl PricingConfig {
    /// Creates a configuration from its parts.
    pub fn new(shipping: ShippingRateTable, coupons: CouponRegistry) -> Self {
        Self { shipping, coupons }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::new(ShippingRateTable::default(), CouponRegistry::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_table(yaml: &str) -> Result<ShippingRateTable, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    #[test]
    fn test_table_requires_default_tier() {
        let err = parse_table("bogota: {standard: 9000}").unwrap_err();
        assert!(err.to_string().contains("_default"));
    }

    #[test]
    fn test_table_requires_standard_rate_per_city() {
        let err = parse_table("_default: {standard: 12000}\ncali: {express: 19000}").unwrap_err();
        assert!(err.to_string().contains("cali"));
        assert!(err.to_string().contains("standard"));
    }

    #[test]
    fn test_table_rejects_negative_rate() {
        let err = parse_table("_default: {standard: -1}").unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_table_normalizes_city_keys() {
        let table = parse_table("_default: {standard: 12000}\nMedellin: {standard: 10000}").unwrap();
        assert_eq!(table.cost("MEDELLIN", "standard"), 10000);
        assert_eq!(table.city_count(), 1);
    }

    #[test]
    fn test_builtin_table_matches_published_rates() {
        let table = ShippingRateTable::default();
        assert_eq!(table.cost("bogota", "standard"), 9000);
        assert_eq!(table.cost("bogota", "express"), 16000);
        assert_eq!(table.cost("medellin", "express"), 18000);
        assert_eq!(table.cost("cali", "standard"), 11000);
        assert_eq!(table.default_tier().standard(), 12000);
        assert_eq!(table.default_tier().cost("express"), 20000);
    }

    #[test]
    fn test_percent_coupon_requires_value() {
        let definition = CouponDefinition {
            kind: CouponKind::Percent,
            value: None,
        };
        match Coupon::new("hola10", definition) {
            Err(EngineError::InvalidCoupon { code, .. }) => assert_eq!(code, "HOLA10"),
            other => panic!("Expected InvalidCoupon, got {:?}", other),
        }
    }

    #[test]
    fn test_percent_coupon_rejects_over_one_hundred() {
        let definition = CouponDefinition {
            kind: CouponKind::Percent,
            value: Some(Decimal::from(150)),
        };
        assert!(Coupon::new("BIG", definition).is_err());
    }

    #[test]
    fn test_amount_coupon_rejects_negative_value() {
        let definition = CouponDefinition {
            kind: CouponKind::Amount,
            value: Some(Decimal::from(-5)),
        };
        assert!(Coupon::new("NEG", definition).is_err());
    }

    #[test]
    fn test_unknown_kind_deserializes_as_unsupported() {
        let registry: CouponRegistry =
            serde_yaml::from_str("BOGO: {type: buy_one_get_one, value: 1}").unwrap();
        assert_eq!(registry.get("bogo").map(|c| c.kind), Some(CouponKind::Unsupported));
    }

    #[test]
    fn test_table_rejects_cities_equal_after_normalization() {
        let result: Result<ShippingRateTable, _> = serde_yaml::from_str(
            "_default: {standard: 12000}\nCali: {standard: 1}\ncali: {standard: 11000}",
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("'cali' is listed more than once"), "{}", err);
    }

    #[test]
    fn test_table_rejects_default_tier_listed_twice() {
        let result: Result<ShippingRateTable, _> =
            serde_yaml::from_str("_default: {standard: 12000}\n_DEFAULT: {standard: 1}");
        assert!(result.is_err());
    }

    #[test]
    fn test_table_rejects_methods_equal_after_normalization() {
        let result: Result<ShippingRateTable, _> =
            serde_yaml::from_str("_default: {standard: 12000, Standard: 1}");
        let err = result.unwrap_err().to_string();
        assert!(err.contains("method 'standard'"), "{}", err);
    }

    #[test]
    fn test_registry_rejects_codes_equal_after_normalization() {
        let result: Result<CouponRegistry, _> =
            serde_yaml::from_str("hola10: {type: percent, value: 10}\nHOLA10: {type: percent, value: 5}");
        assert!(result.is_err());
    }

    #[test]
    fn test_builtin_registry_lookup_is_case_insensitive() {
        let registry = CouponRegistry::builtin();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get("enviofree").map(|c| c.kind),
            Some(CouponKind::ShippingFree)
        );
        assert_eq!(registry.get("Rm-20k").and_then(|c| c.value), Some(Decimal::from(20000)));
        assert!(registry.get("NOPE").is_none());
    }
}
