//! Configuration loading and management for the pricing engine.
//!
//! This module loads the shipping rate table and the coupon registry from
//! YAML files and validates them, so structural problems surface before
//! any quote is built.
//!
//! # Example
//!
//! ```no_run
//! use pricing_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/pricing").unwrap();
//! println!("Coupons loaded: {}", loader.config().coupons.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CityRates, Coupon, CouponDefinition, CouponKind, CouponRegistry, CouponsConfigFile,
    DEFAULT_CITY_KEY, PricingConfig, ShippingConfigFile, ShippingRateTable,
};
