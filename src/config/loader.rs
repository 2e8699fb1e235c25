//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the shipping
//! and coupon tables from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{CouponsConfigFile, PricingConfig, ShippingConfigFile};

/// Loads and provides access to pricing configuration.
///
/// # Directory Structure
///
/// ```text
/// config/pricing/
/// ├── shipping.yaml   # City -> method -> cost, with a `_default` tier
/// └── coupons.yaml    # Coupon code -> {type, value}
/// ```
///
/// # Example
///
/// ```no_run
/// use pricing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pricing")?;
/// let cost = loader.config().shipping.cost("cali", "standard");
/// println!("Cali standard shipping: {}", cost);
/// # Ok::<(), pricing_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if either file is missing, is not valid YAML, or describes an
    /// invalid table (no `_default` tier, a tier without a `standard` rate,
    /// a negative rate, or a coupon without its required value).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let shipping = Self::load_yaml::<ShippingConfigFile>(&path.join("shipping.yaml"))?;
        let coupons = Self::load_yaml::<CouponsConfigFile>(&path.join("coupons.yaml"))?;

        let config = PricingConfig::new(shipping.shipping, coupons.coupons);
        info!(
            path = %path.display(),
            cities = config.shipping.city_count(),
            coupons = config.coupons.len(),
            "Loaded pricing configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PricingConfig {
        self.config
    }
}
