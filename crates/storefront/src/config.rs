//! Storefront configuration.
//!
//! The storefront runs entirely in the page, so there are no environment
//! variables. Hosts either build a [`StorefrontConfig`] in code or embed a
//! JSON document:
//!
//! ```json
//! {
//!   "merchant_address": "0x52908400098527886E0F7030069857D2E4169EE7",
//!   "gas_limit": 21000,
//!   "catalog": [
//!     {"id": 1, "name": "Tomato", "unit_price": {"amount": "0.01"}, "image_ref": "url"}
//!   ]
//! }
//! ```
//!
//! ## Required
//! - `merchant_address` - Account that receives every checkout payment
//!
//! ## Optional
//! - `gas_limit` - Gas limit hint for the transfer (default: 21000)
//! - `catalog` - Items for sale (default: the six FarmConnect vegetables)

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use farmconnect_core::{Address, ItemId};

use crate::catalog::{self, CatalogItem};

/// Gas needed by a plain value transfer.
pub const DEFAULT_GAS_LIMIT: u64 = 21_000;

/// Configuration errors that can occur during loading or validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Merchant address must not be the zero address")]
    ZeroMerchantAddress,
    #[error("Gas limit must be greater than zero")]
    ZeroGasLimit,
    #[error("Duplicate catalog id: {0}")]
    DuplicateItemId(ItemId),
    #[error("Catalog item {0} has a negative price")]
    NegativePrice(ItemId),
}

/// Storefront application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    /// Fixed destination of every payment
    pub merchant_address: Address,
    /// Gas limit hint attached to the transfer
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
    /// Items for sale, in display order
    #[serde(default = "catalog::default_items")]
    pub catalog: Vec<CatalogItem>,
}

const fn default_gas_limit() -> u64 {
    DEFAULT_GAS_LIMIT
}

impl StorefrontConfig {
    /// Configuration with the default catalog and gas limit.
    #[must_use]
    pub fn new(merchant_address: Address) -> Self {
        Self {
            merchant_address,
            gas_limit: DEFAULT_GAS_LIMIT,
            catalog: catalog::default_items(),
        }
    }

    /// Replace the catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Vec<CatalogItem>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Replace the gas limit hint.
    #[must_use]
    pub const fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    /// Parse and validate a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is malformed or fails
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the controller relies on.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the merchant address is the zero address,
    /// the gas limit is zero, catalog ids repeat, or a price is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Payments to the zero address are burned.
        if self.merchant_address.is_zero() {
            return Err(ConfigError::ZeroMerchantAddress);
        }

        if self.gas_limit == 0 {
            return Err(ConfigError::ZeroGasLimit);
        }

        let mut seen = HashSet::new();
        for item in &self.catalog {
            if !seen.insert(item.id) {
                return Err(ConfigError::DuplicateItemId(item.id));
            }
            if item.unit_price.is_negative() {
                return Err(ConfigError::NegativePrice(item.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use farmconnect_core::Price;

    use super::*;

    const MERCHANT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    fn merchant() -> Address {
        Address::parse(MERCHANT).unwrap()
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = StorefrontConfig::new(merchant());
        assert_eq!(config.gas_limit, 21_000);
        assert_eq!(config.catalog.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = format!(r#"{{"merchant_address": "{MERCHANT}"}}"#);
        let config = StorefrontConfig::from_json(&json).unwrap();
        assert_eq!(config.merchant_address, merchant());
        assert_eq!(config.gas_limit, DEFAULT_GAS_LIMIT);
        assert_eq!(config.catalog, catalog::default_items());
    }

    #[test]
    fn test_from_json_rejects_placeholder_address() {
        let json = r#"{"merchant_address": "0xYourWebsiteEthAddress"}"#;
        assert!(matches!(
            StorefrontConfig::from_json(json),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_merchant() {
        let zero = Address::parse(&format!("0x{}", "0".repeat(40))).unwrap();
        assert!(matches!(
            StorefrontConfig::new(zero).validate(),
            Err(ConfigError::ZeroMerchantAddress)
        ));
    }

    #[test]
    fn test_rejects_zero_gas_limit() {
        let config = StorefrontConfig::new(merchant()).with_gas_limit(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroGasLimit)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let config = StorefrontConfig::new(merchant()).with_catalog(vec![
            CatalogItem::new(1, "Tomato", Price::ether(1, 2), "url"),
            CatalogItem::new(1, "Heirloom Tomato", Price::ether(2, 2), "url"),
        ]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateItemId(id)) if id == ItemId::new(1)
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let config = StorefrontConfig::new(merchant()).with_catalog(vec![CatalogItem::new(
            9,
            "Refund",
            Price::ether(-1, 2),
            "url",
        )]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativePrice(id)) if id == ItemId::new(9)
        ));
    }
}
