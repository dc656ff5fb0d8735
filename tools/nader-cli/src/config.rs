//! CLI configuration.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use nader_commerce::cart::CART_STORAGE_KEY;
use nader_commerce::checkout::{CheckoutSettings, DEFAULT_MOCK_SUCCESS_RATE};
use nader_commerce::Money;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Checkout pricing and the mock gateway.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Credentials per payment provider id.
    #[serde(default)]
    pub payments: HashMap<String, HashMap<String, String>>,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Credentials configured for a provider; empty if none.
    pub fn credentials(&self, provider_id: &str) -> HashMap<String, String> {
        self.payments.get(provider_id).cloned().unwrap_or_default()
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted cart.
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,

    /// Key the cart snapshot is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,
}

fn default_storage_dir() -> PathBuf {
    data_dir().join("nader")
}

fn default_cart_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
            cart_key: default_cart_key(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Tax rate (0.08 = 8%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Subtotal in dollars from which shipping is free.
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: f64,

    /// Probability the mock gateway approves a charge.
    #[serde(default = "default_mock_success_rate")]
    pub mock_success_rate: f64,

    /// Simulated gateway latency in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_tax_rate() -> f64 {
    0.08
}

fn default_free_shipping_threshold() -> f64 {
    50.0
}

fn default_mock_success_rate() -> f64 {
    DEFAULT_MOCK_SUCCESS_RATE
}

fn default_processing_delay_ms() -> u64 {
    2000
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            free_shipping_threshold: default_free_shipping_threshold(),
            mock_success_rate: default_mock_success_rate(),
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

impl CheckoutConfig {
    /// Pricing settings for the commerce crate.
    pub fn settings(&self) -> CheckoutSettings {
        let defaults = CheckoutSettings::default();
        CheckoutSettings {
            tax_rate: self.tax_rate,
            free_shipping_threshold: Money::from_decimal(
                self.free_shipping_threshold,
                defaults.free_shipping_threshold.currency,
            ),
            ..defaults
        }
    }
}

/// Get the platform-specific data directory.
fn data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

/// Generate a default nader.toml config file.
pub fn generate_default_config(storage_dir: &str) -> String {
    format!(
        r#"# NADER storefront configuration

[storage]
dir = "{storage_dir}"
cart_key = "{cart_key}"

[checkout]
tax_rate = 0.08
free_shipping_threshold = 50.0
mock_success_rate = 0.9
processing_delay_ms = 2000

# Real providers stay disabled; credentials only feed `nader config show`.
# [payments.stripe]
# publishable_key = "pk_test_..."
# secret_key = "sk_test_..."
"#,
        storage_dir = storage_dir,
        cart_key = CART_STORAGE_KEY,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CliConfig = toml::from_str("").unwrap();
        assert_eq!(config.storage.cart_key, CART_STORAGE_KEY);
        assert_eq!(config.checkout.tax_rate, 0.08);
        assert_eq!(config.checkout.mock_success_rate, 0.9);
        assert!(config.payments.is_empty());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: CliConfig = toml::from_str(&generate_default_config("/tmp/nader")).unwrap();
        assert_eq!(config.storage.dir, PathBuf::from("/tmp/nader"));
        assert_eq!(config.checkout.processing_delay_ms, 2000);
    }

    #[test]
    fn test_payment_credentials() {
        let config: CliConfig = toml::from_str(
            r#"
            [payments.paypal]
            client_id = "abc"
            client_secret = "shh"
            "#,
        )
        .unwrap();
        assert_eq!(config.credentials("paypal").len(), 2);
        assert!(config.credentials("stripe").is_empty());
    }

    #[test]
    fn test_checkout_settings() {
        let config: CliConfig = toml::from_str(
            r#"
            [checkout]
            tax_rate = 0.1
            free_shipping_threshold = 75.5
            "#,
        )
        .unwrap();
        let settings = config.checkout.settings();
        assert_eq!(settings.tax_rate, 0.1);
        assert_eq!(settings.free_shipping_threshold.amount_cents, 7550);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nader.json");
        std::fs::write(&path, r#"{"storage": {"cart_key": "cart:json"}}"#).unwrap();

        let loaded = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded.storage.cart_key, "cart:json");
        assert_eq!(loaded.checkout.tax_rate, 0.08);
    }
}
