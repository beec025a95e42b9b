//! Store configuration (`pantry.toml`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use pantry_catalog::CatalogConfig;
use pantry_commerce::cart::ShippingPolicy;
use pantry_commerce::checkout::SimulatedCheckout;
use pantry_commerce::search::SuggestionConfig;
use pantry_commerce::Currency;
use pantry_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["pantry.toml", ".pantry.toml", "pantry.json"];

/// Store configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Currency for every price in the store.
    #[serde(default)]
    pub currency: Currency,

    /// Where products come from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub shipping: ShippingConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub checkout: CheckoutConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StoreConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content, is_json(path))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parse config text as TOML or JSON.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        let config: Self = if json {
            serde_json::from_str(content)?
        } else {
            toml::from_str(content)?
        };
        Ok(config)
    }

    /// Apply `PANTRY_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.catalog.apply_env();
    }

    /// Shipping rule in the store currency.
    pub fn shipping_policy(&self) -> Result<ShippingPolicy> {
        ShippingPolicy::from_decimal(
            self.shipping.free_threshold,
            self.shipping.flat_fee,
            self.currency,
        )
        .context("Invalid [shipping] section")
    }

    pub fn suggestion_config(&self) -> Result<SuggestionConfig> {
        if self.search.max_suggestions == 0 {
            bail!("search.max_suggestions must be at least 1");
        }
        Ok(SuggestionConfig::default()
            .with_debounce(Duration::from_millis(self.search.debounce_ms))
            .with_min_query_len(self.search.min_query_len)
            .with_max_suggestions(self.search.max_suggestions))
    }

    pub fn checkout_processor(&self) -> SimulatedCheckout {
        SimulatedCheckout::new(Duration::from_millis(self.checkout.processing_delay_ms))
            .with_prefix(self.checkout.order_prefix.clone())
    }
}

/// Shipping amounts in major units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShippingConfig {
    /// Subtotal at or above which shipping is free.
    pub free_threshold: f64,
    /// Fee charged below the threshold.
    pub flat_fee: f64,
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_threshold: 100.0,
            flat_fee: 10.0,
        }
    }
}

/// Suggestion pipeline tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 2,
            max_suggestions: 5,
        }
    }
}

/// Simulated order processing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckoutConfig {
    pub processing_delay_ms: u64,
    pub order_prefix: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 2000,
            order_prefix: "PN".to_string(),
        }
    }
}

/// Find a config file in `start` or any parent directory.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Generate a default pantry.toml config file.
pub fn generate_default_config(store_name: &str) -> String {
    format!(
        r#"# {store_name} storefront configuration

currency = "USD"

[catalog]
# "static" serves the bundled products, "remote" queries the Storefront API.
backend = "static"
static_latency_ms = 0

[catalog.remote]
# store_domain = "your-store.myshopify.com"
# storefront_token = "public-access-token"
api_version = "2025-07"
timeout_ms = 10000
page_size = 50

[shipping]
free_threshold = 100.0
flat_fee = 10.0

[search]
debounce_ms = 300
min_query_len = 2
max_suggestions = 5

[checkout]
processing_delay_ms = 2000
order_prefix = "PN"

[logging]
level = "info"
format = "human"
"#
    )
}
