//! Catalog backend selection.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::timeout::TimeoutConfig;

/// Storefront API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2025-07";

/// Where products come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Bundled data set.
    #[default]
    Static,
    /// Hosted Storefront API.
    Remote,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Static => "static",
            Backend::Remote => "remote",
        }
    }
}

/// The `[catalog]` configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CatalogConfig {
    pub backend: Backend,
    /// Simulated latency for the static backend, in milliseconds.
    pub static_latency_ms: u64,
    pub remote: RemoteConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Static,
            static_latency_ms: 0,
            remote: RemoteConfig::default(),
        }
    }
}

/// The `[catalog.remote]` configuration section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RemoteConfig {
    /// Store domain, e.g. `pinoypantry.myshopify.com`.
    pub store_domain: String,
    /// Public Storefront access token.
    pub storefront_token: String,
    pub api_version: String,
    /// Total request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Products fetched per listing query.
    pub page_size: u32,
    /// Collections fetched for the category list.
    pub collections_page_size: u32,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            store_domain: String::new(),
            storefront_token: String::new(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_ms: 10_000,
            page_size: 50,
            collections_page_size: 20,
        }
    }
}

impl RemoteConfig {
    /// Storefront GraphQL endpoint.
    pub fn endpoint(&self) -> String {
        let domain = self
            .store_domain
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/');
        format!("https://{}/api/{}/graphql.json", domain, self.api_version)
    }

    pub fn timeout(&self) -> TimeoutConfig {
        TimeoutConfig::from_millis(self.timeout_ms)
    }

    /// Check that the remote backend can be reached at all.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.store_domain.trim().is_empty() {
            return Err(CatalogError::Config(
                "remote catalog requires a store domain".to_string(),
            ));
        }
        if self.storefront_token.trim().is_empty() {
            return Err(CatalogError::Config(
                "remote catalog requires a storefront access token".to_string(),
            ));
        }
        if self.api_version.trim().is_empty() {
            return Err(CatalogError::Config("api version must not be empty".to_string()));
        }
        Ok(())
    }
}

impl CatalogConfig {
    /// Apply `PANTRY_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// `PANTRY_USE_MOCK_DATA` selects the backend (`true` means static);
    /// the `PANTRY_SHOPIFY_*` variables fill the remote settings.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("PANTRY_USE_MOCK_DATA") {
            match value.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => self.backend = Backend::Static,
                "false" | "0" | "no" => self.backend = Backend::Remote,
                other => tracing::warn!(value = other, "ignoring unrecognised PANTRY_USE_MOCK_DATA"),
            }
        }
        if let Some(domain) = lookup("PANTRY_SHOPIFY_STORE_DOMAIN") {
            self.remote.store_domain = domain;
        }
        if let Some(token) = lookup("PANTRY_SHOPIFY_STOREFRONT_TOKEN") {
            self.remote.storefront_token = token;
        }
        if let Some(version) = lookup("PANTRY_SHOPIFY_API_VERSION") {
            self.remote.api_version = version;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.backend, Backend::Static);
        assert_eq!(config.remote.api_version, "2025-07");
        assert_eq!(config.remote.page_size, 50);
    }

    #[test]
    fn test_endpoint() {
        let remote = RemoteConfig {
            store_domain: "https://pinoypantry.myshopify.com/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            remote.endpoint(),
            "https://pinoypantry.myshopify.com/api/2025-07/graphql.json"
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PANTRY_USE_MOCK_DATA", "false"),
            ("PANTRY_SHOPIFY_STORE_DOMAIN", "shop.example.com"),
            ("PANTRY_SHOPIFY_STOREFRONT_TOKEN", "tok"),
        ]
        .into_iter()
        .collect();

        let mut config = CatalogConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend, Backend::Remote);
        assert_eq!(config.remote.store_domain, "shop.example.com");
        assert_eq!(config.remote.storefront_token, "tok");
        assert_eq!(config.remote.api_version, "2025-07");
        assert!(config.remote.validate().is_ok());
    }

    #[test]
    fn test_remote_requires_credentials() {
        let err = RemoteConfig::default().validate().unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_partial_toml() {
        let config: CatalogConfig = toml::from_str(
            r#"
            backend = "remote"

            [remote]
            store_domain = "shop.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend, Backend::Remote);
        assert_eq!(config.remote.timeout_ms, 10_000);
    }
}
