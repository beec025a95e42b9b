//! The product source chosen at startup.

use std::time::Duration;

use async_trait::async_trait;
use pantry_commerce::catalog::{Category, Product, ProductSource};
use pantry_commerce::{Currency, ProductId};

use crate::config::{Backend, CatalogConfig};
use crate::error::CatalogError;
use crate::remote::RemoteCatalog;
use crate::static_catalog::StaticCatalog;

/// Either backend behind one type.
#[derive(Debug, Clone)]
pub enum Catalog {
    Static(StaticCatalog),
    Remote(RemoteCatalog),
}

impl Catalog {
    /// Build the configured backend.
    pub fn from_config(config: &CatalogConfig, currency: Currency) -> Result<Self, CatalogError> {
        let catalog = match config.backend {
            Backend::Static => Catalog::Static(
                StaticCatalog::new(currency)
                    .with_latency(Duration::from_millis(config.static_latency_ms)),
            ),
            Backend::Remote => Catalog::Remote(RemoteCatalog::new(&config.remote, currency)?),
        };
        tracing::info!(backend = catalog.backend().as_str(), %currency, "catalog ready");
        Ok(catalog)
    }

    pub fn backend(&self) -> Backend {
        match self {
            Catalog::Static(_) => Backend::Static,
            Catalog::Remote(_) => Backend::Remote,
        }
    }
}

#[async_trait]
impl ProductSource for Catalog {
    type Error = CatalogError;

    async fn list_featured(&self) -> Result<Vec<Product>, CatalogError> {
        match self {
            Catalog::Static(c) => c.list_featured().await,
            Catalog::Remote(c) => c.list_featured().await,
        }
    }

    async fn list_by_category(&self, slug: &str) -> Result<Vec<Product>, CatalogError> {
        match self {
            Catalog::Static(c) => c.list_by_category(slug).await,
            Catalog::Remote(c) => c.list_by_category(slug).await,
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        match self {
            Catalog::Static(c) => c.search(query).await,
            Catalog::Remote(c) => c.search(query).await,
        }
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        match self {
            Catalog::Static(c) => c.list_categories().await,
            Catalog::Remote(c) => c.list_categories().await,
        }
    }

    async fn product_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        match self {
            Catalog::Static(c) => c.product_by_id(id).await,
            Catalog::Remote(c) => c.product_by_id(id).await,
        }
    }
}
