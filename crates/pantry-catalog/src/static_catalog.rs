//! In-memory catalog backed by the bundled data set.

use std::time::Duration;

use async_trait::async_trait;
use pantry_commerce::catalog::{Category, Product, ProductSource, ALL_PRODUCTS_SLUG};
use pantry_commerce::{Currency, Money, ProductId};

use crate::error::CatalogError;
use crate::static_data::{SeedCategory, SeedProduct, CATEGORIES, FEATURED, PRODUCTS};

/// Product source that never leaves the process.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    featured: Vec<ProductId>,
    latency: Duration,
}

impl StaticCatalog {
    /// Load the bundled data set, pricing it in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            products: PRODUCTS.iter().map(|seed| seed_product(seed, currency)).collect(),
            categories: CATEGORIES.iter().map(seed_category).collect(),
            featured: FEATURED.iter().map(|id| ProductId::new(*id)).collect(),
            latency: Duration::ZERO,
        }
    }

    /// Build from explicit records.
    pub fn from_parts(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
            featured: Vec::new(),
            latency: Duration::ZERO,
        }
    }

    /// Delay every call, to mimic a network round trip.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn with_featured(mut self, ids: impl IntoIterator<Item = ProductId>) -> Self {
        self.featured = ids.into_iter().collect();
        self
    }

    /// Every product, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

fn seed_product(seed: &SeedProduct, currency: Currency) -> Product {
    let mut product = Product::new(
        seed.id,
        seed.name,
        Money::from_decimal(seed.price, currency),
        seed.image,
    )
    .with_rating(seed.rating)
    .with_category(seed.category)
    .with_stock(seed.in_stock);

    if let Some(original) = seed.original_price {
        product = product.with_original_price(Money::from_decimal(original, currency));
    }
    if let Some(badge) = seed.badge {
        product = product.with_badge(badge.to_string().into());
    }
    if let Some(description) = seed.description {
        product = product.with_description(description);
    }
    product
}

fn seed_category(seed: &SeedCategory) -> Category {
    Category::new(seed.slug, seed.title, seed.icon)
        .with_item_count(seed.item_count)
        .with_description(seed.description)
}

#[async_trait]
impl ProductSource for StaticCatalog {
    type Error = CatalogError;

    async fn list_featured(&self) -> Result<Vec<Product>, CatalogError> {
        self.simulate_latency().await;
        Ok(self
            .featured
            .iter()
            .filter_map(|id| self.products.iter().find(|p| &p.id == id))
            .cloned()
            .collect())
    }

    async fn list_by_category(&self, slug: &str) -> Result<Vec<Product>, CatalogError> {
        self.simulate_latency().await;
        if slug == ALL_PRODUCTS_SLUG {
            return Ok(self.products.clone());
        }
        Ok(self
            .products
            .iter()
            .filter(|p| p.category.as_ref().map(|c| c.as_str()) == Some(slug))
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        self.simulate_latency().await;
        let needle = query.trim().to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| p.matches_text(&needle))
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        self.simulate_latency().await;
        Ok(self.categories.clone())
    }

    async fn product_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        self.simulate_latency().await;
        Ok(self.products.iter().find(|p| &p.id == id).cloned())
    }
}
