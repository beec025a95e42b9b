//! The product-source boundary.
//!
//! Storefront components never care whether products come from the bundled
//! data set or the hosted catalog; they only see this trait.

use async_trait::async_trait;
use std::fmt::Display;

use crate::catalog::{
    apply_filters_and_sort, Category, Product, ProductFilters, ProductSort, ALL_PRODUCTS_SLUG,
};
use crate::ids::ProductId;

/// A source of products and categories.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Error produced by this source.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Featured products for the home page.
    async fn list_featured(&self) -> Result<Vec<Product>, Self::Error>;

    /// Products in a category; `all-products` lists everything.
    async fn list_by_category(&self, slug: &str) -> Result<Vec<Product>, Self::Error>;

    /// Products matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<Product>, Self::Error>;

    /// All categories.
    async fn list_categories(&self) -> Result<Vec<Category>, Self::Error>;

    /// Look up a single category.
    async fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, Self::Error> {
        Ok(self
            .list_categories()
            .await?
            .into_iter()
            .find(|c| c.slug == slug))
    }

    /// Look up a single product.
    async fn product_by_id(&self, id: &ProductId) -> Result<Option<Product>, Self::Error> {
        Ok(self
            .list_by_category(ALL_PRODUCTS_SLUG)
            .await?
            .into_iter()
            .find(|p| &p.id == id))
    }

    /// Filtered, sorted listing. The category filter goes through
    /// `list_by_category`; the rest is applied locally.
    async fn list_products(
        &self,
        filters: &ProductFilters,
        sort: Option<ProductSort>,
    ) -> Result<Vec<Product>, Self::Error> {
        let slug = filters
            .category
            .as_ref()
            .map(|c| c.as_str())
            .unwrap_or(ALL_PRODUCTS_SLUG);
        let products = self.list_by_category(slug).await?;
        Ok(apply_filters_and_sort(products, filters, sort))
    }
}

/// Degrade a failed query to an empty result, logging the failure.
///
/// A failed listing is shown to shoppers exactly like an empty one.
pub fn or_empty<T, E: Display>(result: Result<Vec<T>, E>, operation: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(operation, error = %e, "product query failed, showing no results");
            Vec::new()
        }
    }
}
