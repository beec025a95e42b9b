//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Slug of the pseudo-category that lists every product.
pub const ALL_PRODUCTS_SLUG: &str = "all-products";

/// Icon used when a source has no icon of its own.
pub const DEFAULT_CATEGORY_ICON: &str = "\u{1f6cd}\u{fe0f}";

/// A product category (a collection, on the hosted platform).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display title.
    pub title: String,
    /// URL-friendly slug (collection handle).
    pub slug: String,
    /// Emoji icon for navigation.
    pub icon: String,
    /// Number of products in this category.
    pub item_count: u32,
    /// Category description.
    pub description: Option<String>,
}

impl Category {
    /// Create a category whose id is its slug.
    pub fn new(slug: impl Into<String>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: CategoryId::new(slug.clone()),
            title: title.into(),
            slug,
            icon: icon.into(),
            item_count: 0,
            description: None,
        }
    }

    /// Check if this is the all-products pseudo-category.
    pub fn is_all_products(&self) -> bool {
        self.slug == ALL_PRODUCTS_SLUG
    }

    pub fn with_item_count(mut self, count: u32) -> Self {
        self.item_count = count;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("canned-goods", "Canned Goods", "\u{1f96b}").with_item_count(120);
        assert_eq!(cat.id.as_str(), "canned-goods");
        assert_eq!(cat.item_count, 120);
        assert!(!cat.is_all_products());
    }

    #[test]
    fn test_all_products() {
        let cat = Category::new(ALL_PRODUCTS_SLUG, "All Products", "\u{1f6d2}");
        assert!(cat.is_all_products());
    }
}
