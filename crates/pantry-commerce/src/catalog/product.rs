//! Product records as supplied by a product source.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Merchandising badge shown on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Badge {
    Bestseller,
    New,
    Sale,
    /// Any other free-form label.
    Other(String),
}

impl Badge {
    pub fn as_str(&self) -> &str {
        match self {
            Badge::Bestseller => "BESTSELLER",
            Badge::New => "NEW",
            Badge::Sale => "SALE",
            Badge::Other(label) => label,
        }
    }
}

impl From<String> for Badge {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "BESTSELLER" => Badge::Bestseller,
            "NEW" => Badge::New,
            "SALE" => Badge::Sale,
            _ => Badge::Other(s),
        }
    }
}

impl From<Badge> for String {
    fn from(badge: Badge) -> Self {
        badge.as_str().to_string()
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description for listings and search.
    pub description: Option<String>,
    /// Current selling price.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    pub original_price: Option<Money>,
    /// Image URL.
    pub image: String,
    /// Optional badge.
    pub badge: Option<Badge>,
    /// Average rating (0.0 - 5.0).
    pub rating: Option<f32>,
    /// Category slug this product belongs to.
    pub category: Option<CategoryId>,
    /// Availability, when the source knows it.
    pub in_stock: Option<bool>,
    /// Tags for filtering/search.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Create a product with just the required fields.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            original_price: None,
            image: image.into(),
            badge: None,
            rating: None,
            category: None,
            in_stock: None,
            tags: Vec::new(),
        }
    }

    /// Check if this product is on sale (has a higher original price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .and_then(|original| original.compare(&self.price))
            .map(|ord| ord.is_gt())
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        let original = self.original_price.filter(|_| self.is_on_sale())?;
        let savings = original.amount_cents - self.price.amount_cents;
        Some((savings as f64 / original.amount_cents as f64) * 100.0)
    }

    /// Unknown availability counts as available.
    pub fn is_available(&self) -> bool {
        self.in_stock.unwrap_or(true)
    }

    /// Case-insensitive match against name, description or category.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(needle_lower))
                .unwrap_or(false)
            || self
                .category
                .as_ref()
                .map(|c| c.as_str().to_lowercase().contains(needle_lower))
                .unwrap_or(false)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = Some(in_stock);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn beef() -> Product {
        Product::new(
            "premium-corned-beef",
            "Premium Corned Beef",
            Money::new(8999, Currency::USD),
            "https://img.example/beef.jpg",
        )
        .with_original_price(Money::new(12000, Currency::USD))
        .with_description("Premium quality corned beef 150g")
        .with_category("canned-goods")
    }

    #[test]
    fn test_sale_detection() {
        let product = beef();
        assert!(product.is_on_sale());
        let discount = product.discount_percentage().unwrap();
        assert!((discount - 25.01).abs() < 0.1);
    }

    #[test]
    fn test_not_on_sale_without_original() {
        let product = Product::new("chips", "Chips", Money::new(4500, Currency::USD), "");
        assert!(!product.is_on_sale());
        assert!(product.discount_percentage().is_none());
        assert!(product.is_available());
    }

    #[test]
    fn test_text_match() {
        let product = beef();
        assert!(product.matches_text("corned"));
        assert!(product.matches_text("150g"));
        assert!(product.matches_text("canned"));
        assert!(!product.matches_text("noodles"));
    }

    #[test]
    fn test_badge_parsing() {
        assert_eq!(Badge::from("bestseller".to_string()), Badge::Bestseller);
        assert_eq!(Badge::from("Limited".to_string()), Badge::Other("Limited".to_string()));
        assert_eq!(Badge::Sale.to_string(), "SALE");
    }
}
