//! Listing filters and sort options, applied locally for every product source.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Filters for a product listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductFilters {
    /// Category slug; `all-products` means no category restriction.
    pub category: Option<CategoryId>,
    /// Inclusive lower price bound.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound.
    pub max_price: Option<Money>,
    /// Only show in-stock items.
    pub in_stock: bool,
    /// Case-insensitive text on name or description.
    pub search: Option<String>,
    /// Match any of these tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ProductFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, slug: impl Into<CategoryId>) -> Self {
        self.category = Some(slug.into());
        self
    }

    pub fn price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn in_stock_only(mut self) -> Self {
        self.in_stock = true;
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.trim().is_empty() {
            self.search = Some(text);
        }
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Check whether a product passes every filter except category.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min) = &self.min_price {
            if product.price.compare(min).map(Ordering::is_lt).unwrap_or(true) {
                return false;
            }
        }

        if let Some(max) = &self.max_price {
            if product.price.compare(max).map(Ordering::is_gt).unwrap_or(true) {
                return false;
            }
        }

        if self.in_stock && product.in_stock != Some(true) {
            return false;
        }

        if let Some(text) = &self.search {
            let needle = text.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product
                .description
                .as_deref()
                .map(|d| d.to_lowercase().contains(&needle))
                .unwrap_or(false);
            if !in_name && !in_description {
                return false;
            }
        }

        if !self.tags.is_empty() && !product.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }

        true
    }
}

/// Field to sort a listing by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Price,
    Name,
    Rating,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// A sort specification for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl ProductSort {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Parse a search-results sort parameter.
    ///
    /// `featured` (and anything unknown) keeps source order, so it maps to `None`.
    pub fn from_param(param: &str) -> Option<Self> {
        match param {
            "price-asc" => Some(Self::asc(SortField::Price)),
            "price-desc" => Some(Self::desc(SortField::Price)),
            "name-asc" => Some(Self::asc(SortField::Name)),
            "name-desc" => Some(Self::desc(SortField::Name)),
            "rating" | "rating-desc" => Some(Self::desc(SortField::Rating)),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match (self.field, self.direction) {
            (SortField::Price, SortDirection::Asc) => "Price: Low to High",
            (SortField::Price, SortDirection::Desc) => "Price: High to Low",
            (SortField::Name, SortDirection::Asc) => "Name: A-Z",
            (SortField::Name, SortDirection::Desc) => "Name: Z-A",
            (SortField::Rating, SortDirection::Asc) => "Rating: Low to High",
            (SortField::Rating, SortDirection::Desc) => "Highest Rated",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        let ordering = match self.field {
            SortField::Price => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortField::Rating => a
                .rating
                .unwrap_or(0.0)
                .total_cmp(&b.rating.unwrap_or(0.0)),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Apply filters (other than category) and an optional sort. The sort is
/// stable, so equal keys keep source order.
pub fn apply_filters_and_sort(
    products: Vec<Product>,
    filters: &ProductFilters,
    sort: Option<ProductSort>,
) -> Vec<Product> {
    let mut products: Vec<Product> = products.into_iter().filter(|p| filters.matches(p)).collect();
    if let Some(sort) = sort {
        products.sort_by(|a, b| sort.compare(a, b));
    }
    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(id: &str, name: &str, cents: i64) -> Product {
        Product::new(id, name, Money::new(cents, Currency::USD), "")
    }

    fn sample() -> Vec<Product> {
        vec![
            product("banana-ketchup", "Banana Ketchup 320g", 4500)
                .with_stock(true)
                .with_rating(4.8)
                .with_tags(["condiment"]),
            product("fish-sauce", "Fish Sauce 750ml", 6000)
                .with_stock(false)
                .with_rating(4.4),
            product("yema-candy", "Yema Candy Box 200g", 7500)
                .with_stock(true)
                .with_rating(4.6)
                .with_description("Sweet custard candy"),
        ]
    }

    #[test]
    fn test_price_range() {
        let filters = ProductFilters::new().price_range(
            Some(Money::new(5000, Currency::USD)),
            Some(Money::new(7500, Currency::USD)),
        );
        let ids: Vec<_> = apply_filters_and_sort(sample(), &filters, None)
            .into_iter()
            .map(|p| p.id.into_inner())
            .collect();
        assert_eq!(ids, vec!["fish-sauce", "yema-candy"]);
    }

    #[test]
    fn test_in_stock_and_search() {
        let filters = ProductFilters::new().in_stock_only().search("custard");
        let results = apply_filters_and_sort(sample(), &filters, None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.as_str(), "yema-candy");
    }

    #[test]
    fn test_tags_match_any() {
        let filters = ProductFilters::new().tag("condiment").tag("other");
        let results = apply_filters_and_sort(sample(), &filters, None);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_sorting() {
        let filters = ProductFilters::new();
        let by_price = apply_filters_and_sort(sample(), &filters, ProductSort::from_param("price-desc"));
        assert_eq!(by_price[0].id.as_str(), "yema-candy");

        let by_name = apply_filters_and_sort(sample(), &filters, ProductSort::from_param("name-asc"));
        assert_eq!(by_name[0].id.as_str(), "banana-ketchup");

        let by_rating = apply_filters_and_sort(sample(), &filters, ProductSort::from_param("rating"));
        assert_eq!(by_rating[2].id.as_str(), "fish-sauce");
    }

    #[test]
    fn test_featured_keeps_source_order() {
        assert!(ProductSort::from_param("featured").is_none());
        let results = apply_filters_and_sort(sample(), &ProductFilters::new(), None);
        assert_eq!(results[0].id.as_str(), "banana-ketchup");
        assert_eq!(results.len(), 3);
    }
}
