//! Storefront API documents and response shapes.

use pantry_commerce::catalog::{Category, Product, DEFAULT_CATEGORY_ICON};
use pantry_commerce::{Currency, Money};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;

use crate::error::CatalogError;

/// Rating shown for hosted products, which carry none of their own.
pub const DEFAULT_RATING: f32 = 4.5;

macro_rules! product_fields {
    () => {
        "id
          title
          description
          featuredImage { url }
          priceRange { minVariantPrice { amount currencyCode } }
          compareAtPriceRange { minVariantPrice { amount } }
          variants(first: 1) { edges { node { id availableForSale } } }
          tags"
    };
}

pub(crate) const PRODUCTS_QUERY: &str = concat!(
    "query GetProducts($first: Int!) {
  products(first: $first) {
    edges {
      node {
        ",
    product_fields!(),
    "
      }
    }
  }
}"
);

pub(crate) const SEARCH_QUERY: &str = concat!(
    "query SearchProducts($query: String!, $first: Int!) {
  products(first: $first, query: $query) {
    edges {
      node {
        ",
    product_fields!(),
    "
      }
    }
  }
}"
);

pub(crate) const COLLECTION_PRODUCTS_QUERY: &str = concat!(
    "query GetCollectionProducts($handle: String!, $first: Int!) {
  collection(handle: $handle) {
    products(first: $first) {
      edges {
        node {
          ",
    product_fields!(),
    "
        }
      }
    }
  }
}"
);

pub(crate) const PRODUCT_QUERY: &str = concat!(
    "query GetProduct($id: ID!) {
  product(id: $id) {
    ",
    product_fields!(),
    "
  }
}"
);

pub(crate) const COLLECTIONS_QUERY: &str = "query GetCollections($first: Int!) {
  collections(first: $first) {
    edges {
      node {
        id
        title
        handle
        description
        image { url }
        products(first: 1) { edges { node { id } } }
      }
    }
  }
}";

/// Build the Storefront search syntax for a free-text query: every
/// whitespace-separated word is matched as a wildcard against title or tag.
///
/// ```
/// use pantry_catalog::format_search_query;
/// assert_eq!(
///     format_search_query(" ube  jam "),
///     "title:*ube* OR tag:*ube* OR title:*jam* OR tag:*jam*"
/// );
/// ```
pub fn format_search_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| format!("title:*{word}* OR tag:*{word}*"))
        .collect::<Vec<_>>()
        .join(" OR ")
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

/// Decode a GraphQL response body, turning reported errors into
/// [`CatalogError::Graphql`].
pub(crate) fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    let response: GraphqlResponse<T> = serde_json::from_str(body)?;
    if !response.errors.is_empty() {
        return Err(CatalogError::Graphql(
            response.errors.into_iter().map(|e| e.message).collect(),
        ));
    }
    response
        .data
        .ok_or_else(|| CatalogError::Decode("response has no data".to_string()))
}

#[derive(Debug, Deserialize)]
pub(crate) struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    pub fn into_nodes(self) -> impl Iterator<Item = T> {
        self.edges.into_iter().map(|edge| edge.node)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsData {
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionProductsData {
    pub collection: Option<CollectionProducts>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionProducts {
    pub products: Connection<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductData {
    pub product: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsData {
    pub collections: Connection<CollectionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductNode {
    id: String,
    title: String,
    description: Option<String>,
    featured_image: Option<ImageNode>,
    price_range: Option<PriceRange>,
    compare_at_price_range: Option<PriceRange>,
    variants: Option<Connection<VariantNode>>,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ImageNode {
    url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceRange {
    min_variant_price: Option<MoneyNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MoneyNode {
    amount: String,
    currency_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VariantNode {
    #[serde(default)]
    available_for_sale: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CollectionNode {
    id: String,
    title: String,
    handle: String,
    description: Option<String>,
    products: Option<Connection<IgnoredAny>>,
}

impl ProductNode {
    /// Convert into a catalog product priced in `currency`.
    pub fn into_product(self, currency: Currency) -> Product {
        let price_node = self
            .price_range
            .and_then(|range| range.min_variant_price);

        if let Some(code) = price_node.as_ref().and_then(|p| p.currency_code.as_deref()) {
            if code != currency.code() {
                tracing::warn!(
                    product = %self.title,
                    store_currency = code,
                    catalog_currency = %currency,
                    "store currency differs from catalog currency"
                );
            }
        }

        let price = price_node
            .and_then(|p| Money::parse_decimal(&p.amount, currency))
            .unwrap_or_else(|| {
                tracing::warn!(product = %self.title, "product has no price data");
                Money::zero(currency)
            });

        let original_price = self
            .compare_at_price_range
            .and_then(|range| range.min_variant_price)
            .and_then(|p| Money::parse_decimal(&p.amount, currency))
            .filter(Money::is_positive);

        let in_stock = self
            .variants
            .and_then(|variants| variants.into_nodes().next())
            .map(|variant| variant.available_for_sale)
            .unwrap_or(false);

        let image = self.featured_image.map(|i| i.url).unwrap_or_default();

        let mut product = Product::new(self.id, self.title, price, image)
            .with_rating(DEFAULT_RATING)
            .with_stock(in_stock)
            .with_tags(self.tags);
        if let Some(original) = original_price {
            product = product.with_original_price(original);
        }
        if let Some(description) = self.description.filter(|d| !d.trim().is_empty()) {
            product = product.with_description(description);
        }
        product
    }
}

impl CollectionNode {
    pub fn into_category(self) -> Category {
        let item_count = self
            .products
            .map(|products| products.edges.len() as u32)
            .unwrap_or(0);

        let mut category = Category::new(self.handle, self.title, DEFAULT_CATEGORY_ICON)
            .with_item_count(item_count);
        category.id = self.id.into();
        if let Some(description) = self.description.filter(|d| !d.trim().is_empty()) {
            category = category.with_description(description);
        }
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCTS_BODY: &str = r#"{
      "data": {
        "products": {
          "edges": [
            {
              "node": {
                "id": "gid://shopify/Product/1",
                "title": "Banana Ketchup 320g",
                "description": "Sweet and tangy",
                "featuredImage": { "url": "https://cdn.example.com/ketchup.jpg" },
                "priceRange": { "minVariantPrice": { "amount": "45.0", "currencyCode": "USD" } },
                "compareAtPriceRange": { "minVariantPrice": { "amount": "0.0" } },
                "variants": { "edges": [ { "node": { "id": "v1", "availableForSale": true } } ] },
                "tags": ["condiments", "bestseller"]
              }
            },
            {
              "node": {
                "id": "gid://shopify/Product/2",
                "title": "Mystery Box",
                "description": "",
                "featuredImage": null,
                "priceRange": null,
                "compareAtPriceRange": { "minVariantPrice": { "amount": "120.00" } },
                "variants": { "edges": [] },
                "tags": []
              }
            }
          ]
        }
      }
    }"#;

    #[test]
    fn test_product_mapping() {
        let data: ProductsData = decode_response(PRODUCTS_BODY).unwrap();
        let products: Vec<Product> = data
            .products
            .into_nodes()
            .map(|node| node.into_product(Currency::USD))
            .collect();

        let ketchup = &products[0];
        assert_eq!(ketchup.id.as_str(), "gid://shopify/Product/1");
        assert_eq!(ketchup.price.amount_cents, 4500);
        assert!(ketchup.original_price.is_none());
        assert_eq!(ketchup.in_stock, Some(true));
        assert_eq!(ketchup.rating, Some(DEFAULT_RATING));
        assert_eq!(ketchup.tags, vec!["condiments", "bestseller"]);

        let mystery = &products[1];
        assert!(mystery.price.is_zero());
        assert_eq!(mystery.original_price.unwrap().amount_cents, 12000);
        assert_eq!(mystery.in_stock, Some(false));
        assert!(mystery.description.is_none());
        assert_eq!(mystery.image, "");
    }

    #[test]
    fn test_collection_mapping() {
        let body = r#"{
          "data": {
            "collections": {
              "edges": [
                {
                  "node": {
                    "id": "gid://shopify/Collection/9",
                    "title": "Sweets",
                    "handle": "sweets",
                    "description": "Candies",
                    "image": null,
                    "products": { "edges": [ { "node": { "id": "p" } } ] }
                  }
                }
              ]
            }
          }
        }"#;
        let data: CollectionsData = decode_response(body).unwrap();
        let categories: Vec<Category> = data
            .collections
            .into_nodes()
            .map(CollectionNode::into_category)
            .collect();

        assert_eq!(categories[0].slug, "sweets");
        assert_eq!(categories[0].id.as_str(), "gid://shopify/Collection/9");
        assert_eq!(categories[0].icon, DEFAULT_CATEGORY_ICON);
        assert_eq!(categories[0].item_count, 1);
    }

    #[test]
    fn test_graphql_errors() {
        let body = r#"{ "errors": [ { "message": "Throttled" }, { "message": "Bad field" } ] }"#;
        let err = decode_response::<ProductsData>(body).unwrap_err();
        match err {
            CatalogError::Graphql(messages) => assert_eq!(messages, vec!["Throttled", "Bad field"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_collection() {
        let data: CollectionProductsData = decode_response(r#"{ "data": { "collection": null } }"#).unwrap();
        assert!(data.collection.is_none());
    }

    #[test]
    fn test_search_query_format() {
        assert_eq!(format_search_query("adobo"), "title:*adobo* OR tag:*adobo*");
        assert_eq!(format_search_query("   "), "");
    }

    #[test]
    fn test_documents_embed_fields() {
        for document in [PRODUCTS_QUERY, SEARCH_QUERY, COLLECTION_PRODUCTS_QUERY, PRODUCT_QUERY] {
            assert!(document.contains("compareAtPriceRange"));
            assert!(document.contains("availableForSale"));
        }
    }
}
