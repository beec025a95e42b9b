//! Hosted catalog over the Storefront GraphQL API.

use async_trait::async_trait;
use pantry_commerce::catalog::{Category, Product, ProductSource, ALL_PRODUCTS_SLUG};
use pantry_commerce::{Currency, ProductId};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::RemoteConfig;
use crate::error::CatalogError;
use crate::storefront::{
    decode_response, format_search_query, CollectionNode, CollectionProductsData,
    CollectionsData, ProductData, ProductsData, COLLECTIONS_QUERY, COLLECTION_PRODUCTS_QUERY,
    PRODUCTS_QUERY, PRODUCT_QUERY, SEARCH_QUERY,
};

/// Products shown on the home page.
const FEATURED_COUNT: usize = 6;

const TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// HTTP client for Storefront API GraphQL requests.
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl StorefrontClient {
    /// Create a client from the remote settings.
    pub fn new(config: &RemoteConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let timeout = config.timeout();
        let http = Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()
            .map_err(|e| CatalogError::Config(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint(),
            token: config.storefront_token.trim().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST a GraphQL document and decode its `data`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: serde_json::Value,
    ) -> Result<T, CatalogError> {
        let body = json!({ "query": document, "variables": variables });

        let response = self
            .http
            .post(&self.endpoint)
            .header(TOKEN_HEADER, &self.token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        let text = response.text().await?;
        decode_response(&text)
    }
}

/// Product source backed by a hosted store.
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    client: StorefrontClient,
    currency: Currency,
    page_size: u32,
    collections_page_size: u32,
}

impl RemoteCatalog {
    pub fn new(config: &RemoteConfig, currency: Currency) -> Result<Self, CatalogError> {
        Ok(Self {
            client: StorefrontClient::new(config)?,
            currency,
            page_size: config.page_size.max(1),
            collections_page_size: config.collections_page_size.max(1),
        })
    }

    pub fn client(&self) -> &StorefrontClient {
        &self.client
    }

    async fn products(&self, first: u32) -> Result<Vec<Product>, CatalogError> {
        let data: ProductsData = self
            .client
            .query(PRODUCTS_QUERY, json!({ "first": first }))
            .await?;
        Ok(self.map_products(data.products.into_nodes()))
    }

    fn map_products(
        &self,
        nodes: impl Iterator<Item = crate::storefront::ProductNode>,
    ) -> Vec<Product> {
        nodes.map(|node| node.into_product(self.currency)).collect()
    }
}

#[async_trait]
impl ProductSource for RemoteCatalog {
    type Error = CatalogError;

    async fn list_featured(&self) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.products(FEATURED_COUNT as u32).await?;
        products.truncate(FEATURED_COUNT);
        Ok(products)
    }

    async fn list_by_category(&self, slug: &str) -> Result<Vec<Product>, CatalogError> {
        if slug == ALL_PRODUCTS_SLUG {
            return self.products(self.page_size).await;
        }

        let data: CollectionProductsData = self
            .client
            .query(
                COLLECTION_PRODUCTS_QUERY,
                json!({ "handle": slug, "first": self.page_size }),
            )
            .await?;

        match data.collection {
            Some(collection) => Ok(self.map_products(collection.products.into_nodes())),
            None => {
                tracing::debug!(handle = slug, "collection not found");
                Ok(Vec::new())
            }
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Product>, CatalogError> {
        let formatted = format_search_query(query);
        if formatted.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(query, formatted = %formatted, "storefront search");

        let data: ProductsData = self
            .client
            .query(
                SEARCH_QUERY,
                json!({ "query": formatted, "first": self.page_size }),
            )
            .await?;
        let products = self.map_products(data.products.into_nodes());
        tracing::debug!(query, found = products.len(), "storefront search finished");
        Ok(products)
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let data: CollectionsData = self
            .client
            .query(
                COLLECTIONS_QUERY,
                json!({ "first": self.collections_page_size }),
            )
            .await?;
        Ok(data
            .collections
            .into_nodes()
            .map(CollectionNode::into_category)
            .collect())
    }

    async fn product_by_id(&self, id: &ProductId) -> Result<Option<Product>, CatalogError> {
        let data: ProductData = self
            .client
            .query(PRODUCT_QUERY, json!({ "id": id.as_str() }))
            .await?;
        Ok(data.product.map(|node| node.into_product(self.currency)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RemoteConfig {
        RemoteConfig {
            store_domain: "pinoypantry.myshopify.com".to_string(),
            storefront_token: " public-token ".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_endpoint() {
        let client = StorefrontClient::new(&config()).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://pinoypantry.myshopify.com/api/2025-07/graphql.json"
        );
        assert_eq!(client.token, "public-token");
    }

    #[test]
    fn test_missing_credentials() {
        let err = RemoteCatalog::new(&RemoteConfig::default(), Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[tokio::test]
    async fn test_blank_search_skips_request() {
        let catalog = RemoteCatalog::new(&config(), Currency::USD).unwrap();
        assert!(catalog.search("   ").await.unwrap().is_empty());
    }
}
