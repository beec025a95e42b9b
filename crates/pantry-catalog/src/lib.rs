//! Product sources for PinoyPantry.
//!
//! Two implementations of [`ProductSource`](pantry_commerce::catalog::ProductSource):
//! the bundled data set ([`StaticCatalog`]) and a hosted store reached over the
//! Storefront GraphQL API ([`RemoteCatalog`]). [`Catalog`] picks one from
//! [`CatalogConfig`] at startup.
//!
//! # Example
//!
//! ```rust
//! use pantry_catalog::{Catalog, CatalogConfig};
//! use pantry_commerce::catalog::ProductSource;
//! use pantry_commerce::Currency;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), pantry_catalog::CatalogError> {
//! let catalog = Catalog::from_config(&CatalogConfig::default(), Currency::USD)?;
//! let noodles = catalog.search("pancit").await?;
//! assert_eq!(noodles.len(), 3);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod config;
mod error;
mod remote;
mod static_catalog;
mod static_data;
mod storefront;
mod timeout;

pub use catalog::Catalog;
pub use config::{Backend, CatalogConfig, RemoteConfig, DEFAULT_API_VERSION};
pub use error::CatalogError;
pub use remote::{RemoteCatalog, StorefrontClient};
pub use static_catalog::StaticCatalog;
pub use storefront::{format_search_query, DEFAULT_RATING};
pub use timeout::TimeoutConfig;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Backend, Catalog, CatalogConfig, CatalogError, RemoteCatalog, StaticCatalog};
}
