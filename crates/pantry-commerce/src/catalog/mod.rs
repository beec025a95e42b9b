//! Product catalog module.
//!
//! Contains product and category records, listing filters, and the
//! `ProductSource` interface implemented by the static and remote catalogs.

mod category;
mod filter;
mod product;
mod source;

pub use category::{Category, ALL_PRODUCTS_SLUG, DEFAULT_CATEGORY_ICON};
pub use filter::{apply_filters_and_sort, ProductFilters, ProductSort, SortDirection, SortField};
pub use product::{Badge, Product};
pub use source::{or_empty, ProductSource};
