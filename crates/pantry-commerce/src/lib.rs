//! Storefront domain types and logic for PinoyPantry.
//!
//! This crate provides the core of the storefront, independent of how it is
//! presented or where products come from:
//!
//! - **Catalog**: Products, categories, filters, and the [`ProductSource`](catalog::ProductSource) trait
//! - **Cart**: Shared cart store with derived totals and change notification
//! - **Search**: Debounced search suggestions
//! - **Checkout**: Shipping/payment form validation and order placement
//! - **Routes**: Navigation targets for the presentation layer
//!
//! # Example
//!
//! ```rust
//! use pantry_commerce::prelude::*;
//!
//! let store = CartStore::new(ShippingPolicy::standard(Currency::USD));
//! let corned_beef = NewLineItem::new(
//!     "corned-beef",
//!     "Premium Corned Beef 380g",
//!     Money::new(8999, Currency::USD),
//!     "/images/corned-beef.jpg",
//! );
//!
//! store.add_to_cart(corned_beef.clone());
//! store.add_to_cart(corned_beef);
//!
//! let totals = store.aggregate().unwrap();
//! assert_eq!(totals.subtotal.display(), "$179.98");
//! assert!(totals.qualifies_for_free_shipping);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;
pub mod routes;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        or_empty, Badge, Category, Product, ProductFilters, ProductSort, ProductSource,
        SortDirection, SortField, ALL_PRODUCTS_SLUG,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartAggregate, CartLineItem, CartStore, CartSubscription, NewLineItem,
        ShippingPolicy,
    };

    // Checkout
    pub use crate::checkout::{
        place_order, CheckoutError, CheckoutField, CheckoutForm, CheckoutProcessor,
        OrderConfirmation, OrderRequest, PaymentMethod, ShippingInfo, SimulatedCheckout,
    };

    // Routes
    pub use crate::routes::Route;

    // Search
    pub use crate::search::{
        SuggestionConfig, SuggestionPipeline, SuggestionState, SuggestionStatus,
    };
}
