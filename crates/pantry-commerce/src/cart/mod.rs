//! Shopping cart module.
//!
//! Contains the cart and its line items, derived totals under a shipping
//! policy, and the shared [`CartStore`] handle.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartLineItem, NewLineItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartAggregate, ShippingPolicy};
pub use store::{CartStore, CartSubscription};
