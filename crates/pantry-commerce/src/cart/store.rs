//! Shared cart state.
//!
//! A [`CartStore`] is a cheap, cloneable handle to one cart. Every component
//! that needs the cart gets a clone of the handle; mutations made through any
//! clone are visible to all of them, and subscribers are woken after each
//! mutation that actually changed something.

use std::sync::Arc;

use tokio::sync::watch;

use crate::cart::{Cart, CartAggregate, CartLineItem, NewLineItem, ShippingPolicy};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Handle to the single cart of a storefront session.
#[derive(Debug, Clone)]
pub struct CartStore {
    state: Arc<watch::Sender<Cart>>,
    policy: ShippingPolicy,
}

impl CartStore {
    /// Create an empty cart priced in the policy's currency.
    pub fn new(policy: ShippingPolicy) -> Self {
        Self::with_cart(Cart::new(policy.currency()), policy)
    }

    /// Create a store seeded with an existing cart.
    pub fn with_cart(cart: Cart, policy: ShippingPolicy) -> Self {
        let (tx, _rx) = watch::channel(cart);
        Self {
            state: Arc::new(tx),
            policy,
        }
    }

    /// Shipping policy used for aggregates.
    pub fn policy(&self) -> &ShippingPolicy {
        &self.policy
    }

    /// Add one unit of a product, merging with an existing line item.
    pub fn add_to_cart(&self, item: impl Into<NewLineItem>) {
        let item = item.into();
        let id = item.id.clone();
        let changed = self.state.send_if_modified(|cart| cart.add_item(item));
        tracing::debug!(%id, quantity = self.quantity_of(&id), changed, "add_to_cart");
    }

    /// Change a line item's quantity by `delta`. The quantity never drops
    /// below 1; unknown ids are ignored.
    pub fn update_quantity(&self, id: &ProductId, delta: i32) {
        let changed = self
            .state
            .send_if_modified(|cart| cart.update_quantity(id, delta));
        tracing::debug!(%id, delta, quantity = self.quantity_of(id), changed, "update_quantity");
    }

    /// Remove a line item entirely.
    pub fn remove_item(&self, id: &ProductId) {
        let changed = self.state.send_if_modified(|cart| cart.remove_item(id));
        tracing::debug!(%id, changed, "remove_item");
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        let changed = self.state.send_if_modified(Cart::clear);
        tracing::debug!(changed, "clear_cart");
    }

    /// Remove the quantities of an order that went through, leaving anything
    /// added while it was processing.
    pub fn remove_ordered(&self, ordered: &[CartLineItem]) {
        let changed = self
            .state
            .send_if_modified(|cart| cart.remove_ordered(ordered));
        tracing::debug!(lines = ordered.len(), changed, "remove_ordered");
    }

    /// Sum of quantities across all line items.
    pub fn get_cart_count(&self) -> u64 {
        self.state.borrow().item_count()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    /// Derived totals for the current cart.
    pub fn aggregate(&self) -> Result<CartAggregate, CommerceError> {
        self.state.borrow().aggregate(&self.policy)
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    /// Copy of a single line item.
    pub fn line_item(&self, id: &ProductId) -> Option<CartLineItem> {
        self.state.borrow().get_item(id).cloned()
    }

    fn quantity_of(&self, id: &ProductId) -> u32 {
        self.state.borrow().get_item(id).map_or(0, |i| i.quantity)
    }

    /// Observe cart changes.
    pub fn subscribe(&self) -> CartSubscription {
        CartSubscription {
            rx: self.state.subscribe(),
            policy: self.policy,
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(ShippingPolicy::default())
    }
}

/// A subscriber to cart changes.
#[derive(Debug)]
pub struct CartSubscription {
    rx: watch::Receiver<Cart>,
    policy: ShippingPolicy,
}

impl CartSubscription {
    /// Wait for the next change. Returns `false` once every store handle has
    /// been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Check for an unseen change without waiting.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Current cart, marking it as seen.
    pub fn cart(&mut self) -> Cart {
        self.rx.borrow_and_update().clone()
    }

    /// Current aggregate, marking the cart as seen.
    pub fn aggregate(&mut self) -> Result<CartAggregate, CommerceError> {
        self.rx.borrow_and_update().aggregate(&self.policy)
    }
}
