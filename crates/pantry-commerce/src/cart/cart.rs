//! Cart and line item types.

use crate::cart::{CartAggregate, ShippingPolicy};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item. Increments past it are clamped.
pub const MAX_QUANTITY_PER_ITEM: u32 = 9999;

/// What an add-to-cart action carries: everything but the quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
}

impl NewLineItem {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }
}

impl From<&Product> for NewLineItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
        }
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Product identifier, unique within the cart.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity, never below 1.
    pub quantity: u32,
    /// Image URL reference.
    pub image: String,
}

impl CartLineItem {
    fn from_new(item: NewLineItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            quantity: 1,
            image: item.image,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Option<Money> {
        self.price.try_multiply(i64::from(self.quantity))
    }
}

/// A shopping cart: the ordered list of line items for one session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the cart, in the order they were first added.
    pub items: Vec<CartLineItem>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of an item.
    ///
    /// An id already in the cart has its quantity incremented instead of being
    /// duplicated. Returns whether the cart changed.
    pub fn add_item(&mut self, item: NewLineItem) -> bool {
        if item.price.currency != self.currency {
            tracing::warn!(
                id = %item.id,
                expected = %self.currency,
                got = %item.price.currency,
                "ignoring item priced in a different currency"
            );
            return false;
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            if existing.quantity >= MAX_QUANTITY_PER_ITEM {
                return false;
            }
            existing.quantity += 1;
            return true;
        }

        self.items.push(CartLineItem::from_new(item));
        true
    }

    /// Adjust a line item's quantity by `delta`, clamped to
    /// `1..=MAX_QUANTITY_PER_ITEM`.
    ///
    /// Unknown ids are ignored. Returns whether the quantity changed.
    pub fn update_quantity(&mut self, id: &ProductId, delta: i32) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return false;
        };

        let target = (i64::from(item.quantity) + i64::from(delta))
            .clamp(1, i64::from(MAX_QUANTITY_PER_ITEM));
        let target = u32::try_from(target).unwrap_or(MAX_QUANTITY_PER_ITEM);

        if target == item.quantity {
            return false;
        }
        item.quantity = target;
        true
    }

    /// Remove an item from the cart. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Take away quantities that have been ordered. A line is dropped only
    /// once its quantity reaches zero; lines added since are kept.
    pub fn remove_ordered(&mut self, ordered: &[CartLineItem]) -> bool {
        let mut changed = false;
        for line in ordered {
            let Some(pos) = self.items.iter().position(|i| i.id == line.id) else {
                continue;
            };
            let item = &mut self.items[pos];
            if item.quantity > line.quantity {
                item.quantity -= line.quantity;
            } else {
                self.items.remove(pos);
            }
            changed = true;
        }
        changed
    }

    /// Remove all items. Returns whether the cart had any.
    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by id.
    pub fn get_item(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Sum of price × quantity over all line items.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.items
            .iter()
            .try_fold(Money::zero(self.currency), |acc, item| {
                item.line_total().and_then(|line| acc.try_add(&line))
            })
            .ok_or(CommerceError::Overflow)
    }

    /// Compute the derived totals under a shipping policy.
    pub fn aggregate(&self, policy: &ShippingPolicy) -> Result<CartAggregate, CommerceError> {
        CartAggregate::compute(self, policy)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64) -> NewLineItem {
        NewLineItem::new(id, id.to_uppercase(), Money::new(cents, Currency::USD), "")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new(Currency::USD);
        assert!(cart.add_item(item("corned-beef", 8999)));
        assert!(cart.add_item(item("corned-beef", 8999)));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_floor() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(item("chips", 4500));
        let id = ProductId::new("chips");

        assert!(cart.update_quantity(&id, 3));
        assert_eq!(cart.item_count(), 4);

        for _ in 0..10 {
            cart.update_quantity(&id, -1);
        }
        assert_eq!(cart.get_item(&id).unwrap().quantity, 1);
        assert!(!cart.update_quantity(&id, -1));
        assert!(!cart.update_quantity(&id, i32::MIN));
    }

    #[test]
    fn test_update_quantity_ceiling() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(item("chips", 4500));
        let id = ProductId::new("chips");

        cart.update_quantity(&id, i32::MAX);
        assert_eq!(cart.get_item(&id).unwrap().quantity, MAX_QUANTITY_PER_ITEM);
        assert!(!cart.add_item(item("chips", 4500)));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(item("chips", 4500));
        let before = cart.clone();

        assert!(!cart.update_quantity(&ProductId::new("missing"), 1));
        assert!(!cart.remove_item(&ProductId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(item("a", 100));
        cart.add_item(item("b", 200));
        cart.add_item(item("c", 300));

        assert!(cart.remove_item(&ProductId::new("b")));
        assert_eq!(cart.unique_item_count(), 2);
        assert!(cart.get_item(&ProductId::new("b")).is_none());
        assert!(!cart.remove_item(&ProductId::new("b")));
    }

    #[test]
    fn test_remove_ordered_keeps_newer_quantities() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(item("a", 100));
        cart.add_item(item("b", 200));
        let ordered = cart.items.clone();

        cart.add_item(item("a", 100));
        cart.add_item(item("c", 300));

        assert!(cart.remove_ordered(&ordered));
        assert_eq!(cart.get_item(&ProductId::new("a")).unwrap().quantity, 1);
        assert!(cart.get_item(&ProductId::new("b")).is_none());
        assert_eq!(cart.get_item(&ProductId::new("c")).unwrap().quantity, 1);
        assert_eq!(cart.item_count(), 2);
        assert!(!cart.remove_ordered(&ordered[1..]));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(item("a", 100));
        assert!(cart.clear());
        assert_eq!(cart.item_count(), 0);
        assert!(!cart.clear());
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(item("a", 1000));
        cart.add_item(item("a", 1000));
        cart.add_item(item("b", 500));
        cart.update_quantity(&ProductId::new("b"), 2);

        assert_eq!(cart.subtotal().unwrap().amount_cents, 3500);
    }

    #[test]
    fn test_currency_mismatch_is_ignored() {
        let mut cart = Cart::new(Currency::USD);
        let php = NewLineItem::new("x", "X", Money::new(100, Currency::PHP), "");
        assert!(!cart.add_item(php));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_product() {
        let product = Product::new("chips", "Chips", Money::new(4500, Currency::USD), "img.jpg");
        let new_item = NewLineItem::from(&product);
        assert_eq!(new_item.id.as_str(), "chips");
        assert_eq!(new_item.image, "img.jpg");
    }
}
