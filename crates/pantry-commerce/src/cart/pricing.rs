//! Cart totals and the shipping policy.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat-fee shipping, waived at or above a subtotal threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotal at which shipping becomes free.
    pub free_threshold: Money,
    /// Fee charged below the threshold.
    pub flat_fee: Money,
}

impl ShippingPolicy {
    /// Create a policy; both amounts must share a currency.
    pub fn new(free_threshold: Money, flat_fee: Money) -> Result<Self, CommerceError> {
        if free_threshold.currency != flat_fee.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: free_threshold.currency.code().to_string(),
                got: flat_fee.currency.code().to_string(),
            });
        }
        if free_threshold.is_negative() || flat_fee.is_negative() {
            return Err(CommerceError::ValidationError(
                "shipping amounts must not be negative".to_string(),
            ));
        }
        Ok(Self {
            free_threshold,
            flat_fee,
        })
    }

    /// Free shipping from 100.00, otherwise 10.00.
    pub fn standard(currency: Currency) -> Self {
        Self {
            free_threshold: Money::from_decimal(100.0, currency),
            flat_fee: Money::from_decimal(10.0, currency),
        }
    }

    /// Build from decimal amounts.
    pub fn from_decimal(threshold: f64, fee: f64, currency: Currency) -> Result<Self, CommerceError> {
        Self::new(
            Money::from_decimal(threshold, currency),
            Money::from_decimal(fee, currency),
        )
    }

    /// Currency the policy is expressed in.
    pub fn currency(&self) -> Currency {
        self.free_threshold.currency
    }

    /// Check if a subtotal qualifies for free shipping.
    pub fn qualifies(&self, subtotal: &Money) -> bool {
        subtotal.amount_cents >= self.free_threshold.amount_cents
    }

    /// Shipping charged for a subtotal.
    pub fn shipping_for(&self, subtotal: &Money) -> Money {
        if self.qualifies(subtotal) {
            Money::zero(self.currency())
        } else {
            self.flat_fee
        }
    }

    /// How much more must be spent to reach free shipping.
    pub fn remaining_for_free(&self, subtotal: &Money) -> Money {
        self.free_threshold.saturating_remaining(subtotal)
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self::standard(Currency::default())
    }
}

/// Values derived from a cart's line items; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartAggregate {
    /// Sum of price × quantity.
    pub subtotal: Money,
    /// Sum of quantities.
    pub item_count: u64,
    /// Number of distinct line items.
    pub unique_items: usize,
    /// Shipping charge.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
    /// Amount still needed for free shipping (zero once qualified).
    pub remaining_for_free_shipping: Money,
    /// Whether shipping is waived.
    pub qualifies_for_free_shipping: bool,
}

impl CartAggregate {
    /// Compute totals for a cart.
    pub fn compute(cart: &Cart, policy: &ShippingPolicy) -> Result<Self, CommerceError> {
        if cart.currency != policy.currency() {
            return Err(CommerceError::CurrencyMismatch {
                expected: cart.currency.code().to_string(),
                got: policy.currency().code().to_string(),
            });
        }

        let subtotal = cart.subtotal()?;
        let shipping = policy.shipping_for(&subtotal);
        let total = subtotal.try_add(&shipping).ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            item_count: cart.item_count(),
            unique_items: cart.unique_item_count(),
            shipping,
            total,
            remaining_for_free_shipping: policy.remaining_for_free(&subtotal),
            qualifies_for_free_shipping: policy.qualifies(&subtotal),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::NewLineItem;
    use crate::ids::ProductId;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    #[test]
    fn test_aggregate_below_threshold() {
        let mut cart = Cart::new(Currency::USD);
        cart.add_item(NewLineItem::new("a", "A", usd(1000), ""));
        cart.add_item(NewLineItem::new("a", "A", usd(1000), ""));
        cart.add_item(NewLineItem::new("b", "B", usd(500), ""));
        cart.update_quantity(&ProductId::new("b"), 2);

        let agg = cart.aggregate(&ShippingPolicy::standard(Currency::USD)).unwrap();
        assert_eq!(agg.subtotal, usd(3500));
        assert_eq!(agg.shipping, usd(1000));
        assert_eq!(agg.total, usd(4500));
        assert_eq!(agg.item_count, 5);
        assert_eq!(agg.unique_items, 2);
        assert_eq!(agg.remaining_for_free_shipping, usd(6500));
        assert!(!agg.qualifies_for_free_shipping);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let policy = ShippingPolicy::standard(Currency::USD);
        assert!(policy.qualifies(&usd(10000)));
        assert!(policy.shipping_for(&usd(10000)).is_zero());
        assert_eq!(policy.shipping_for(&usd(9999)), usd(1000));
        assert!(policy.remaining_for_free(&usd(15000)).is_zero());
    }

    #[test]
    fn test_alternate_policy() {
        let policy = ShippingPolicy::from_decimal(1000.0, 100.0, Currency::PHP).unwrap();
        let mut cart = Cart::new(Currency::PHP);
        cart.add_item(NewLineItem::new(
            "coconut-water-6pack",
            "Coconut Water 330ml - 6 Pack",
            Money::from_decimal(180.0, Currency::PHP),
            "",
        ));
        let agg = cart.aggregate(&policy).unwrap();
        assert_eq!(agg.shipping.amount_cents, 10000);
        assert_eq!(agg.total.amount_cents, 28000);
    }

    #[test]
    fn test_policy_validation() {
        assert!(ShippingPolicy::new(usd(100), Money::new(10, Currency::PHP)).is_err());
        assert!(ShippingPolicy::new(usd(100), usd(-1)).is_err());
    }

    #[test]
    fn test_policy_currency_must_match_cart() {
        let cart = Cart::new(Currency::USD);
        let policy = ShippingPolicy::standard(Currency::PHP);
        assert!(matches!(
            cart.aggregate(&policy),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
