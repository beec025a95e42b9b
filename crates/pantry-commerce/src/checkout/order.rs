//! Placing orders.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{CartAggregate, CartLineItem, CartStore};
use crate::checkout::{CheckoutField, CheckoutForm, PaymentMethod, ShippingInfo};
use crate::error::CommerceError;
use crate::ids::OrderNumber;
use crate::money::Money;

/// Errors that block an order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Required inputs are blank or malformed.
    #[error("Please fill in all required fields: {}", join_labels(.0))]
    Validation(Vec<CheckoutField>),

    /// Nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,

    /// The checkout collaborator rejected or failed the order.
    #[error("Order processing failed: {0}")]
    Processor(String),

    /// Cart totals could not be computed.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}

fn join_labels(fields: &[CheckoutField]) -> String {
    fields
        .iter()
        .map(CheckoutField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the checkout collaborator receives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRequest {
    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,
    pub items: Vec<CartLineItem>,
    pub totals: CartAggregate,
}

/// What the customer sees after a successful order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    /// Amount charged, shipping included.
    pub total: Money,
    /// Where order updates are sent.
    pub email: String,
    pub item_count: u64,
    pub payment_method: PaymentMethod,
    /// Unix timestamp when the order was placed.
    pub placed_at: i64,
}

/// Accepts an order and hands back a confirmation.
#[async_trait]
pub trait CheckoutProcessor: Send + Sync {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, CheckoutError>;
}

const ORDER_NUMBER_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ORDER_NUMBER_LEN: usize = 9;

/// Stand-in processor: waits, then confirms with a random order number.
///
/// The wait is not cancellable once started.
#[derive(Debug, Clone)]
pub struct SimulatedCheckout {
    processing_delay: Duration,
    prefix: String,
}

impl SimulatedCheckout {
    pub fn new(processing_delay: Duration) -> Self {
        Self {
            processing_delay,
            prefix: "PN".to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Prefix followed by nine random base-36 characters.
    pub fn generate_order_number(&self) -> OrderNumber {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..ORDER_NUMBER_LEN)
            .map(|_| char::from(ORDER_NUMBER_ALPHABET[rng.gen_range(0..ORDER_NUMBER_ALPHABET.len())]))
            .collect();
        OrderNumber::new(format!("{}{}", self.prefix, suffix))
    }
}

impl Default for SimulatedCheckout {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl CheckoutProcessor for SimulatedCheckout {
    async fn place_order(&self, request: &OrderRequest) -> Result<OrderConfirmation, CheckoutError> {
        tokio::time::sleep(self.processing_delay).await;

        Ok(OrderConfirmation {
            order_number: self.generate_order_number(),
            total: request.totals.total,
            email: request.shipping.email.trim().to_string(),
            item_count: request.totals.item_count,
            payment_method: request.payment_method,
            placed_at: current_timestamp(),
        })
    }
}

/// Validate the form, submit the cart to the processor and, on success,
/// remove the ordered lines from the cart.
///
/// Nothing is mutated when validation or processing fails.
pub async fn place_order<P>(
    store: &CartStore,
    form: &CheckoutForm,
    processor: &P,
) -> Result<OrderConfirmation, CheckoutError>
where
    P: CheckoutProcessor + ?Sized,
{
    let cart = store.snapshot();
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let payment_method = form.validate().map_err(CheckoutError::Validation)?;
    let totals = cart.aggregate(store.policy())?;

    let request = OrderRequest {
        shipping: form.shipping.clone(),
        payment_method,
        items: cart.items,
        totals,
    };

    let confirmation = processor.place_order(&request).await?;
    store.remove_ordered(&request.items);

    tracing::info!(
        order_number = %confirmation.order_number,
        total = %confirmation.total,
        items = confirmation.item_count,
        payment = payment_method.as_str(),
        "order placed"
    );

    Ok(confirmation)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::NewLineItem;
    use crate::money::Currency;

    struct Declines;

    #[async_trait]
    impl CheckoutProcessor for Declines {
        async fn place_order(&self, _request: &OrderRequest) -> Result<OrderConfirmation, CheckoutError> {
            Err(CheckoutError::Processor("declined".to_string()))
        }
    }

    fn form() -> CheckoutForm {
        CheckoutForm::new(
            ShippingInfo {
                full_name: "Maria Santos".to_string(),
                email: "maria@example.com".to_string(),
                phone: "09171234567".to_string(),
                address: "45 Mabini Ave".to_string(),
                city: "Cebu City".to_string(),
                province: "Cebu".to_string(),
                zip_code: "6000".to_string(),
            },
            PaymentMethod::CashOnDelivery,
        )
    }

    fn stocked_store() -> CartStore {
        let store = CartStore::default();
        store.add_to_cart(NewLineItem::new(
            "ube-halaya",
            "Ube Halaya Jam 340g",
            Money::new(2599, Currency::USD),
            "",
        ));
        store
    }

    #[test]
    fn test_order_number_format() {
        let checkout = SimulatedCheckout::default();
        for _ in 0..20 {
            let number = checkout.generate_order_number();
            let s = number.as_str();
            assert_eq!(s.len(), 11);
            assert!(s.starts_with("PN"));
            assert!(s[2..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_place_order_clears_cart() {
        let store = stocked_store();
        let confirmation = place_order(&store, &form(), &SimulatedCheckout::default())
            .await
            .unwrap();

        assert_eq!(confirmation.total.amount_cents, 3599);
        assert_eq!(confirmation.email, "maria@example.com");
        assert_eq!(confirmation.item_count, 1);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_validation_blocks_order() {
        let store = stocked_store();
        let mut incomplete = form();
        incomplete.shipping.city.clear();

        let err = place_order(&store, &incomplete, &Declines).await.unwrap_err();
        assert_eq!(err, CheckoutError::Validation(vec![CheckoutField::City]));
        assert_eq!(err.to_string(), "Please fill in all required fields: City");
        assert_eq!(store.get_cart_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_cart_rejected() {
        let err = place_order(&CartStore::default(), &form(), &Declines)
            .await
            .unwrap_err();
        assert_eq!(err, CheckoutError::EmptyCart);
    }

    #[tokio::test]
    async fn test_processor_failure_keeps_cart() {
        let store = stocked_store();
        let err = place_order(&store, &form(), &Declines).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Processor(_)));
        assert_eq!(store.get_cart_count(), 1);
    }
}
