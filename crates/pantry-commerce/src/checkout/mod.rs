//! Checkout module.
//!
//! Contains the shipping/payment form and order placement.

mod form;
mod order;

pub use form::{CheckoutField, CheckoutForm, PaymentMethod, ShippingInfo};
pub use order::{
    place_order, CheckoutError, CheckoutProcessor, OrderConfirmation, OrderRequest,
    SimulatedCheckout,
};
