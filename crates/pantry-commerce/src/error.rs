//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Unknown payment method code.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Unrecognised route path.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
