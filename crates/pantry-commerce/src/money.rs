//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation so cart totals never pick up
//! floating-point drift (89.99 × 2 + 45.00 is exactly 224.98).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    PHP,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    /// Get the currency code (e.g., "PHP").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::PHP => "PHP",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::PHP => "\u{20b1}",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "PHP" => Some(Currency::PHP),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            "JPY" => Some(Currency::JPY),
            "CAD" => Some(Currency::CAD),
            "AUD" => Some(Currency::AUD),
            _ => None,
        }
    }

    fn minor_unit_factor(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., centavos).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the minor unit.
    ///
    /// ```
    /// use pantry_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(89.99, Currency::USD);
    /// assert_eq!(price.amount_cents, 8999);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * currency.minor_unit_factor() as f64).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Parse a decimal string such as `"89.99"` (the Storefront API's format).
    pub fn parse_decimal(amount: &str, currency: Currency) -> Option<Self> {
        amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| Self::from_decimal(value, currency))
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$89.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "89.99").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            return self.amount_cents.to_string();
        }
        let factor = self.currency.minor_unit_factor();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let factor = factor.unsigned_abs();
        format!("{sign}{}.{:0places$}", abs / factor, abs % factor)
    }

    /// Try to add another Money value, returning None if currencies don't match
    /// or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_sub(other.amount_cents)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|cents| Money::new(cents, self.currency))
    }

    /// Subtract, flooring the result at zero. Mismatched currencies yield zero.
    pub fn saturating_remaining(&self, spent: &Money) -> Money {
        self.try_subtract(spent)
            .filter(|m| !m.is_negative())
            .unwrap_or_else(|| Money::zero(self.currency))
    }

    /// Compare two amounts of the same currency.
    pub fn compare(&self, other: &Money) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.amount_cents.cmp(&other.amount_cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(89.99, Currency::USD);
        assert_eq!(m.amount_cents, 8999);

        let m = Money::from_decimal(100.0, Currency::JPY);
        assert_eq!(m.amount_cents, 100); // JPY has no decimals
    }

    #[test]
    fn test_parse_decimal() {
        let m = Money::parse_decimal("32.50", Currency::PHP).unwrap();
        assert_eq!(m.amount_cents, 3250);
        assert!(Money::parse_decimal("not-a-price", Currency::PHP).is_none());
        assert!(Money::parse_decimal("NaN", Currency::PHP).is_none());
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(22498, Currency::USD).display(), "$224.98");
        assert_eq!(Money::new(1000, Currency::USD).display(), "$10.00");
        assert_eq!(Money::new(5, Currency::PHP).display(), "\u{20b1}0.05");
        assert_eq!(Money::new(-250, Currency::USD).display_amount(), "-2.50");
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
    }

    #[test]
    fn test_exact_cart_arithmetic() {
        let beef = Money::from_decimal(89.99, Currency::USD);
        let chips = Money::from_decimal(45.00, Currency::USD);
        let total = beef
            .try_multiply(2)
            .and_then(|b| b.try_add(&chips))
            .unwrap();
        assert_eq!(total.amount_cents, 22498);
    }

    #[test]
    fn test_currency_mismatch() {
        let usd = Money::new(1000, Currency::USD);
        let php = Money::new(1000, Currency::PHP);
        assert!(usd.try_add(&php).is_none());
        assert!(usd.compare(&php).is_none());
    }

    #[test]
    fn test_overflow_is_detected() {
        let m = Money::new(i64::MAX, Currency::USD);
        assert!(m.try_multiply(2).is_none());
        assert!(m.try_add(&Money::new(1, Currency::USD)).is_none());
    }

    #[test]
    fn test_saturating_remaining() {
        let threshold = Money::new(10000, Currency::USD);
        assert_eq!(
            threshold.saturating_remaining(&Money::new(3500, Currency::USD)).amount_cents,
            6500
        );
        assert!(threshold
            .saturating_remaining(&Money::new(12000, Currency::USD))
            .is_zero());
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("PHP"), Some(Currency::PHP));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
