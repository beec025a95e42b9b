//! Checkout form: shipping details and payment method.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where to ship an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    /// Street address.
    pub address: String,
    pub city: String,
    pub province: String,
    pub zip_code: String,
}

impl ShippingInfo {
    /// Format as single line.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.province, self.zip_code
        )
    }

    fn missing_fields(&self) -> Vec<CheckoutField> {
        let fields = [
            (CheckoutField::FullName, &self.full_name),
            (CheckoutField::Email, &self.email),
            (CheckoutField::Phone, &self.phone),
            (CheckoutField::Address, &self.address),
            (CheckoutField::City, &self.city),
            (CheckoutField::Province, &self.province),
            (CheckoutField::ZipCode, &self.zip_code),
        ];

        fields
            .into_iter()
            .filter(|(field, value)| {
                let value = value.trim();
                value.is_empty() || (*field == CheckoutField::Email && !looks_like_email(value))
            })
            .map(|(field, _)| field)
            .collect()
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[serde(rename = "cod")]
    CashOnDelivery,
    GCash,
    PayMaya,
    Card,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CashOnDelivery,
        PaymentMethod::GCash,
        PaymentMethod::PayMaya,
        PaymentMethod::Card,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "cod",
            PaymentMethod::GCash => "gcash",
            PaymentMethod::PayMaya => "paymaya",
            PaymentMethod::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
            PaymentMethod::GCash => "GCash",
            PaymentMethod::PayMaya => "PayMaya",
            PaymentMethod::Card => "Credit/Debit Card",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == code)
            .ok_or_else(|| CommerceError::UnknownPaymentMethod(s.to_string()))
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A required checkout input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutField {
    FullName,
    Email,
    Phone,
    Address,
    City,
    Province,
    ZipCode,
    PaymentMethod,
}

impl CheckoutField {
    pub fn label(&self) -> &'static str {
        match self {
            CheckoutField::FullName => "Full Name",
            CheckoutField::Email => "Email",
            CheckoutField::Phone => "Phone Number",
            CheckoutField::Address => "Street Address",
            CheckoutField::City => "City",
            CheckoutField::Province => "Province",
            CheckoutField::ZipCode => "ZIP Code",
            CheckoutField::PaymentMethod => "Payment Method",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the customer fills in before placing an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutForm {
    pub shipping: ShippingInfo,
    pub payment_method: Option<PaymentMethod>,
}

impl CheckoutForm {
    pub fn new(shipping: ShippingInfo, payment_method: PaymentMethod) -> Self {
        Self {
            shipping,
            payment_method: Some(payment_method),
        }
    }

    /// Every required field that is blank or malformed, in form order.
    pub fn missing_fields(&self) -> Vec<CheckoutField> {
        let mut missing = self.shipping.missing_fields();
        if self.payment_method.is_none() {
            missing.push(CheckoutField::PaymentMethod);
        }
        missing
    }

    /// Check the form, returning the chosen payment method when complete.
    pub fn validate(&self) -> Result<PaymentMethod, Vec<CheckoutField>> {
        let missing = self.missing_fields();
        match self.payment_method {
            Some(method) if missing.is_empty() => Ok(method),
            _ => Err(missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_shipping() -> ShippingInfo {
        ShippingInfo {
            full_name: "Juan Dela Cruz".to_string(),
            email: "juan@example.com".to_string(),
            phone: "+63 912 345 6789".to_string(),
            address: "123 Rizal Street".to_string(),
            city: "Quezon City".to_string(),
            province: "Metro Manila".to_string(),
            zip_code: "1100".to_string(),
        }
    }

    #[test]
    fn test_payment_method_codes() {
        for method in PaymentMethod::ALL {
            assert_eq!(method.as_str().parse::<PaymentMethod>().unwrap(), method);
        }
        assert_eq!("COD".parse::<PaymentMethod>().unwrap(), PaymentMethod::CashOnDelivery);
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
        assert_eq!(
            serde_json::to_string(&PaymentMethod::GCash).unwrap(),
            "\"gcash\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            "\"cod\""
        );
    }

    #[test]
    fn test_complete_form() {
        let form = CheckoutForm::new(complete_shipping(), PaymentMethod::GCash);
        assert_eq!(form.validate(), Ok(PaymentMethod::GCash));
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let mut shipping = complete_shipping();
        shipping.phone = "   ".to_string();
        shipping.zip_code.clear();
        let form = CheckoutForm {
            shipping,
            payment_method: None,
        };

        assert_eq!(
            form.validate(),
            Err(vec![
                CheckoutField::Phone,
                CheckoutField::ZipCode,
                CheckoutField::PaymentMethod
            ])
        );
    }

    #[test]
    fn test_empty_form_lists_everything() {
        assert_eq!(CheckoutForm::default().missing_fields().len(), 8);
    }

    #[test]
    fn test_malformed_email() {
        let mut shipping = complete_shipping();
        shipping.email = "juan.example.com".to_string();
        let form = CheckoutForm::new(shipping, PaymentMethod::Card);
        assert_eq!(form.validate(), Err(vec![CheckoutField::Email]));
    }
}
