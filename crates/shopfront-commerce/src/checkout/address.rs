//! Address and payment types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shipping details collected by the checkout form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Street address.
    pub address: String,
    /// Apartment, suite, etc.
    #[serde(default)]
    pub address2: String,
    pub city: String,
    /// Administrative division (e.g. "Dhaka").
    pub division: String,
    #[serde(default)]
    pub postal_code: String,
}

impl ShippingAddress {
    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.address.as_str()];
        if !self.address2.is_empty() {
            parts.push(&self.address2);
        }
        parts.push(&self.city);
        parts.push(&self.division);
        if !self.postal_code.is_empty() {
            parts.push(&self.postal_code);
        }
        parts.join(", ")
    }

    /// Check the required fields of the form.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let required = [
            ("First name", &self.first_name),
            ("Last name", &self.last_name),
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("Address", &self.address),
            ("City", &self.city),
            ("Division", &self.division),
        ];
        for (label, value) in required {
            if value.trim().is_empty() {
                return Err(CommerceError::ValidationError(format!("{} is required", label)));
            }
        }
        if !self.email.contains('@') {
            return Err(CommerceError::ValidationError(
                "Please enter a valid email address".to_string(),
            ));
        }
        Ok(())
    }
}

/// A saved address in the customer's address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedAddress {
    /// Short name, e.g. "Home".
    pub label: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
}

/// Payment options offered at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash on delivery.
    #[default]
    Cod,
    Bkash,
    Nagad,
    /// Visa or Mastercard.
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "cod",
            PaymentMethod::Bkash => "bkash",
            PaymentMethod::Nagad => "nagad",
            PaymentMethod::Card => "card",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Cod => "Cash on Delivery",
            PaymentMethod::Bkash => "bKash",
            PaymentMethod::Nagad => "Nagad",
            PaymentMethod::Card => "Credit/Debit Card",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for PaymentMethod {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cod" | "cash" => Ok(PaymentMethod::Cod),
            "bkash" => Ok(PaymentMethod::Bkash),
            "nagad" => Ok(PaymentMethod::Nagad),
            "card" => Ok(PaymentMethod::Card),
            other => Err(CommerceError::ValidationError(format!(
                "Unknown payment method: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dhaka() -> ShippingAddress {
        ShippingAddress {
            first_name: "Rafiq".to_string(),
            last_name: "Ahmed".to_string(),
            email: "rafiq@example.com".to_string(),
            phone: "01711000000".to_string(),
            address: "House 12, Road 5".to_string(),
            address2: String::new(),
            city: "Dhaka".to_string(),
            division: "Dhaka".to_string(),
            postal_code: "1205".to_string(),
        }
    }

    #[test]
    fn test_one_line() {
        assert_eq!(dhaka().one_line(), "House 12, Road 5, Dhaka, Dhaka, 1205");
        assert_eq!(dhaka().full_name(), "Rafiq Ahmed");
    }

    #[test]
    fn test_validation() {
        assert!(dhaka().validate().is_ok());

        let mut missing = dhaka();
        missing.city = " ".to_string();
        assert_eq!(
            missing.validate(),
            Err(CommerceError::ValidationError("City is required".to_string()))
        );

        let mut bad_email = dhaka();
        bad_email.email = "rafiq".to_string();
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_payment_method_parse() {
        assert_eq!("bKash".parse::<PaymentMethod>().unwrap(), PaymentMethod::Bkash);
        assert_eq!("COD".parse::<PaymentMethod>().unwrap(), PaymentMethod::Cod);
        assert!("paypal".parse::<PaymentMethod>().is_err());
        assert_eq!(serde_json::to_string(&PaymentMethod::Nagad).unwrap(), "\"nagad\"");
    }
}
