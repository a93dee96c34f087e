//! Payment methods accepted at checkout.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a form value names no known payment method.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

/// How the customer intends to pay for the order.
///
/// The wire names (`visa`, `mastercard`, `cashOnDelivery`) are shared by the
/// checkout form radio values and the delivery backend payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    Visa,
    Mastercard,
    CashOnDelivery,
}

impl PaymentMethod {
    /// Every method, in the order the checkout form lists them.
    pub const ALL: [Self; 3] = [Self::Visa, Self::Mastercard, Self::CashOnDelivery];

    /// Value used in form fields and JSON payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::CashOnDelivery => "cashOnDelivery",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_known_values() {
        assert_eq!("visa".parse::<PaymentMethod>().unwrap(), PaymentMethod::Visa);
        assert_eq!(
            "mastercard".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::Mastercard
        );
        assert_eq!(
            "cashOnDelivery".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CashOnDelivery
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("".parse::<PaymentMethod>().is_err());
        assert!("Visa".parse::<PaymentMethod>().is_err());
        assert!("paypal".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        for method in PaymentMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.as_str()));
        }
    }
}
