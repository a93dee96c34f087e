//! Delivery details collected by the checkout form.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Delivery details as typed by the customer.
///
/// Values are kept verbatim (untrimmed) and live only for one checkout
/// session. Field names follow the camelCase form/JSON convention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeliveryInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
}

impl DeliveryInfo {
    /// Value of a delivery field; empty for [`Field::PaymentMethod`].
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::ZipCode => &self.zip_code,
            Field::PaymentMethod => "",
        }
    }
}

/// A checkout form field that can carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    ZipCode,
    PaymentMethod,
}

impl Field {
    /// Text inputs of the delivery form, in display order.
    pub const DELIVERY: [Self; 6] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::ZipCode,
    ];

    /// Form/JSON field name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::ZipCode => "zipCode",
            Self::PaymentMethod => "paymentMethod",
        }
    }

    /// Label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::Address => "Address",
            Self::ZipCode => "Zip code",
            Self::PaymentMethod => "Payment method",
        }
    }

    /// HTML input type.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "tel",
            Self::PaymentMethod => "radio",
            Self::FirstName | Self::LastName | Self::Address | Self::ZipCode => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
