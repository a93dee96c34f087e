//! Order summary shown beside the delivery form.

use rust_decimal::Decimal;
use serde::Serialize;

use super::price::Price;

/// Flat delivery fee added to every order, in rupees.
pub const DELIVERY_FEE: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// Subtotal, delivery fee and total of an order.
///
/// The total is derived once in [`OrderSummary::new`] and cannot be set
/// independently, so `total == subtotal + delivery_fee` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(with = "rust_decimal::serde::float")]
    subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    delivery_fee: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    total: Decimal,
}

impl OrderSummary {
    /// Build a summary for the given cart subtotal.
    ///
    /// # Panics
    ///
    /// Panics if `subtotal + DELIVERY_FEE` overflows `Decimal`; callers
    /// accepting outside input bound the subtotal first.
    #[must_use]
    pub fn new(subtotal: Decimal) -> Self {
        Self {
            subtotal,
            delivery_fee: DELIVERY_FEE,
            total: subtotal + DELIVERY_FEE,
        }
    }

    #[must_use]
    pub const fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    #[must_use]
    pub const fn delivery_fee(&self) -> Decimal {
        self.delivery_fee
    }

    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Subtotal as a displayable price.
    #[must_use]
    pub const fn subtotal_price(&self) -> Price {
        Price::lkr(self.subtotal)
    }

    /// Delivery fee as a displayable price.
    #[must_use]
    pub const fn delivery_fee_price(&self) -> Price {
        Price::lkr(self.delivery_fee)
    }

    /// Total as a displayable price.
    #[must_use]
    pub const fn total_price(&self) -> Price {
        Price::lkr(self.total)
    }
}

impl Default for OrderSummary {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}
