//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the storefront's default currency.
    #[must_use]
    pub const fn lkr(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::LKR)
    }

    /// Format for display with two decimal places (e.g., `Rs1200.00`).
    #[must_use]
    pub fn display(&self) -> String {
        format!(
            "{}{:.2}",
            self.currency_code.symbol(),
            self.amount.round_dp(2)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes the shop prices in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Sri Lankan rupee.
    #[default]
    LKR,
}

impl CurrencyCode {
    /// Prefix used when rendering amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::LKR => "Rs",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::lkr(Decimal::from(200)).display(), "Rs200.00");
        assert_eq!(Price::lkr(Decimal::new(12345, 1)).display(), "Rs1234.50");
    }

    #[test]
    fn test_display_rounds_extra_precision() {
        assert_eq!(Price::lkr(Decimal::new(19_996, 3)).display(), "Rs20.00");
    }

    #[test]
    fn test_default_currency_is_rupee() {
        assert_eq!(CurrencyCode::default(), CurrencyCode::LKR);
        assert_eq!(CurrencyCode::LKR.symbol(), "Rs");
    }

    #[test]
    fn test_display_impl_matches_display() {
        let price = Price::new(Decimal::from(5), CurrencyCode::LKR);
        assert_eq!(price.to_string(), "Rs5.00");
    }
}
