//! Session-related types.
//!
//! Route state carried between pages lives in the visitor session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Total handed from a successful checkout to the card page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    /// Order total including the delivery fee.
    pub total: Decimal,
}

/// Session keys for checkout route state.
pub mod keys {
    /// Key for the cart subtotal handed into the checkout page.
    pub const CART_SUBTOTAL: &str = "cart_subtotal";

    /// Key for the order placed by the last successful checkout.
    pub const PLACED_ORDER: &str = "placed_order";
}
