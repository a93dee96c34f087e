//! Core types for DreamFit.
//!
//! This module provides type-safe wrappers for checkout domain concepts.

pub mod delivery;
pub mod email;
pub mod order;
pub mod payment;
pub mod price;

pub use delivery::{DeliveryInfo, Field};
pub use email::{Email, EmailError};
pub use order::{DELIVERY_FEE, OrderSummary};
pub use payment::{PaymentMethod, UnknownPaymentMethod};
pub use price::{CurrencyCode, Price};
