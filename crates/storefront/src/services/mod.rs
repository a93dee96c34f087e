//! Outbound service clients for the storefront.
//!
//! # Services
//!
//! - `delivery` - Delivery backend (`POST /delivery`)

pub mod delivery;

pub use delivery::{DeliveryClient, DeliveryError, DeliveryRequest};
