//! Domain models for storefront.

pub mod session;

pub use session::{PlacedOrder, keys as session_keys};
