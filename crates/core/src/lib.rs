//! DreamFit Core - Shared domain types.
//!
//! This crate provides the types used by the storefront pages:
//! - the delivery form fields and their names on the wire
//! - payment methods accepted at checkout
//! - the order summary (subtotal, delivery fee, total)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no
//! templates. This keeps it lightweight and easy to test.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, prices, and checkout data

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
