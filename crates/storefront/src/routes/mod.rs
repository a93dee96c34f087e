//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Checkout
//! GET  /checkout?total=N       - Delivery form; N is the cart total
//! POST /checkout               - Validate and submit the delivery form
//! GET  /card                   - Card payment page for the placed order
//!
//! # Auth
//! GET  /sign-in                - Sign-in page (static)
//! ```

pub mod auth;
pub mod card;
pub mod checkout;

use axum::{Router, http::Uri, routing::get};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        // Checkout
        .route("/checkout", get(checkout::show).post(checkout::submit))
        .route("/card", get(card::show))
        // Auth
        .route("/sign-in", get(auth::sign_in_page))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
