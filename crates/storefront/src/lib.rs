//! DreamFit Storefront library.
//!
//! Server-rendered customer pages for DreamFit.Lk: the checkout (delivery
//! information) form and the sign-in page. Exposed as a library so the
//! router can be driven in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod telemetry;
pub mod validation;

use axum::{Router, body::Body, http::Request};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Directory holding the stylesheet and images.
pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Build the storefront router with its middleware stack.
///
/// Sentry layers are added by the binary so tests run without a Sentry hub.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .fallback(routes::not_found)
        .layer(session_layer)
        .layer(axum::middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}
