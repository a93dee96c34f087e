//! DreamFit Storefront binary.
//!
//! Serves the checkout flow (`/checkout` then `/card`) and the sign-in page.
//! Pages are rendered on the server with Askama and carry no scripts; the
//! cart total and placed order ride in an in-memory session. Valid orders
//! are handed to the delivery backend at `DELIVERY_API_URL`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use dreamfit_storefront::{config::StorefrontConfig, state::AppState, telemetry};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    let _sentry_guard = telemetry::init(&config);

    let state = AppState::new(config.clone()).expect("Failed to build delivery client");
    tracing::info!(endpoint = state.delivery().endpoint(), "Delivery backend configured");

    let app = dreamfit_storefront::app(state)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction());

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!(%addr, base_url = %config.base_url, "Storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Resolve on Ctrl+C, or on SIGTERM where signals exist.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            result = tokio::signal::ctrl_c() => result.expect("Failed to listen for Ctrl+C"),
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");

    tracing::info!("Shutting down, draining in-flight requests");
}
