//! Integration test harness for the DreamFit storefront.
//!
//! Each test gets its own stub delivery backend and storefront, both bound
//! to ephemeral ports on `127.0.0.1`, so tests run in parallel without any
//! external services.
//!
//! ```rust,ignore
//! let delivery = DeliveryStub::start(StatusCode::CREATED).await;
//! let ctx = TestContext::start(&delivery.base_url()).await;
//! let resp = ctx.client.get(ctx.url("/health")).send().await.unwrap();
//! assert_eq!(resp.status(), 200);
//! ```

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use dreamfit_storefront::config::{DeliveryApiConfig, StorefrontConfig};
use dreamfit_storefront::state::AppState;
use serde_json::Value;
use tokio::net::TcpListener;

/// Stub of the delivery backend.
///
/// Records every JSON body posted to `/delivery` and answers with a fixed
/// status.
#[derive(Clone)]
pub struct DeliveryStub {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn record_delivery(State(stub): State<StubState>, Json(body): Json<Value>) -> StatusCode {
    stub.received
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(body);
    stub.status
}

impl DeliveryStub {
    /// Start a stub answering every submission with `status`.
    ///
    /// # Panics
    ///
    /// Panics if no local port can be bound.
    pub async fn start(status: StatusCode) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/delivery", post(record_delivery))
            .with_state(StubState {
                status,
                received: Arc::clone(&received),
            });

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind delivery stub");
        let addr = listener.local_addr().expect("Stub has no local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self { addr, received }
    }

    /// Base URL to configure as `DELIVERY_API_URL`.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Bodies received so far, in arrival order.
    #[must_use]
    pub fn received(&self) -> Vec<Value> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Storefront configuration for tests, pointing at `delivery_base_url`.
///
/// # Panics
///
/// Panics if `delivery_base_url` is not an http(s) URL.
#[must_use]
pub fn test_config(delivery_base_url: &str) -> StorefrontConfig {
    StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        base_url: "http://localhost".to_string(),
        delivery: DeliveryApiConfig::new(delivery_base_url).expect("Invalid delivery URL"),
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 1.0,
        sentry_traces_sample_rate: 0.0,
    }
}

/// A running storefront plus a cookie-keeping client.
pub struct TestContext {
    /// Client with a cookie store and redirects disabled.
    pub client: reqwest::Client,
    /// Storefront base URL.
    pub storefront_url: String,
}

impl TestContext {
    /// Start a storefront that talks to the delivery backend at
    /// `delivery_base_url`.
    ///
    /// # Panics
    ///
    /// Panics if the storefront cannot start.
    pub async fn start(delivery_base_url: &str) -> Self {
        let state =
            AppState::new(test_config(delivery_base_url)).expect("Failed to build app state");
        let app = dreamfit_storefront::app(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind storefront");
        let addr = listener.local_addr().expect("Storefront has no local address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            storefront_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL of a storefront path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.storefront_url)
    }
}

/// Base URL of a port with nothing listening on it.
///
/// # Panics
///
/// Panics if no local port can be bound.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe has no local address");
    drop(listener);
    format!("http://{addr}")
}

/// A form that passes validation, as posted by the browser.
#[must_use]
pub fn valid_form(payment_method: &'static str) -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Nimal"),
        ("lastName", "Perera"),
        ("email", "nimal@example.com"),
        ("phone", "0771234567"),
        ("address", "12 Galle Road, Colombo"),
        ("zipCode", "00300"),
        ("paymentMethod", payment_method),
    ]
}
