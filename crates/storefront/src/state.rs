//! Shared handler state.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{DeliveryClient, DeliveryError};

/// State handed to every handler through `State<AppState>`.
///
/// Both members are read-only after start-up; clones share one `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Shared>,
}

struct Shared {
    config: StorefrontConfig,
    delivery: DeliveryClient,
}

impl AppState {
    /// Build the state, constructing the delivery client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Transport`] if the HTTP client cannot be
    /// built (e.g. no TLS backend available).
    pub fn new(config: StorefrontConfig) -> Result<Self, DeliveryError> {
        let delivery = DeliveryClient::new(&config.delivery)?;
        let inner = Arc::new(Shared { config, delivery });
        Ok(Self { inner })
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn delivery(&self) -> &DeliveryClient {
        &self.inner.delivery
    }
}
