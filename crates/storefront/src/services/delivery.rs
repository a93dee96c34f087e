//! Delivery backend client.
//!
//! Forwards a completed checkout (delivery details, payment method and order
//! summary) to the delivery service as a single JSON `POST /delivery`.
//! There is no retry, no idempotency key and no request timeout: one
//! best-effort attempt per submission.

use dreamfit_core::{DeliveryInfo, OrderSummary, PaymentMethod};
use serde::Serialize;
use thiserror::Error;

use crate::config::DeliveryApiConfig;

/// Errors that can occur when submitting a delivery.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The service answered with a non-success status.
    #[error("delivery service rejected the request: {status}")]
    Rejected { status: u16 },

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("delivery service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// JSON body sent to the delivery service.
///
/// Flattens to `{firstName, lastName, email, phone, address, zipCode,
/// paymentMethod, subtotal, deliveryFee, total}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryRequest<'a> {
    #[serde(flatten)]
    pub info: &'a DeliveryInfo,
    pub payment_method: PaymentMethod,
    #[serde(flatten)]
    pub summary: &'a OrderSummary,
}

/// HTTP client for the delivery service.
#[derive(Clone)]
pub struct DeliveryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl DeliveryClient {
    /// Create a new delivery client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &DeliveryApiConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("dreamfit-storefront/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.delivery_url(),
        })
    }

    /// URL the client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a delivery.
    ///
    /// Success is judged solely by the response status being 2xx; the body
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::Rejected`] for non-2xx responses and
    /// [`DeliveryError::Transport`] when no response arrives.
    pub async fn submit(&self, request: &DeliveryRequest<'_>) -> Result<(), DeliveryError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn sample_info() -> DeliveryInfo {
        DeliveryInfo {
            first_name: "Nimal".to_string(),
            last_name: "Perera".to_string(),
            email: "nimal@example.lk".to_string(),
            phone: "0771234567".to_string(),
            address: "12 Galle Road, Colombo".to_string(),
            zip_code: "00300".to_string(),
        }
    }

    #[test]
    fn test_request_payload_shape() {
        let info = sample_info();
        let summary = OrderSummary::new(Decimal::from(1500));
        let request = DeliveryRequest {
            info: &info,
            payment_method: PaymentMethod::CashOnDelivery,
            summary: &summary,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "firstName": "Nimal",
                "lastName": "Perera",
                "email": "nimal@example.lk",
                "phone": "0771234567",
                "address": "12 Galle Road, Colombo",
                "zipCode": "00300",
                "paymentMethod": "cashOnDelivery",
                "subtotal": 1500.0,
                "deliveryFee": 200.0,
                "total": 1700.0
            })
        );
    }

    #[test]
    fn test_client_endpoint() {
        let config = DeliveryApiConfig::new("http://localhost:3000").unwrap();
        let client = DeliveryClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/delivery");
    }

    #[tokio::test]
    async fn test_submit_unreachable_is_transport_error() {
        // Reserve a free port, then release it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = DeliveryApiConfig::new(&format!("http://{addr}")).unwrap();
        let client = DeliveryClient::new(&config).unwrap();
        let info = sample_info();
        let summary = OrderSummary::default();
        let request = DeliveryRequest {
            info: &info,
            payment_method: PaymentMethod::Visa,
            summary: &summary,
        };

        let err = client.submit(&request).await.unwrap_err();
        assert!(matches!(err, DeliveryError::Transport(_)));
    }
}
