//! Handler-level errors.
//!
//! Handlers return [`Result`]. Server-side failures are reported to Sentry
//! and answered with a generic 500; client mistakes echo their message.
//!
//! A delivery backend failure is not an `AppError`: the checkout page shows
//! it to the customer as a dialog.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Body sent for every 5xx response.
const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Errors a storefront handler can return.
#[derive(Debug, Error)]
pub enum AppError {
    /// The session store could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// No route matches the requested path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request carried an unusable value.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(error = %self, sentry_event_id = %event_id, "Request failed");
            return (status, INTERNAL_ERROR_BODY).into_response();
        }

        tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a Sentry breadcrumb for a customer action.
///
/// ```rust,ignore
/// add_breadcrumb("checkout", "Delivery form submitted", Some(&[("payment_method", "visa")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let data = data
        .unwrap_or_default()
        .iter()
        .map(|(key, value)| ((*key).to_string(), serde_json::Value::from(*value)))
        .collect();

    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data,
        ..Default::default()
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session_error() -> AppError {
        let decode = serde_json::from_str::<u8>("not json").unwrap_err();
        AppError::from(tower_sessions::session::Error::SerdeJson(decode))
    }

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::NotFound("/x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("total".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(session_error().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_client_errors_echo_message() {
        let response = AppError::BadRequest("invalid cart total 'abc'".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, "Bad request: invalid cart total 'abc'");
    }

    #[tokio::test]
    async fn test_session_error_hides_details() {
        let response = session_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, INTERNAL_ERROR_BODY);
    }

    #[test]
    fn test_add_breadcrumb_without_hub() {
        add_breadcrumb("checkout", "Delivery form submitted", None);
        add_breadcrumb("checkout", "Delivery form submitted", Some(&[("k", "v")]));
    }
}
