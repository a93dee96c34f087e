//! Checkout (delivery information) route handlers.
//!
//! The cart hands its total in via `GET /checkout?total=N`; the subtotal is
//! kept in the session so the posted form cannot change it. `POST /checkout`
//! validates, forwards the order to the delivery service once, and renders
//! the outcome as a dialog on the same page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dreamfit_core::{DELIVERY_FEE, DeliveryInfo, Field, OrderSummary, PaymentMethod};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::{PlacedOrder, session_keys};
use crate::services::{DeliveryError, DeliveryRequest};
use crate::state::AppState;
use crate::validation::{ValidationErrors, validate};

// =============================================================================
// Request Types
// =============================================================================

/// Route state handed in by the cart.
#[derive(Debug, Deserialize)]
pub struct CheckoutQuery {
    pub total: Option<String>,
}

/// Delivery form as posted by the browser.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub zip_code: String,
    pub payment_method: Option<String>,
}

impl CheckoutForm {
    /// Split into delivery details and the selected payment method.
    ///
    /// An unknown radio value counts as no selection.
    #[must_use]
    pub fn into_parts(self) -> (DeliveryInfo, Option<PaymentMethod>) {
        let payment_method = self
            .payment_method
            .as_deref()
            .and_then(|value| value.parse().ok());

        let info = DeliveryInfo {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            zip_code: self.zip_code,
        };

        (info, payment_method)
    }
}

// =============================================================================
// Submission Outcome
// =============================================================================

/// Result of forwarding a valid form to the delivery service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The service accepted the order (2xx).
    Placed,
    /// The service answered with a non-success status.
    Rejected,
    /// No response arrived.
    Unreachable,
}

impl SubmissionOutcome {
    /// Dialog announcing this outcome.
    #[must_use]
    pub const fn dialog(self) -> DialogView {
        match self {
            Self::Placed => DialogView {
                title: "Order Placed!",
                text: "Your order has been placed successfully.",
                icon: "success",
                confirm_text: "Continue",
                continue_href: Some("/card"),
            },
            Self::Rejected => DialogView {
                title: "Failed!",
                text: "Failed to save delivery information. Please try again.",
                icon: "error",
                confirm_text: "Retry",
                continue_href: None,
            },
            Self::Unreachable => DialogView {
                title: "Error",
                text: "An error occurred while saving delivery information.",
                icon: "error",
                confirm_text: "Retry",
                continue_href: None,
            },
        }
    }
}

impl From<&std::result::Result<(), DeliveryError>> for SubmissionOutcome {
    fn from(result: &std::result::Result<(), DeliveryError>) -> Self {
        match result {
            Ok(()) => Self::Placed,
            Err(DeliveryError::Rejected { .. }) => Self::Rejected,
            Err(DeliveryError::Transport(_)) => Self::Unreachable,
        }
    }
}

// =============================================================================
// Template Views
// =============================================================================

/// Modal dialog shown after a submission.
///
/// `continue_href` is set only when confirming navigates onward; otherwise
/// the confirm button just closes the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: &'static str,
    pub text: &'static str,
    pub icon: &'static str,
    pub confirm_text: &'static str,
    pub continue_href: Option<&'static str>,
}

/// One text input of the delivery form.
#[derive(Debug, Clone)]
pub struct InputView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub value: String,
    pub error: Option<String>,
}

/// One payment method radio button.
#[derive(Debug, Clone)]
pub struct PaymentOptionView {
    pub value: &'static str,
    pub label: &'static str,
    pub logo_url: Option<&'static str>,
    pub checked: bool,
}

/// Formatted order summary.
#[derive(Debug, Clone)]
pub struct SummaryView {
    pub subtotal: String,
    pub delivery_fee: String,
    pub total: String,
}

impl From<&OrderSummary> for SummaryView {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            subtotal: summary.subtotal_price().display(),
            delivery_fee: summary.delivery_fee_price().display(),
            total: summary.total_price().display(),
        }
    }
}

/// Card-brand logo for a payment method, if it has one.
const fn logo_url(method: PaymentMethod) -> Option<&'static str> {
    match method {
        PaymentMethod::Visa => Some("https://upload.wikimedia.org/wikipedia/commons/0/04/Visa.svg"),
        PaymentMethod::Mastercard => {
            Some("https://upload.wikimedia.org/wikipedia/commons/b/b7/MasterCard_Logo.svg")
        }
        PaymentMethod::CashOnDelivery => None,
    }
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub inputs: Vec<InputView>,
    pub payment_options: Vec<PaymentOptionView>,
    pub payment_error: Option<String>,
    pub summary: SummaryView,
    pub dialog: Option<DialogView>,
}

impl CheckoutTemplate {
    /// Render the form with the given values, errors and optional dialog.
    #[must_use]
    pub fn new(
        info: &DeliveryInfo,
        payment_method: Option<PaymentMethod>,
        errors: &ValidationErrors,
        summary: &OrderSummary,
        dialog: Option<DialogView>,
    ) -> Self {
        let inputs = Field::DELIVERY
            .into_iter()
            .map(|field| InputView {
                name: field.as_str(),
                label: field.label(),
                input_type: field.input_type(),
                value: info.value(field).to_string(),
                error: errors.get(field).map(str::to_string),
            })
            .collect();

        let payment_options = PaymentMethod::ALL
            .into_iter()
            .map(|method| PaymentOptionView {
                value: method.as_str(),
                label: method.label(),
                logo_url: logo_url(method),
                checked: payment_method == Some(method),
            })
            .collect();

        Self {
            inputs,
            payment_options,
            payment_error: errors.get(Field::PaymentMethod).map(str::to_string),
            summary: SummaryView::from(summary),
            dialog,
        }
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Parse the cart total handed in by the cart page.
fn parse_cart_total(raw: &str) -> Result<Decimal> {
    let total = raw
        .trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::BadRequest(format!("invalid cart total '{raw}'")))?;

    if total.is_sign_negative() {
        return Err(AppError::BadRequest(format!(
            "cart total cannot be negative ({total})"
        )));
    }

    if total.checked_add(DELIVERY_FEE).is_none() {
        return Err(AppError::BadRequest(format!(
            "cart total is too large ({total})"
        )));
    }

    Ok(total)
}

/// Get the cart subtotal from the session, defaulting to an empty cart.
async fn get_cart_subtotal(session: &Session) -> Result<Decimal> {
    Ok(session
        .get::<Decimal>(session_keys::CART_SUBTOTAL)
        .await?
        .unwrap_or(Decimal::ZERO))
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the checkout page.
///
/// The `total` query parameter becomes the session subtotal that a later
/// submit charges; without one the cart is empty and the subtotal is zero.
///
/// # Errors
///
/// Returns 400 if `total` is not a non-negative number or leaves no room
/// for the delivery fee.
#[instrument(skip(session))]
pub async fn show(session: Session, Query(query): Query<CheckoutQuery>) -> Result<Response> {
    let subtotal = query
        .total
        .as_deref()
        .map_or(Ok(Decimal::ZERO), parse_cart_total)?;
    session.insert(session_keys::CART_SUBTOTAL, subtotal).await?;

    let summary = OrderSummary::new(subtotal);
    Ok(CheckoutTemplate::new(
        &DeliveryInfo::default(),
        None,
        &ValidationErrors::default(),
        &summary,
        None,
    )
    .into_response())
}

/// Handle delivery form submission.
///
/// Invalid forms are re-rendered with inline errors (422) and never reach
/// the delivery service. Valid forms are posted exactly once; the outcome is
/// shown as a dialog. Only a 2xx response records the order total for the
/// card page.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Response> {
    // A previous order must not leak into this attempt's navigation.
    session
        .remove::<PlacedOrder>(session_keys::PLACED_ORDER)
        .await?;

    let summary = OrderSummary::new(get_cart_subtotal(&session).await?);
    let (info, payment_method) = form.into_parts();
    let errors = validate(&info, payment_method);

    let Some(payment_method) = payment_method.filter(|_| errors.is_empty()) else {
        tracing::debug!(
            fields = ?errors.fields().collect::<Vec<_>>(),
            "Checkout form failed validation"
        );
        let page = CheckoutTemplate::new(&info, payment_method, &errors, &summary, None);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response());
    };

    add_breadcrumb(
        "checkout",
        "Delivery form submitted",
        Some(&[("payment_method", payment_method.as_str())]),
    );

    let request = DeliveryRequest {
        info: &info,
        payment_method,
        summary: &summary,
    };
    let result = state.delivery().submit(&request).await;

    match &result {
        Ok(()) => {
            session
                .insert(
                    session_keys::PLACED_ORDER,
                    PlacedOrder {
                        total: summary.total(),
                    },
                )
                .await?;
            tracing::info!(
                total = %summary.total(),
                payment_method = %payment_method,
                "Order placed"
            );
        }
        Err(DeliveryError::Rejected { status }) => {
            tracing::warn!(status, "Delivery service rejected order");
        }
        Err(e @ DeliveryError::Transport(_)) => {
            tracing::error!(error = %e, "Error saving delivery information");
        }
    }

    let outcome = SubmissionOutcome::from(&result);
    Ok(CheckoutTemplate::new(
        &info,
        Some(payment_method),
        &ValidationErrors::default(),
        &summary,
        Some(outcome.dialog()),
    )
    .into_response())
}
