//! Card payment page.
//!
//! Reached only through the `Continue` button of a successful checkout; the
//! order total travels in the session.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect, Response};
use dreamfit_core::Price;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::{PlacedOrder, session_keys};

/// Card payment page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/card.html")]
pub struct CardTemplate {
    pub total: String,
}

/// Display the card payment page for the last placed order.
///
/// Without a placed order the visitor is sent back to checkout.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let placed = session
        .get::<PlacedOrder>(session_keys::PLACED_ORDER)
        .await?;

    Ok(match placed {
        Some(order) => CardTemplate {
            total: Price::lkr(order.total).display(),
        }
        .into_response(),
        None => Redirect::to("/checkout").into_response(),
    })
}
