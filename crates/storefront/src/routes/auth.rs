//! Sign-in page.
//!
//! The page is a static view: the form has no submission target yet and
//! sign-up lives outside this service.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

use crate::filters;

/// Where the "Sign Up" link points.
pub const SIGN_UP_PATH: &str = "/sign-up";

/// Sign-in page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/sign_in.html")]
pub struct SignInTemplate {
    pub sign_up_href: &'static str,
}

/// Display the sign-in page.
pub async fn sign_in_page() -> impl IntoResponse {
    SignInTemplate {
        sign_up_href: SIGN_UP_PATH,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_renders_static_form() {
        let html = SignInTemplate {
            sign_up_href: SIGN_UP_PATH,
        }
        .render()
        .unwrap();

        assert!(html.contains("DreamFit"));
        assert!(html.contains("name@company.com"));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("Sign In"));
        assert!(html.contains("href=\"/sign-up\""));
        // No home page is served, so nothing links to it.
        assert!(!html.contains("href=\"/\""));
        // Submission is not wired: the form posts nowhere.
        assert!(!html.contains("method=\"post\""));
    }
}
