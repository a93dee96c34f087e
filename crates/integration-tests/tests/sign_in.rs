//! Sign-in page tests.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use dreamfit_integration_tests::{TestContext, unreachable_base_url};

#[tokio::test]
async fn test_sign_in_page_renders() {
    let ctx = TestContext::start(&unreachable_base_url().await).await;

    let resp = ctx.client.get(ctx.url("/sign-in")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();

    assert!(body.contains("DreamFit"));
    assert!(body.contains("placeholder=\"name@company.com\""));
    assert!(body.contains("type=\"password\""));
    assert!(body.contains("Sign In"));
    assert!(body.contains("href=\"/sign-up\""));
    assert!(!body.contains("href=\"/\""));
}

#[tokio::test]
async fn test_sign_in_page_does_not_submit() {
    let ctx = TestContext::start(&unreachable_base_url().await).await;

    let resp = ctx.client.post(ctx.url("/sign-in")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
