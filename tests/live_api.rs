//! Smoke tests against a running backend.
//!
//! Run with:
//! `STOREFRONT_BACKEND_URL=http://localhost:8001 cargo test --test live_api -- --ignored`

mod common;

use common::{live_api, unique_email};
use storefront::StoreErrorKind;
use storefront::shared::protocol::SignupRequest;
use storefront::shared::OrderStatus;

fn signup_form(email: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: "securepassword123".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
    }
}

#[tokio::test]
#[ignore]
async fn test_api_info() {
    let url = require_backend!();
    let info = live_api(&url).info().await.unwrap();
    assert!(!info.message.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_catalog_and_single_plan() {
    let url = require_backend!();
    let api = live_api(&url);

    let plans = api.subscriptions().await.unwrap();
    assert!(plans.len() >= 4, "expected the predefined plans");
    for plan in &plans {
        assert!(plan.price > 0.0);
        assert!(!plan.features.is_empty());
    }

    let first = api.subscription(&plans[0].id).await.unwrap();
    assert_eq!(first, plans[0]);

    let err = api.subscription("invalid-plan-id").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
#[ignore]
async fn test_signup_login_and_order_flow() {
    let url = require_backend!();
    let api = live_api(&url);
    let email = unique_email();

    let account = api.signup(&signup_form(&email)).await.unwrap();
    assert!(!account.id.is_empty());

    let dup = api.signup(&signup_form(&email)).await.unwrap_err();
    assert_eq!(dup.kind, StoreErrorKind::Rejected);
    assert_eq!(dup.detail(), Some("Email already registered"));

    let login = api.login(&email, "securepassword123").await.unwrap();
    assert_eq!(login.user_id, account.id);

    let plans = api.subscriptions().await.unwrap();
    let created = api.create_order(&email, &plans[0].id).await.unwrap();
    assert!(!created.id.is_empty());

    let orders = api.orders(&email).await.unwrap();
    assert!(orders.iter().any(|o| o.id == created.id));

    let fetched = api.order(&created.id).await.unwrap();
    assert_eq!(fetched.subscription_plan_id, plans[0].id);
    assert_eq!(fetched.status, OrderStatus::Pending);
    assert_eq!(fetched.amount, plans[0].price);
}

#[tokio::test]
#[ignore]
async fn test_rejections_carry_detail() {
    let url = require_backend!();
    let api = live_api(&url);

    let err = api
        .login("nonexistent@example.com", "whatever")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Invalid credentials");

    let err = api
        .create_order(&unique_email(), "invalid-plan-id")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Subscription plan not found");
}
