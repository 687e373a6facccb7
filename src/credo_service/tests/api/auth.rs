use serde_json::{Value, json};

use crate::helpers::{PASSWORD, TestApp, error_message};

#[tokio::test]
async fn sign_in_returns_token_pair() {
    let app = TestApp::new().await;

    let tokens = app.signed_in_user("alice@example.com").await;

    assert!(tokens["token"].is_string());
    assert!(tokens["refreshToken"].is_string());
}

#[tokio::test]
async fn sign_in_inactive_user_is_unauthorized() {
    let app = TestApp::new().await;
    app.create_user("bob@example.com", PASSWORD).await;

    let response = app.sign_in("bob@example.com", PASSWORD).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "User is inactive");
}

#[tokio::test]
async fn sign_in_with_wrong_password_is_unauthorized() {
    let app = TestApp::new().await;
    app.signed_in_user("alice@example.com").await;

    let response = app.sign_in("alice@example.com", "Wr0ng-pass").await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid credentials");
}

#[tokio::test]
async fn sign_in_with_malformed_email_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.sign_in("not-an-email", PASSWORD).await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn refresh_rotates_the_refresh_token() {
    let app = TestApp::new().await;
    let tokens = app.signed_in_user("alice@example.com").await;
    let old = tokens["refreshToken"].clone();

    let response = app
        .post_json("/auth/refresh-token", &json!({ "refreshToken": old }))
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let fresh: Value = response.json().await.unwrap();
    assert_ne!(fresh["refreshToken"], old);

    let replay = app
        .post_json("/auth/refresh-token", &json!({ "refreshToken": old }))
        .await;
    assert_eq!(replay.status().as_u16(), 401);
    assert_eq!(error_message(replay).await, "Invalid refresh token");
}

#[tokio::test]
async fn sign_out_revokes_refresh_token() {
    let app = TestApp::new().await;
    let tokens = app.signed_in_user("alice@example.com").await;
    let refresh = tokens["refreshToken"].clone();

    let response = app
        .post_json("/auth/sign-out", &json!({ "refreshToken": refresh }))
        .await;
    assert_eq!(response.status().as_u16(), 204);

    let response = app
        .post_json("/auth/refresh-token", &json!({ "refreshToken": refresh }))
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn validate_token_returns_user_view() {
    let app = TestApp::new().await;
    let tokens = app.signed_in_user("alice@example.com").await;

    let response = app
        .http_client
        .get(app.url("/auth/validate-token"))
        .bearer_auth(tokens["token"].as_str().unwrap())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    let view: Value = response.json().await.unwrap();
    assert_eq!(view["email"], "alice@example.com");
    assert_eq!(view["role"], "user");
    assert!(view.get("passwordHash").is_none());
}

#[tokio::test]
async fn validate_token_without_header_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(app.url("/auth/validate-token"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "No token provided");
}

#[tokio::test]
async fn validate_token_with_garbage_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(app.url("/auth/validate-token"))
        .bearer_auth("garbage")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(error_message(response).await, "Invalid token");
}
