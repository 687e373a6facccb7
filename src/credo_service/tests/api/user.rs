use serde_json::{Value, json};

use crate::helpers::{PASSWORD, TestApp, error_message};

#[tokio::test]
async fn create_user_returns_201_with_view() {
    let app = TestApp::new().await;

    let response = app.create_user("alice@example.com", PASSWORD).await;

    assert_eq!(response.status().as_u16(), 201);
    let view: Value = response.json().await.unwrap();
    assert_eq!(view["email"], "alice@example.com");
    assert!(view["uid"].is_string());
}

#[tokio::test]
async fn create_user_twice_is_conflict() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", PASSWORD).await;

    let response = app.create_user("alice@example.com", PASSWORD).await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn create_user_with_weak_password_is_bad_request() {
    let app = TestApp::new().await;

    let response = app.create_user("alice@example.com", "password").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        error_message(response).await,
        "Password does not meet requirements"
    );
}

#[tokio::test]
async fn create_user_with_unknown_role_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/user",
            &json!({ "email": "alice@example.com", "password": PASSWORD, "role": "root" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn activation_with_wrong_code_is_bad_request() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", PASSWORD).await;

    let response = app.activate("alice@example.com", "wrong-code").await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "Invalid activation code");
}

#[tokio::test]
async fn activation_link_survives_reserved_characters_in_email() {
    let app = TestApp::new().await;
    let email = "a/b?c#d@example.com";
    assert_eq!(app.create_user(email, PASSWORD).await.status().as_u16(), 201);

    let mail = app.wait_for_email(email, "Welcome to the platform").await;
    let link = TestApp::link_from(&mail);
    assert!(link.contains("/a%2Fb%3Fc%23d@example.com/"));

    let response = app.http_client.get(&link).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], email);
    assert_eq!(app.sign_in(email, PASSWORD).await.status().as_u16(), 200);
}

#[tokio::test]
async fn resend_activation_code_while_pending_is_conflict() {
    let app = TestApp::new().await;
    app.create_user("alice@example.com", PASSWORD).await;

    let response = app
        .post_json(
            "/user/resend-activation-code",
            &json!({ "email": "alice@example.com" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn reset_password_flow() {
    let app = TestApp::new().await;
    app.signed_in_user("alice@example.com").await;

    let response = app
        .post_json(
            "/user/reset-password-request",
            &json!({ "email": "alice@example.com" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 202);

    let mail = app
        .wait_for_email("alice@example.com", "Reset password")
        .await;
    let code = TestApp::code_from(&mail);

    let response = app
        .post_json(
            "/user/reset-password",
            &json!({ "email": "alice@example.com", "code": code, "newPassword": "N3w-Passw0rd" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);

    app.wait_for_email("alice@example.com", "Password changed")
        .await;
    assert_eq!(
        app.sign_in("alice@example.com", "N3w-Passw0rd")
            .await
            .status()
            .as_u16(),
        200
    );
}

#[tokio::test]
async fn reset_password_request_twice_is_conflict() {
    let app = TestApp::new().await;
    app.signed_in_user("alice@example.com").await;
    let body = json!({ "email": "alice@example.com" });

    app.post_json("/user/reset-password-request", &body).await;
    let response = app.post_json("/user/reset-password-request", &body).await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn change_password_with_wrong_current_password_is_not_found() {
    let app = TestApp::new().await;
    app.signed_in_user("alice@example.com").await;

    let response = app
        .post_json(
            "/user/change-password",
            &json!({
                "email": "alice@example.com",
                "password": "Wr0ng-pass",
                "newPassword": "N3w-Passw0rd"
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn change_password() {
    let app = TestApp::new().await;
    app.signed_in_user("alice@example.com").await;

    let response = app
        .post_json(
            "/user/change-password",
            &json!({
                "email": "alice@example.com",
                "password": PASSWORD,
                "newPassword": "N3w-Passw0rd"
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        app.sign_in("alice@example.com", PASSWORD)
            .await
            .status()
            .as_u16(),
        401
    );
}

#[tokio::test]
async fn delete_user_with_bearer_token() {
    let app = TestApp::new().await;
    let tokens = app.signed_in_user("alice@example.com").await;
    let token = tokens["token"].as_str().unwrap();

    let response = app
        .http_client
        .delete(app.url("/user"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let response = app
        .http_client
        .get(app.url("/auth/validate-token"))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn delete_user_with_refresh_token_is_unauthorized() {
    let app = TestApp::new().await;
    let tokens = app.signed_in_user("alice@example.com").await;
    let refresh_token = tokens["refreshToken"].as_str().unwrap();

    let response = app
        .http_client
        .delete(app.url("/user"))
        .bearer_auth(refresh_token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);

    let response = app.sign_in("alice@example.com", PASSWORD).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn delete_user_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.http_client.delete(app.url("/user")).send().await.unwrap();

    assert_eq!(response.status().as_u16(), 401);
}
