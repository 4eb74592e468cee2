//! End-to-end signup/login tests. Require PostgreSQL (see `DATABASE_URL`);
//! run with `cargo test -- --ignored`.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_signup_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/signup")
        .json(&json!({ "email": "a@b.com", "password": "secret123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(body["data"]["expires_at"].is_i64());
    assert!(body["data"]["password_hash"].is_null());

    let claims = app
        .authenticator
        .verify_header(&format!("Bearer {}", token))
        .expect("Issued token should verify");
    assert!(claims.sub.is_some());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_signup_validation_failed() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/signup")
        .json(&json!({ "email": "", "password": "" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_signup_duplicate_email() {
    let app = TestApp::spawn().await;
    app.signup("a@b.com", "secret123").await;

    let response = app
        .post("/api/v1/signup")
        .json(&json!({ "email": "a@b.com", "password": "another123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_login_success() {
    let app = TestApp::spawn().await;
    app.signup("a@b.com", "secret123").await;

    let response = app
        .post("/api/v1/login")
        .json(&json!({ "email": "a@b.com", "password": "secret123" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;
    app.signup("a@b.com", "secret123").await;

    let response = app
        .post("/api/v1/login")
        .json(&json!({ "email": "a@b.com", "password": "wrongpass" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["message"], "Invalid credentials");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_login_unknown_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/v1/login")
        .json(&json!({ "email": "nobody@nowhere.com", "password": "x" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_check_token() {
    let app = TestApp::spawn().await;
    let token = app.signup("a@b.com", "secret123").await;

    let response = app
        .get("/api/v1/token/check")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["valid"], true);

    let response = app
        .get("/api/v1/token/check")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
