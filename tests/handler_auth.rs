mod common;

use axum::http::StatusCode;
use book_catalog::application::services::AuthService;
use book_catalog::infrastructure::persistence::MemoryUserRepository;
use chrono::Duration;
use serde_json::{Value, json};
use std::sync::Arc;

// ─── REGISTER ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_register_success() {
    let server = common::make_server();

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "User registered successfully"
    );
}

#[tokio::test]
async fn test_register_with_email() {
    let server = common::make_server();

    server
        .post("/register")
        .json(&json!({ "username": "carol", "password": "pw", "email": "carol@example.com" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_register_invalid_email() {
    let server = common::make_server();

    let response = server
        .post("/register")
        .json(&json!({ "username": "carol", "password": "pw", "email": "not-an-email" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "validation_error");
}

#[tokio::test]
async fn test_register_missing_fields() {
    let server = common::make_server();

    let bodies = [
        json!({ "username": "alice" }),
        json!({ "password": "pw1" }),
        json!({ "username": "", "password": "pw1" }),
        json!({}),
    ];

    for body in bodies {
        let response = server.post("/register").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<Value>();
        assert_eq!(json["code"], "missing_fields");
        assert_eq!(json["message"], "Username and password are required");
    }
}

#[tokio::test]
async fn test_register_duplicate_username() {
    let server = common::make_server();

    common::register(&server, "alice", "pw1").await;

    let response = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "pw2" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["message"], "Username already exists");
    assert_eq!(json["code"], "username_taken");
}

#[tokio::test]
async fn test_register_rejects_invalid_usernames() {
    let server = common::make_server();

    for username in ["ab", "has space", "under_score", "Admin", "root", "x234567890123456789012"] {
        let response = server
            .post("/register")
            .json(&json!({ "username": username, "password": "pw" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "invalid_username");
    }
}

#[tokio::test]
async fn test_register_malformed_json() {
    let server = common::make_server();

    let response = server
        .post("/register")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["code"], "validation_error");
    assert_eq!(json["message"], "Invalid JSON body");
}

#[tokio::test]
async fn test_register_without_body() {
    let server = common::make_server();

    let response = server.post("/register").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["code"], "missing_fields");
    assert_eq!(json["message"], "Username and password are required");
}

#[tokio::test]
async fn test_register_missing_fields_reported_before_bad_email() {
    let server = common::make_server();

    let response = server
        .post("/register")
        .json(&json!({ "password": "pw1", "email": "not-an-email" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "missing_fields");
}

// ─── LOGIN ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_login_returns_token_for_same_user() {
    let server = common::make_server();

    let token = common::register_and_login(&server, "alice", "pw1").await;

    // The token must verify under the same secret and carry the username.
    let verifier = AuthService::new(
        Arc::new(MemoryUserRepository::new()),
        common::TEST_SECRET,
        Duration::hours(1),
    );
    let identity = verifier.authenticate(&token).unwrap();
    assert_eq!(identity.username, "alice");
}

#[tokio::test]
async fn test_login_response_shape() {
    let server = common::make_server();
    common::register(&server, "alice", "pw1").await;

    let response = server
        .post("/customer/login")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["token_type"], "Bearer");
    assert!(json["token"].as_str().unwrap().split('.').count() == 3);
    assert!(json.get("expires_at").is_some());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = common::make_server();
    common::register(&server, "alice", "pw1").await;

    let response = server
        .post("/customer/login")
        .json(&json!({ "username": "alice", "password": "wrong" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["code"], "invalid_credentials");
}

#[tokio::test]
async fn test_login_unknown_user() {
    let server = common::make_server();

    let response = server
        .post("/customer/login")
        .json(&json!({ "username": "ghost", "password": "pw" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.json::<Value>()["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let server = common::make_server();

    let response = server
        .post("/customer/login")
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["code"], "missing_fields");
}

#[tokio::test]
async fn test_login_without_body() {
    let server = common::make_server();

    let response = server.post("/customer/login").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<Value>();
    assert_eq!(json["code"], "missing_fields");
    assert_eq!(json["message"], "Username and password are required");
}

// ─── SCENARIO ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_register_login_review_scenario() {
    let server = common::make_server();

    server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await
        .assert_status_ok();

    let duplicate = server
        .post("/register")
        .json(&json!({ "username": "alice", "password": "pw2" }))
        .await;
    duplicate.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        duplicate.json::<Value>()["message"],
        "Username already exists"
    );

    let login = server
        .post("/customer/login")
        .json(&json!({ "username": "alice", "password": "pw1" }))
        .await;
    login.assert_status_ok();
    let token = login.json::<Value>()["token"].as_str().unwrap().to_string();

    server
        .put("/customer/auth/review/123")
        .add_header(axum::http::header::AUTHORIZATION, common::bearer(&token))
        .json(&json!({ "review": "Solid read" }))
        .await
        .assert_status_ok();

    let reviews = server.get("/review/123").await;
    reviews.assert_status_ok();
    assert_eq!(reviews.json::<Value>()["reviews"]["alice"], "Solid read");
}
