#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum::http::HeaderValue;
use axum_test::TestServer;
use book_catalog::domain::entities::NewBook;
use book_catalog::domain::repositories::{BookRepository, UserRepository};
use book_catalog::infrastructure::persistence::{MemoryBookRepository, MemoryUserRepository};
use book_catalog::routes::app;
use book_catalog::state::AppState;
use chrono::Duration;
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub fn new_book(isbn: &str, title: &str, author: &str) -> NewBook {
    NewBook {
        isbn: isbn.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        reviews: None,
    }
}

/// Small catalog: two books share an author, one already carries bob's review.
pub fn test_books() -> Vec<NewBook> {
    let mut reviewed = new_book("777", "Reviewed Book", "Some Author");
    reviewed.reviews = Some(BTreeMap::from([(
        "bob".to_string(),
        "Bob liked it".to_string(),
    )]));

    vec![
        new_book("123", "Test Book", "Ann Author"),
        new_book("456", "Second Book", "Ann Author"),
        new_book("8", "Pride and Prejudice", "Jane Austen"),
        reviewed,
    ]
}

pub fn create_test_state() -> AppState {
    let books: Arc<dyn BookRepository> = Arc::new(MemoryBookRepository::with_data(test_books()));
    let users: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());

    AppState::new(books, users, TEST_SECRET, Duration::hours(1))
}

pub fn make_server() -> TestServer {
    TestServer::new(ServiceExt::<Request>::into_make_service(app(create_test_state()))).unwrap()
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

pub async fn register(server: &TestServer, username: &str, password: &str) {
    server
        .post("/register")
        .json(&json!({ "username": username, "password": password }))
        .await
        .assert_status_ok();
}

/// Registers `username` and returns a fresh bearer token for it.
pub async fn register_and_login(server: &TestServer, username: &str, password: &str) -> String {
    register(server, username, password).await;

    let response = server
        .post("/customer/login")
        .json(&json!({ "username": username, "password": password }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}
