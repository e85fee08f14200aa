//! API route configuration.

use crate::api::handlers::{
    book_by_isbn_handler, book_list_handler, books_by_author_handler, books_by_title_handler,
    deferred_book_by_isbn_handler, deferred_book_list_handler, deferred_books_by_author_handler,
    deferred_books_by_title_handler, delete_review_handler, login_handler, register_handler,
    reviews_handler, upsert_review_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Public catalog and registration routes.
///
/// # Endpoints
///
/// - `GET  /`                       - List all books
/// - `GET  /isbn/{isbn}`            - Book by ISBN
/// - `GET  /author/{author}`        - Books by exact author
/// - `GET  /title/{title}`          - Books by exact title
/// - `GET  /review/{isbn}`          - Reviews of a book
/// - `GET  /async/books`            - Deferred list
/// - `GET  /async/isbn/{isbn}`      - Deferred ISBN lookup
/// - `GET  /async/author/{author}`  - Deferred author lookup
/// - `GET  /async/title/{title}`    - Deferred title lookup
/// - `POST /register`               - Create an account
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(book_list_handler))
        .route("/isbn/{isbn}", get(book_by_isbn_handler))
        .route("/author/{author}", get(books_by_author_handler))
        .route("/title/{title}", get(books_by_title_handler))
        .route("/review/{isbn}", get(reviews_handler))
        .route("/async/books", get(deferred_book_list_handler))
        .route("/async/isbn/{isbn}", get(deferred_book_by_isbn_handler))
        .route("/async/author/{author}", get(deferred_books_by_author_handler))
        .route("/async/title/{title}", get(deferred_books_by_title_handler))
        .route("/register", post(register_handler))
}

/// Customer routes that do not need a token.
///
/// # Endpoints
///
/// - `POST /login` - Exchange credentials for a bearer token
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/login", post(login_handler))
}

/// Customer routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `PUT    /review/{isbn}` - Add or replace the caller's review
/// - `DELETE /review/{isbn}` - Delete the caller's review
pub fn protected_routes() -> Router<AppState> {
    Router::new().route(
        "/review/{isbn}",
        put(upsert_review_handler).delete(delete_review_handler),
    )
}
