//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod books;
pub mod deferred;
pub mod health;
pub mod login;
pub mod register;
pub mod reviews;

pub use books::{
    book_by_isbn_handler, book_list_handler, books_by_author_handler, books_by_title_handler,
    reviews_handler,
};
pub use deferred::{
    deferred_book_by_isbn_handler, deferred_book_list_handler, deferred_books_by_author_handler,
    deferred_books_by_title_handler,
};
pub use health::health_handler;
pub use login::login_handler;
pub use register::register_handler;
pub use reviews::{delete_review_handler, upsert_review_handler};
