//! Business logic services for the application layer.

pub mod auth_service;
pub mod book_service;

pub use auth_service::{AuthService, IssuedToken};
pub use book_service::BookService;
