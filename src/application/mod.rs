//! Application layer services implementing business rules.
//!
//! Services consume repository traits and give handlers a storage-agnostic API.
//!
//! # Available Services
//!
//! - [`services::book_service::BookService`] - Catalog queries and review mutation
//! - [`services::auth_service::AuthService`] - Registration, login and token verification

pub mod services;
