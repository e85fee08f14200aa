//! Shared application state injected into every handler.

use chrono::Duration;
use std::sync::Arc;

use crate::application::services::{AuthService, BookService};
use crate::domain::repositories::{BookRepository, UserRepository};

/// Services behind trait objects, so the storage backend can be swapped
/// without touching handlers.
#[derive(Clone)]
pub struct AppState {
    pub book_service: Arc<BookService<dyn BookRepository>>,
    pub auth_service: Arc<AuthService<dyn UserRepository>>,
}

impl AppState {
    /// Wires services over the given repositories.
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        user_repository: Arc<dyn UserRepository>,
        signing_secret: &str,
        token_ttl: Duration,
    ) -> Self {
        Self {
            book_service: Arc::new(BookService::new(book_repository)),
            auth_service: Arc::new(AuthService::new(
                user_repository,
                signing_secret,
                token_ttl,
            )),
        }
    }
}
