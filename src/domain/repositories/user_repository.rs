//! Repository trait for registered accounts.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryUserRepository`] - In-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by exact username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// Stores a new user.
    ///
    /// The uniqueness check and the insert are a single atomic step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UsernameTaken`] if the username is already registered.
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    /// Number of registered users.
    async fn count(&self) -> Result<usize, AppError>;
}
