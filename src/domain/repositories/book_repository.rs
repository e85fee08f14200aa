//! Repository trait for the book catalog.

use crate::domain::entities::Book;
use crate::error::AppError;
use async_trait::async_trait;

/// Outcome of writing a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewUpsert {
    /// The user had no review for this book before.
    Created,
    /// An existing review by the same user was overwritten.
    Updated,
}

/// Outcome of removing a review.
///
/// Every branch is decided under the same lock as the removal itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewRemoval {
    Removed,
    BookMissing,
    /// The book has never been reviewed.
    NoReviews,
    /// The book has been reviewed, but not by this user.
    ReviewMissing,
}

/// Repository interface for catalog storage.
///
/// Lookups by author and title are exact string matches: no substring search,
/// no case folding.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryBookRepository`] - In-memory map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Returns every book ordered by ISBN.
    async fn list(&self) -> Result<Vec<Book>, AppError>;

    /// Finds a book by its exact ISBN.
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, AppError>;

    /// Returns all books whose author equals `author`.
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError>;

    /// Returns all books whose title equals `title`.
    async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, AppError>;

    /// Writes `review` as `username`'s review of the book.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` if no book has this ISBN
    /// - `Ok(Some(ReviewUpsert::Created | ReviewUpsert::Updated))` otherwise
    async fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        review: &str,
    ) -> Result<Option<ReviewUpsert>, AppError>;

    /// Removes `username`'s review of the book, reporting why nothing was
    /// removed when that is the case.
    async fn remove_review(&self, isbn: &str, username: &str) -> Result<ReviewRemoval, AppError>;

    /// Number of books in the catalog.
    async fn count(&self) -> Result<usize, AppError>;
}
