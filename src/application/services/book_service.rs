//! Catalog query and review service.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::entities::Book;
use crate::domain::repositories::{BookRepository, ReviewRemoval, ReviewUpsert};
use crate::error::{AUTHOR_NOT_FOUND, AppError, BOOK_NOT_FOUND, TITLE_NOT_FOUND};

/// Service for browsing the catalog and managing reviews.
///
/// Author and title searches return every exact match and treat an empty result
/// as [`AppError::BookNotFound`].
pub struct BookService<R: BookRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: BookRepository + ?Sized> BookService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the whole catalog.
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a book by ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BookNotFound`] if no book has this ISBN.
    pub async fn get_book(&self, isbn: &str) -> Result<Book, AppError> {
        self.repository
            .find_by_isbn(isbn)
            .await?
            .ok_or(AppError::BookNotFound(BOOK_NOT_FOUND))
    }

    /// Returns every book written by `author`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BookNotFound`] if there are none.
    pub async fn books_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        let books = self.repository.find_by_author(author).await?;
        non_empty(books, AUTHOR_NOT_FOUND)
    }

    /// Returns every book titled `title`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BookNotFound`] if there are none.
    pub async fn books_by_title(&self, title: &str) -> Result<Vec<Book>, AppError> {
        let books = self.repository.find_by_title(title).await?;
        non_empty(books, TITLE_NOT_FOUND)
    }

    /// Returns the reviews of a book keyed by reviewer; may be empty.
    pub async fn get_reviews(&self, isbn: &str) -> Result<BTreeMap<String, String>, AppError> {
        Ok(self.get_book(isbn).await?.into_reviews())
    }

    /// Adds `username`'s review of a book or replaces their previous one.
    ///
    /// # Errors
    ///
    /// - [`AppError::MissingReview`] if `review` is blank
    /// - [`AppError::BookNotFound`] if the ISBN is unknown
    pub async fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        review: &str,
    ) -> Result<ReviewUpsert, AppError> {
        if review.trim().is_empty() {
            return Err(AppError::MissingReview);
        }

        let outcome = self
            .repository
            .upsert_review(isbn, username, review)
            .await?
            .ok_or(AppError::BookNotFound(BOOK_NOT_FOUND))?;

        tracing::info!(isbn, username, ?outcome, "Review saved");

        Ok(outcome)
    }

    /// Removes `username`'s review of a book.
    ///
    /// # Errors
    ///
    /// - [`AppError::BookNotFound`] if the ISBN is unknown
    /// - [`AppError::NoReviewsForBook`] if the book has never been reviewed
    /// - [`AppError::ReviewNotFound`] if this user has not reviewed the book
    pub async fn delete_review(&self, isbn: &str, username: &str) -> Result<(), AppError> {
        match self.repository.remove_review(isbn, username).await? {
            ReviewRemoval::Removed => {
                tracing::info!(isbn, username, "Review deleted");
                Ok(())
            }
            ReviewRemoval::BookMissing => Err(AppError::BookNotFound(BOOK_NOT_FOUND)),
            ReviewRemoval::NoReviews => Err(AppError::NoReviewsForBook),
            ReviewRemoval::ReviewMissing => Err(AppError::ReviewNotFound),
        }
    }

    pub async fn count_books(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

fn non_empty(books: Vec<Book>, message: &'static str) -> Result<Vec<Book>, AppError> {
    if books.is_empty() {
        Err(AppError::BookNotFound(message))
    } else {
        Ok(books)
    }
}
