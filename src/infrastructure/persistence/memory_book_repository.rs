//! In-memory implementation of the book repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Book, NewBook};
use crate::domain::repositories::{BookRepository, ReviewRemoval, ReviewUpsert};
use crate::error::AppError;

/// Catalog held in a map keyed by ISBN.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<BTreeMap<String, Book>>,
}

impl MemoryBookRepository {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog populated with `books`.
    ///
    /// A later record with an ISBN already seen replaces the earlier one.
    pub fn with_data(books: Vec<NewBook>) -> Self {
        Self {
            books: RwLock::new(
                books
                    .into_iter()
                    .map(|book| (book.isbn.clone(), Book::from(book)))
                    .collect(),
            ),
        }
    }

    async fn filter_by<F>(&self, predicate: F) -> Vec<Book>
    where
        F: Fn(&Book) -> bool,
    {
        let books = self.books.read().await;
        books.values().filter(|b| predicate(b)).cloned().collect()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, AppError> {
        let books = self.books.read().await;
        Ok(books.get(isbn).cloned())
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>, AppError> {
        Ok(self.filter_by(|b| b.author == author).await)
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Book>, AppError> {
        Ok(self.filter_by(|b| b.title == title).await)
    }

    async fn upsert_review(
        &self,
        isbn: &str,
        username: &str,
        review: &str,
    ) -> Result<Option<ReviewUpsert>, AppError> {
        let mut books = self.books.write().await;

        let Some(book) = books.get_mut(isbn) else {
            return Ok(None);
        };

        let outcome = match book.reviews.get_or_insert_default().entry(username.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(review.to_string());
                ReviewUpsert::Created
            }
            Entry::Occupied(mut slot) => {
                slot.insert(review.to_string());
                ReviewUpsert::Updated
            }
        };

        Ok(Some(outcome))
    }

    async fn remove_review(&self, isbn: &str, username: &str) -> Result<ReviewRemoval, AppError> {
        let mut books = self.books.write().await;

        let Some(book) = books.get_mut(isbn) else {
            return Ok(ReviewRemoval::BookMissing);
        };

        let Some(reviews) = book.reviews.as_mut() else {
            return Ok(ReviewRemoval::NoReviews);
        };

        Ok(match reviews.remove(username) {
            Some(_) => ReviewRemoval::Removed,
            None => ReviewRemoval::ReviewMissing,
        })
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.books.read().await.len())
    }
}
