//! DTOs for catalog queries.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entities::Book;

/// A book as returned by the public endpoints.
#[derive(Debug, Serialize)]
pub struct BookItem {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub reviews: BTreeMap<String, String>,
}

impl From<Book> for BookItem {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            reviews: book.reviews.unwrap_or_default(),
        }
    }
}

pub fn book_items(books: Vec<Book>) -> Vec<BookItem> {
    books.into_iter().map(BookItem::from).collect()
}
