//! Book entity and its reviews.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A catalog record keyed by ISBN.
///
/// Reviews are keyed by the reviewer's username, so each user holds at most one
/// review per book. `reviews` is `None` until the first review is written; once
/// created the map stays, even when emptied again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub reviews: Option<BTreeMap<String, String>>,
}

impl Book {
    /// Creates a book without reviews.
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: None,
        }
    }

    /// Reviews keyed by reviewer; empty when none were ever written.
    pub fn into_reviews(self) -> BTreeMap<String, String> {
        self.reviews.unwrap_or_default()
    }
}

/// Seed record used to populate a repository.
///
/// Matches the layout of the JSON catalog files; `reviews` may be omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub reviews: Option<BTreeMap<String, String>>,
}

impl From<NewBook> for Book {
    fn from(new: NewBook) -> Self {
        Self {
            isbn: new.isbn,
            title: new.title,
            author: new.author,
            reviews: new.reviews,
        }
    }
}
