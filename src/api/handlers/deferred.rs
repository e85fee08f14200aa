//! Deferred variants of the catalog queries.
//!
//! Each lookup runs on its own tokio task and the handler awaits the task's
//! result. Responses are identical to the synchronous endpoints.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use std::future::Future;

use crate::api::dto::book::{BookItem, book_items};
use crate::error::AppError;
use crate::state::AppState;

/// Runs `lookup` on a spawned task and returns its output.
async fn defer<T, F>(lookup: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, AppError>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(lookup).await.map_err(|e| {
        AppError::internal(
            "Error retrieving books",
            json!({ "reason": e.to_string() }),
        )
    })?
}

/// `GET /async/books`
pub async fn deferred_book_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let service = state.book_service.clone();
    let books = defer(async move { service.list_books().await }).await?;
    Ok(Json(book_items(books)))
}

/// `GET /async/isbn/{isbn}`
pub async fn deferred_book_by_isbn_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    let service = state.book_service.clone();
    let book = defer(async move { service.get_book(&isbn).await }).await?;
    Ok(Json(book.into()))
}

/// `GET /async/author/{author}`
pub async fn deferred_books_by_author_handler(
    Path(author): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let service = state.book_service.clone();
    let books = defer(async move { service.books_by_author(&author).await }).await?;
    Ok(Json(book_items(books)))
}

/// `GET /async/title/{title}`
pub async fn deferred_books_by_title_handler(
    Path(title): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let service = state.book_service.clone();
    let books = defer(async move { service.books_by_title(&title).await }).await?;
    Ok(Json(book_items(books)))
}
