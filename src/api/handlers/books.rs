//! Handlers for public catalog queries.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::book::{BookItem, book_items};
use crate::api::dto::review::ReviewsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every book in the catalog.
///
/// # Endpoint
///
/// `GET /`
pub async fn book_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.list_books().await?;
    Ok(Json(book_items(books)))
}

/// Returns one book by exact ISBN.
///
/// # Endpoint
///
/// `GET /isbn/{isbn}`
///
/// # Errors
///
/// Returns 404 Not Found if no book has this ISBN.
pub async fn book_by_isbn_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    let book = state.book_service.get_book(&isbn).await?;
    Ok(Json(book.into()))
}

/// Returns every book whose author equals the path segment exactly.
///
/// # Endpoint
///
/// `GET /author/{author}`
///
/// # Errors
///
/// Returns 404 Not Found if nothing matches.
pub async fn books_by_author_handler(
    Path(author): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.books_by_author(&author).await?;
    Ok(Json(book_items(books)))
}

/// Returns every book whose title equals the path segment exactly.
///
/// # Endpoint
///
/// `GET /title/{title}`
///
/// # Errors
///
/// Returns 404 Not Found if nothing matches.
pub async fn books_by_title_handler(
    Path(title): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = state.book_service.books_by_title(&title).await?;
    Ok(Json(book_items(books)))
}

/// Returns the reviews of a book.
///
/// # Endpoint
///
/// `GET /review/{isbn}`
///
/// # Response
///
/// ```json
/// { "reviews": { "alice": "Loved it" } }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no book has this ISBN.
pub async fn reviews_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ReviewsResponse>, AppError> {
    let reviews = state.book_service.get_reviews(&isbn).await?;
    Ok(Json(ReviewsResponse { reviews }))
}
