//! Handlers for review mutation. Both require [`AuthUser`] from the auth layer.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::message::MessageResponse;
use crate::api::dto::review::{ReviewRequest, ReviewSavedResponse};
use crate::api::extract::JsonBody;
use crate::domain::entities::AuthUser;
use crate::domain::repositories::ReviewUpsert;
use crate::error::AppError;
use crate::state::AppState;

/// Adds or replaces the caller's review of a book.
///
/// # Endpoint
///
/// `PUT /customer/auth/review/{isbn}`
///
/// # Request Body
///
/// ```json
/// { "review": "A classic." }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if `review` is missing or blank, or the body is absent
/// - 404 Not Found if no book has this ISBN
pub async fn upsert_review_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(payload): JsonBody<ReviewRequest>,
) -> Result<Json<ReviewSavedResponse>, AppError> {
    let review = payload.review.ok_or(AppError::MissingReview)?;

    let outcome = state
        .book_service
        .upsert_review(&isbn, &user.username, &review)
        .await?;

    Ok(Json(ReviewSavedResponse {
        message: "Review added/modified successfully".to_string(),
        created: outcome == ReviewUpsert::Created,
    }))
}

/// Deletes the caller's review of a book.
///
/// # Endpoint
///
/// `DELETE /customer/auth/review/{isbn}`
///
/// # Errors
///
/// Returns 404 Not Found if the book is unknown, has never been reviewed, or has no
/// review by the caller.
pub async fn delete_review_handler(
    Path(isbn): Path<String>,
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .book_service
        .delete_review(&isbn, &user.username)
        .await?;

    Ok(Json(MessageResponse::new("Review deleted successfully")))
}
