use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const AUTHOR_NOT_FOUND: &str = "Books by this author not found";
pub const TITLE_NOT_FOUND: &str = "Books with this title not found";

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    code: &'static str,
    #[serde(skip_serializing_if = "Value::is_null")]
    details: Value,
}

/// Errors surfaced by handlers, services and repositories.
///
/// Every variant maps to exactly one HTTP status; the response body is
/// `{ "message": ..., "code": ... }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingFields(&'static str),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized: Token is missing")]
    MissingCredential,

    #[error("Unauthorized: Invalid token")]
    InvalidCredential,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Invalid username: {0}")]
    InvalidUsername(&'static str),

    #[error("{0}")]
    BookNotFound(&'static str),

    #[error("No reviews found for this book")]
    NoReviewsForBook,

    #[error("Review not found for this user")]
    ReviewNotFound,

    #[error("Review is required")]
    MissingReview,

    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields(_)
            | Self::UsernameTaken
            | Self::InvalidUsername(_)
            | Self::MissingReview
            | Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials | Self::MissingCredential | Self::InvalidCredential => {
                StatusCode::UNAUTHORIZED
            }
            Self::BookNotFound(_) | Self::NoReviewsForBook | Self::ReviewNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable identifier for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "missing_fields",
            Self::InvalidCredentials => "invalid_credentials",
            Self::MissingCredential => "missing_credential",
            Self::InvalidCredential => "invalid_credential",
            Self::UsernameTaken => "username_taken",
            Self::InvalidUsername(_) => "invalid_username",
            Self::BookNotFound(_) => "book_not_found",
            Self::NoReviewsForBook => "no_reviews_for_book",
            Self::ReviewNotFound => "review_not_found",
            Self::MissingReview => "missing_review",
            Self::Validation { .. } => "validation_error",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();
        let message = self.to_string();

        let details = match self {
            AppError::Validation { details, .. } => details,
            AppError::Internal { details, .. } => {
                tracing::error!(%message, %details, "Internal error");
                Value::Null
            }
            _ => Value::Null,
        };

        let body = ErrorBody {
            message,
            code,
            details,
        };

        let mut response = (status, Json(body)).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
