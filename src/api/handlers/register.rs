//! Handler for account registration.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{RegisterRequest, non_empty};
use crate::api::dto::message::MessageResponse;
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /register`
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "pw1", "email": "alice@example.com" }
/// ```
///
/// `email` is optional.
///
/// # Errors
///
/// Returns 400 Bad Request if:
/// - username or password is missing (checked before anything else)
/// - the username is not 3-20 letters/digits or is reserved
/// - the email is malformed
/// - the username is already registered
pub async fn register_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (Some(username), Some(password)) = (
        non_empty(payload.username.clone()),
        non_empty(payload.password.clone()),
    ) else {
        return Err(AppError::MissingFields("Username and password are required"));
    };

    payload.validate()?;

    state
        .auth_service
        .register(&username, &password, payload.email)
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}
