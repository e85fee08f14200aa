//! Handler for customer login.

use axum::{Json, extract::State};

use crate::api::dto::auth::{LoginRequest, LoginResponse, non_empty};
use crate::api::extract::JsonBody;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /customer/login`
///
/// # Response
///
/// ```json
/// { "token": "eyJ...", "token_type": "Bearer", "expires_at": "2026-01-01T00:00:00Z" }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if username or password is missing
/// - 401 Unauthorized if the credentials do not match a registered user
pub async fn login_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {

    let (Some(username), Some(password)) =
        (non_empty(payload.username), non_empty(payload.password))
    else {
        return Err(AppError::MissingFields("Username and password are required"));
    };

    let issued = state.auth_service.login(&username, &password).await?;

    Ok(Json(LoginResponse {
        token: issued.token,
        token_type: "Bearer",
        expires_at: issued.expires_at,
    }))
}
