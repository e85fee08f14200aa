//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using Bearer tokens from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Reject with `MissingCredential` if there is no `Authorization` header
/// 2. Extract the bearer token
/// 3. Verify signature and expiry via [`crate::application::services::AuthService`]
/// 4. Insert the resulting [`crate::domain::entities::AuthUser`] into request extensions
/// 5. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing (`missing_credential`)
/// - The header is not `Bearer <token>`, or the token is malformed,
///   forged or expired (`invalid_credential`)
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, routing::put, middleware};
/// use crate::api::middleware::auth;
///
/// let protected = Router::new()
///     .route("/review/{isbn}", put(upsert_review_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    if !parts.headers.contains_key(AUTHORIZATION) {
        return Err(AppError::MissingCredential);
    }

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::InvalidCredential)?;

    let user = st.auth_service.authenticate(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}
