//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns service health status with repository checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All repositories respond
/// - **503 Service Unavailable**: A repository query failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "books": { "status": "ok", "message": "10 books" },
///     "users": { "status": "ok", "message": "2 users" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let books = check_count(state.book_service.count_books().await, "books");
    let users = check_count(state.auth_service.count_users().await, "users");

    let all_healthy = books.status == "ok" && users.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { books, users },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

fn check_count(result: Result<usize, AppError>, noun: &str) -> CheckStatus {
    match result {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} {noun}")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Repository error: {e}")),
        },
    }
}
