//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/`, `/isbn/*`, `/author/*`, `/title/*`, `/review/*`, `/async/*`,
//!   `/register` - Public catalog and registration
//! - `GET  /health`                 - Health check
//! - `POST /customer/login`         - Token issuance
//! - `/customer/auth/*`             - Review mutation (Bearer token required)

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Wraps [`app_router`] so that `/isbn/8/` is routed as `/isbn/8`.
///
/// Path normalization has to run before routing, so it wraps the router
/// instead of being added with `Router::layer`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_router(state))
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let customer = api::routes::customer_routes().nest("/auth", protected);

    Router::new()
        .merge(api::routes::public_routes())
        .route("/health", get(health_handler))
        .nest("/customer", customer)
        .with_state(state)
        .layer(tracing::layer())
}
