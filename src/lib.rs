//! # Book Catalog
//!
//! A book catalog service with public browsing and token-protected reviews,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - Catalog and authentication services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repositories and catalog seeding
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Lookup by ISBN, exact author, exact title
//! - One review per user per book, written and deleted with a bearer token
//! - Argon2id password hashing and expiring HS256 session tokens
//!
//! ## Quick Start
//!
//! ```bash
//! export TOKEN_SIGNING_SECRET="$(openssl rand -hex 32)"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

