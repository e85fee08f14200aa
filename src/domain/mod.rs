//! Domain layer containing catalog entities and storage contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (books, users, token claims)
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Business rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
