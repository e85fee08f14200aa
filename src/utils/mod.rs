//! Helpers shared by the application services.
//!
//! - [`password`] - Argon2id hashing and verification
//! - [`username`] - Username format rules

pub mod password;
pub mod username;
