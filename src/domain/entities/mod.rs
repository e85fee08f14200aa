//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Book`] - A catalog record with its reviews
//! - [`User`] - A registered account
//! - [`Claims`] - Identity carried inside a session token
//!
//! Creation inputs live in separate structs (`NewBook`, `NewUser`), following the
//! same split used for persisted records.

pub mod book;
pub mod claims;
pub mod user;

pub use book::{Book, NewBook};
pub use claims::{AuthUser, Claims};
pub use user::{NewUser, User};
