//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so services never depend on a concrete
//! store. Implementations live in `crate::infrastructure::persistence`; mock
//! implementations are generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`BookRepository`] - Catalog queries and review mutation
//! - [`UserRepository`] - Registered account storage

pub mod book_repository;
pub mod user_repository;

pub use book_repository::{BookRepository, ReviewRemoval, ReviewUpsert};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
