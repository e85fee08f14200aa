//! In-memory repository implementations.
//!
//! State is process-local and lost on restart. Each repository guards its map
//! with a `tokio::sync::RwLock`; mutations check and write under one write
//! guard.
//!
//! # Repositories
//!
//! - [`MemoryBookRepository`] - Catalog and reviews
//! - [`MemoryUserRepository`] - Registered accounts

pub mod memory_book_repository;
pub mod memory_user_repository;

pub use memory_book_repository::MemoryBookRepository;
pub use memory_user_repository::MemoryUserRepository;
