//! Infrastructure layer implementing domain storage contracts.
//!
//! # Modules
//!
//! - [`persistence`] - In-memory repository implementations
//! - [`seed`] - Catalog loading from the bundled or a user-supplied JSON file

pub mod persistence;
pub mod seed;
