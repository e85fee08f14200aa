//! Data Transfer Objects for API requests and responses.
//!
//! Request fields are optional at the serde level and request types implement
//! `Default`, so a missing field or a missing body is reported as
//! `MissingFields` rather than a deserialization failure.

pub mod auth;
pub mod book;
pub mod health;
pub mod message;
pub mod review;
