//! User account entity.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `password_hash` holds an Argon2id PHC string; the plaintext password is never
/// stored.
#[derive(Debug, Clone)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
}
