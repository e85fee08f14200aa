//! Username format rules applied at registration.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;

static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid username regex"));

pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 20;

/// Names that cannot be registered, compared case-insensitively.
pub const RESERVED_USERNAMES: &[&str] = &["admin", "root", "superuser"];

/// Checks that `username` is 3 to 20 ASCII letters or digits and not reserved.
///
/// # Errors
///
/// Returns [`AppError::InvalidUsername`] naming the rule that failed.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if !USERNAME_REGEX.is_match(username) {
        return Err(AppError::InvalidUsername("only letters and digits are allowed"));
    }

    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&username.len()) {
        return Err(AppError::InvalidUsername(
            "must be between 3 and 20 characters",
        ));
    }

    if RESERVED_USERNAMES
        .iter()
        .any(|reserved| username.eq_ignore_ascii_case(reserved))
    {
        return Err(AppError::InvalidUsername("this name is reserved"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_username(username: &str) -> bool {
        validate_username(username).is_ok()
    }

    #[test]
    fn test_accepts_alphanumeric() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("Bob42"));
        assert!(is_valid_username("abc"));
        assert!(is_valid_username("a1234567890123456789"));
    }

    #[test]
    fn test_rejects_length() {
        assert!(!is_valid_username(""));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("a12345678901234567890"));
    }

    #[test]
    fn test_rejects_charset() {
        assert!(!is_valid_username("alice_b"));
        assert!(!is_valid_username("al ice"));
        assert!(!is_valid_username("jörg"));
    }

    #[test]
    fn test_rejects_reserved_any_case() {
        assert!(!is_valid_username("admin"));
        assert!(!is_valid_username("ROOT"));
        assert!(!is_valid_username("SuperUser"));
        assert!(is_valid_username("admins"));
    }

    #[test]
    fn test_error_kind() {
        assert!(matches!(
            validate_username("no"),
            Err(AppError::InvalidUsername(_))
        ));
    }
}
