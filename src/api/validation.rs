//! Field-level validation for incoming DTOs.
//! Rejects bad data before it reaches the persistence layer.

use crate::errors::AppError;
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();
}

pub fn require_non_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!(
            "{} must not be empty",
            field
        )));
    }
    Ok(())
}

pub fn require_email(value: &str) -> Result<(), AppError> {
    if !EMAIL_RE.is_match(value) {
        return Err(AppError::InvalidInput(format!(
            "'{}' is not a valid email address",
            value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_accepts_regular_values() {
        assert!(require_non_empty("name", "John Doe").is_ok());
    }

    #[test]
    fn non_empty_rejects_blank_and_whitespace() {
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "   ").is_err());
    }

    #[test]
    fn email_accepts_common_addresses() {
        assert!(require_email("john@example.com").is_ok());
        assert!(require_email("first.last+tag@sub.domain.org").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(require_email("not-an-email").is_err());
        assert!(require_email("missing@tld").is_err());
        assert!(require_email("@example.com").is_err());
    }
}
