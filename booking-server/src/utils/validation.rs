//! Input validation helpers
//!
//! Centralized text length constants and validation functions for
//! the public submission endpoints. SurrealDB is schemaless, so all
//! enforcement happens here.

use shared::models::{MAX_RATING, MIN_RATING};

use crate::utils::AppError;

// ========== Text length limits ==========

/// Customer / author names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Phone numbers and other short identifiers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Notes, reasons, customer messages, review comments
pub const MAX_NOTE_LEN: usize = 500;

/// Largest accepted party size. A party can never exceed a branch's
/// per-slot capacity, and bounding the input keeps occupancy sums
/// far away from integer range.
pub const MAX_GUESTS: u32 = 100;

// ========== Validation helpers ==========

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate an email address: required, bounded, contains a single '@'
/// with text on both sides. Deliverability is the mailer's problem.
pub fn validate_email(value: &str) -> Result<(), AppError> {
    validate_required_text(value, "email", MAX_EMAIL_LEN)?;
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AppError::validation(format!("Invalid email address: {value}")));
    }
    Ok(())
}

/// Validate a party size (1 to [`MAX_GUESTS`] inclusive)
pub fn validate_guests(guests: u32) -> Result<(), AppError> {
    if guests == 0 {
        return Err(AppError::validation("guests must be greater than 0"));
    }
    if guests > MAX_GUESTS {
        return Err(AppError::validation(format!(
            "guests must be at most {MAX_GUESTS}, got {guests}"
        )));
    }
    Ok(())
}

/// Validate a review rating (1-5 inclusive)
pub fn validate_rating(rating: u8) -> Result<(), AppError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Validate that a time-of-day label is one of the configured slots
pub fn validate_time_label(time: &str, labels: &[String]) -> Result<(), AppError> {
    if !labels.iter().any(|l| l == time) {
        return Err(AppError::validation(format!("Unknown time slot: {time}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank_and_oversized() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(MAX_NAME_LEN + 1), "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Alice", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn email_needs_local_and_domain() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@").is_err());
        assert!(validate_email("alice").is_err());
    }

    #[test]
    fn guests_must_be_positive_and_bounded() {
        assert!(validate_guests(0).is_err());
        assert!(validate_guests(1).is_ok());
        assert!(validate_guests(MAX_GUESTS).is_ok());
        // Huge party sizes would blow up the occupancy sums downstream
        assert!(validate_guests(MAX_GUESTS + 1).is_err());
        assert!(validate_guests(u32::MAX).is_err());
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(7).is_err());
        for r in 1..=5 {
            assert!(validate_rating(r).is_ok());
        }
    }

    #[test]
    fn time_label_must_be_configured() {
        let labels = vec!["7:00 PM".to_string(), "8:00 PM".to_string()];
        assert!(validate_time_label("7:00 PM", &labels).is_ok());
        assert!(validate_time_label("7:30 PM", &labels).is_err());
    }
}
