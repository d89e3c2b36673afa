//! Input validation helpers
//!
//! Centralized text length constants and validation functions.

use shared::error::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: guest, hotel, room type, plan, menu item, staff
pub const MAX_NAME_LEN: usize = 200;

/// Notes, special requests, kitchen notes
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, country, payment method tag, room number
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
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

/// Validate an email address shape (`local@domain.tld`). Empty is allowed.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {MAX_EMAIL_LEN})",
            value.len()
        )));
    }
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(AppError::validation(format!("{field} is not a valid email")));
    }
    Ok(())
}
