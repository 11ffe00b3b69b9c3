// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-format rules for candidate and deployment data.
//!
//! These functions are pure and deterministic. They check shape only;
//! ordering and write-once rules live in the lifecycle transitions.

use crate::error::DomainError;

/// Minimum accepted length for an exit reason, in characters.
pub const MIN_EXIT_REASON_LEN: usize = 5;

fn is_ascii_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validates a temporary employee ID.
///
/// Rule: 3 to 10 ASCII alphanumeric characters.
///
/// # Errors
///
/// Returns `DomainError::InvalidFormat` if the value is out of range or
/// contains non-alphanumeric characters.
pub fn validate_employee_id(value: &str) -> Result<(), DomainError> {
    if !(3..=10).contains(&value.len()) || !is_ascii_alphanumeric(value) {
        return Err(DomainError::InvalidFormat {
            field: "employee_id",
            reason: String::from("must be 3-10 alphanumeric characters"),
        });
    }
    Ok(())
}

/// Validates a permanent employee ID.
///
/// Rule: 4 to 12 ASCII alphanumeric characters.
///
/// # Errors
///
/// Returns `DomainError::InvalidFormat` if the value is out of range or
/// contains non-alphanumeric characters.
pub fn validate_permanent_employee_id(value: &str) -> Result<(), DomainError> {
    if !(4..=12).contains(&value.len()) || !is_ascii_alphanumeric(value) {
        return Err(DomainError::InvalidFormat {
            field: "permanent_employee_id",
            reason: String::from("must be 4-12 alphanumeric characters"),
        });
    }
    Ok(())
}

/// Validates an email address shape.
///
/// This checks shape only (one `@`, a dotted domain, no whitespace), not
/// deliverability.
///
/// # Errors
///
/// Returns `DomainError::InvalidFormat` if the value is not a plausible
/// email address.
pub fn validate_email(field: &'static str, value: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidFormat {
        field,
        reason: String::from("must be a valid email address"),
    };

    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid());
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    // Domain must contain a dot with a label on each side
    match domain.split_once('.') {
        Some((head, tail)) if !head.is_empty() && !tail.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Validates a mobile number.
///
/// Rule: optional leading `+`, then 10 to 15 digits.
///
/// # Errors
///
/// Returns `DomainError::InvalidFormat` if the value is not a plausible
/// mobile number.
pub fn validate_mobile(value: &str) -> Result<(), DomainError> {
    let digits: &str = value.strip_prefix('+').unwrap_or(value);
    if !(10..=15).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(DomainError::InvalidFormat {
            field: "mobile",
            reason: String::from("must be 10-15 digits with an optional leading '+'"),
        });
    }
    Ok(())
}

/// Validates a required free-text field (name, gender).
///
/// # Errors
///
/// Returns `DomainError::InvalidFormat` if the value is empty or whitespace.
pub fn validate_required_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::InvalidFormat {
            field,
            reason: String::from("must not be empty"),
        });
    }
    Ok(())
}

/// Validates an exit reason.
///
/// Rule: at least [`MIN_EXIT_REASON_LEN`] characters after trimming.
///
/// # Errors
///
/// Returns `DomainError::ReasonTooShort` if the reason is shorter than the
/// minimum.
pub fn validate_exit_reason(reason: &str) -> Result<(), DomainError> {
    let actual: usize = reason.trim().chars().count();
    if actual < MIN_EXIT_REASON_LEN {
        return Err(DomainError::ReasonTooShort {
            minimum: MIN_EXIT_REASON_LEN,
            actual,
        });
    }
    Ok(())
}
