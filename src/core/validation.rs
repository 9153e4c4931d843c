//! Input validation for vault operations.
//!
//! Validates secret names, tags and deletion options before any network call.

use crate::core::constants::{MAX_NAME_LEN, MAX_RECOVERY_DAYS, MIN_RECOVERY_DAYS, NAME_SPECIAL_CHARS};
use crate::core::domain::Tag;
use crate::error::{Result, ValidationError};

/// Validate a secret name.
///
/// Names must be non-empty, at most 512 characters, and use only ASCII
/// letters, digits and `/_+=.@-`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` if the name is invalid.
pub fn validate_secret_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.chars().count() <= MAX_NAME_LEN
        && name
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || NAME_SPECIAL_CHARS.contains(ch));

    if !valid {
        return Err(ValidationError::InvalidName(name.to_string()).into());
    }

    Ok(())
}

/// Parse a `key=value` tag.
///
/// Splits on the first `=`, so values may contain `=` themselves.
///
/// # Errors
///
/// Returns `ValidationError::InvalidTag` when `=` is missing or either side
/// is empty.
pub fn parse_tag(raw: &str) -> Result<Tag> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() && !value.trim().is_empty() => Ok(Tag {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        }),
        _ => Err(ValidationError::InvalidTag(raw.to_string()).into()),
    }
}

/// Parse every tag, failing on the first invalid one.
pub fn parse_tags(raw: &[String]) -> Result<Vec<Tag>> {
    raw.iter().map(|t| parse_tag(t)).collect()
}

/// Validate a recovery window given on the command line.
///
/// # Errors
///
/// Returns `ValidationError::RecoveryDays` unless the value is an integer
/// in [7, 30].
pub fn validate_recovery_days(raw: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(days) if (MIN_RECOVERY_DAYS..=MAX_RECOVERY_DAYS).contains(&days) => Ok(days),
        _ => Err(ValidationError::RecoveryDays(raw.to_string()).into()),
    }
}
