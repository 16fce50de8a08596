//! Common validation rules shared across request payloads.

use std::borrow::Cow;
use validator::ValidationError;

/// Validates that a button title carries visible content.
pub fn validate_title_not_blank(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("title_blank")
            .with_message(Cow::Borrowed("title cannot be empty")));
    }

    Ok(())
}

/// Validates the button title length.
///
/// Requirements:
/// - At most 100 characters
pub fn validate_title_length(title: &str) -> Result<(), ValidationError> {
    if title.chars().count() > 100 {
        return Err(ValidationError::new("title_too_long")
            .with_message(Cow::Borrowed("title cannot exceed 100 characters")));
    }

    Ok(())
}

/// Validates that a button color carries visible content.
pub fn validate_color_not_blank(color: &str) -> Result<(), ValidationError> {
    if color.trim().is_empty() {
        return Err(ValidationError::new("color_blank")
            .with_message(Cow::Borrowed("color cannot be empty")));
    }

    Ok(())
}

/// Validates the button color format.
///
/// Requirements:
/// - Leading `#` followed by exactly six hex digits
pub fn validate_color_hex(color: &str) -> Result<(), ValidationError> {
    let valid = match color.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    };

    if !valid {
        return Err(ValidationError::new("color_invalid_hex").with_message(Cow::Borrowed(
            "color must be a valid hex color code (e.g., #FF5733)",
        )));
    }

    Ok(())
}
