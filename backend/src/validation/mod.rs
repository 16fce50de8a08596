//! Request payload validation.
//!
//! Field rules live in [`rules`]; payload types compose them so one
//! response carries every violation at once.

pub mod rules;

pub use validator::Validate;

use validator::ValidationErrors;

/// Runs every button field rule and collects all violations, so a payload
/// failing several rules reports the complete list rather than the first.
pub fn validate_button_fields(title: &str, color: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = rules::validate_title_not_blank(title) {
        errors.add("title".into(), e);
    }
    if let Err(e) = rules::validate_title_length(title) {
        errors.add("title".into(), e);
    }
    if let Err(e) = rules::validate_color_not_blank(color) {
        errors.add("color".into(), e);
    }
    if let Err(e) = rules::validate_color_hex(color) {
        errors.add("color".into(), e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
