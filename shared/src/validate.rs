//! Custom field validators used by request payloads

use validator::ValidationError;

/// Contact phone numbers are exactly 10 digits, no separators.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("must be exactly 10 digits".into()))
    }
}
