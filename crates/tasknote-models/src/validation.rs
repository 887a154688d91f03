//! Field validators shared by the request DTOs.

use std::borrow::Cow;

use validator::ValidationError;

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if tasknote_db::is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone")
            .with_message(Cow::Borrowed("must be 11 digits starting with 1")))
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("not_blank").with_message(Cow::Borrowed("must not be empty")))
    } else {
        Ok(())
    }
}
