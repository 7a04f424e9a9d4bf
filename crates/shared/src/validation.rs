//! Common validation utilities.

use validator::{ValidationError, ValidationErrors};

/// Minimum password length accepted at signup.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Validates that a required text field is not empty or whitespace-only.
pub fn validate_non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("This field is required".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a service rating is within the 0 to 5 scale.
pub fn validate_rating(rating: f64) -> Result<(), ValidationError> {
    if (0.0..=5.0).contains(&rating) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rating_range");
        err.message = Some("Rating must be between 0 and 5".into());
        Err(err)
    }
}

/// Validates that a password meets the minimum length.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() >= MIN_PASSWORD_LENGTH {
        Ok(())
    } else {
        let mut err = ValidationError::new("password_length");
        err.message = Some("Password must be at least 6 characters".into());
        Err(err)
    }
}

/// Builds the error set for a single missing required field.
pub fn required_error(field: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    let mut err = ValidationError::new("required");
    err.message = Some("This field is required".into());
    errors.add(field, err);
    errors
}
