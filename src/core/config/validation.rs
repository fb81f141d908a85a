//! Validation helper functions for configuration types.

use crate::core::errors::{ColcheckError, Result};

/// Validate that a usize value is greater than zero.
pub fn validate_positive_usize(value: usize, field: &str) -> Result<()> {
    if value == 0 {
        return Err(ColcheckError::config_field(
            format!("{} must be greater than 0", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a ratio threshold lies on the 0-100 similarity scale.
pub fn validate_ratio(value: u8, field: &str) -> Result<()> {
    if value > 100 {
        return Err(ColcheckError::config_field(
            format!("{} must be between 0 and 100", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that `lower` does not exceed `upper`.
pub fn validate_ordered<T: PartialOrd + std::fmt::Display>(
    lower: T,
    upper: T,
    lower_field: &str,
    upper_field: &str,
) -> Result<()> {
    if lower > upper {
        return Err(ColcheckError::config_field(
            format!(
                "{} ({}) must not exceed {} ({})",
                lower_field, lower, upper_field, upper
            ),
            lower_field,
        ));
    }
    Ok(())
}

/// Validate that an f64 value is finite.
pub fn validate_finite(value: f64, field: &str) -> Result<()> {
    if !value.is_finite() {
        return Err(ColcheckError::config_field(
            format!("{} must be a finite number", field),
            field,
        ));
    }
    Ok(())
}

/// Validate that a string value is not blank.
pub fn validate_non_blank(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ColcheckError::config_field(
            format!("{} must not be empty", field),
            field,
        ));
    }
    Ok(())
}
